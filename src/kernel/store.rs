use super::picker::{AnimationPhase, CompositeWheel, ModalEvent, PickerSurface};
use super::{Action, Effect, PickerProps, PickerState};
use crate::services::config::PickerConfig;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: PickerState,
    config: PickerConfig,
}

impl Store {
    pub fn new(props: PickerProps, config: PickerConfig) -> Self {
        Self {
            state: PickerState::new(props, config.timings),
            config,
        }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetVisible(visible) => {
                let prev = self.state.visible;
                self.state.visible = visible;
                let events = self.state.modal.set_visible(visible);
                let mounted = self.apply_modal_events(events);
                DispatchResult::changed(prev != visible || mounted)
            }
            Action::SetMode(mode) => {
                if self.state.props.mode == mode {
                    return DispatchResult::unchanged();
                }
                self.state.props.mode = mode;
                self.remount_surface();
                DispatchResult::changed(true)
            }
            Action::SetValue(value) => {
                if self.state.props.value == value {
                    return DispatchResult::unchanged();
                }
                self.state.props.value = value;
                if let Some(surface) = self.state.surface.as_mut() {
                    tracing::debug!(%value, "external value changed, reseeding pending value");
                    surface.reseed(value);
                }
                DispatchResult::changed(true)
            }
            Action::SetBounds { min, max } => {
                let props = &mut self.state.props;
                if props.minimum_date == min && props.maximum_date == max {
                    return DispatchResult::unchanged();
                }
                props.minimum_date = min;
                props.maximum_date = max;
                self.remount_surface();
                DispatchResult::changed(true)
            }
            Action::SetTitle(title) => {
                let prev = std::mem::replace(&mut self.state.props.title, title);
                DispatchResult::changed(prev != self.state.props.title)
            }
            Action::WheelDrag { column, delta } => DispatchResult::changed(
                self.with_interactive_wheels(|wheels| wheels.drag(column, delta)),
            ),
            Action::WheelRelease { column } => DispatchResult::changed(
                self.with_interactive_wheels(|wheels| wheels.release(column)),
            ),
            Action::WheelTap { column, index } => DispatchResult::changed(
                self.with_interactive_wheels(|wheels| wheels.tap(column, index)),
            ),
            Action::WheelStep { column, delta } => DispatchResult::changed(
                self.with_interactive_wheels(|wheels| wheels.step(column, delta)),
            ),
            Action::Confirm => {
                if !self.state.modal.is_interactive() {
                    return DispatchResult::unchanged();
                }
                let Some(surface) = self.state.surface.as_ref() else {
                    return DispatchResult::unchanged();
                };
                let value = surface.pending_value();
                tracing::info!(%value, "picker confirmed");
                self.close();
                DispatchResult {
                    effects: vec![Effect::Confirm(value)],
                    state_changed: true,
                }
            }
            Action::Cancel | Action::BackdropPress => {
                if self.state.surface.is_none() {
                    return DispatchResult::unchanged();
                }
                tracing::info!("picker cancelled");
                self.close();
                DispatchResult {
                    effects: vec![Effect::Cancel],
                    state_changed: true,
                }
            }
            Action::Tick { now } => {
                let animating = self.state.modal.is_animating();
                let events = self.state.modal.tick(now);
                let mut state_changed = animating || !events.is_empty();
                state_changed |= self.apply_modal_events(events);
                if let Some(surface) = self.state.surface.as_mut() {
                    state_changed |= surface.wheels_mut().tick(now);
                }
                DispatchResult::changed(state_changed)
            }
        }
    }

    fn close(&mut self) {
        self.state.visible = false;
        let events = self.state.modal.set_visible(false);
        self.apply_modal_events(events);
    }

    fn with_interactive_wheels(
        &mut self,
        f: impl FnOnce(&mut CompositeWheel) -> bool,
    ) -> bool {
        if !self.state.modal.is_interactive() {
            return false;
        }
        match self.state.surface.as_mut() {
            Some(surface) => f(surface.wheels_mut()),
            None => false,
        }
    }

    /// Rebuilds the mounted sheet after a prop the wheels are built from changed. A closing
    /// sheet keeps its wheels; a reopen mounts from the current props.
    fn remount_surface(&mut self) {
        if self.state.surface.is_some() && self.state.modal.phase() != AnimationPhase::Closing {
            self.state.surface = Some(PickerSurface::new(&self.state.props, &self.config));
        }
    }

    fn apply_modal_events(&mut self, events: Vec<ModalEvent>) -> bool {
        let mut changed = false;
        for event in events {
            match event {
                ModalEvent::Mounted => {
                    tracing::debug!(
                        mode = ?self.state.props.mode,
                        value = %self.state.props.value,
                        "picker mounted"
                    );
                    self.state.surface = Some(PickerSurface::new(&self.state.props, &self.config));
                    changed = true;
                }
                ModalEvent::Opened => {}
                ModalEvent::Unmounted => {
                    if let Some(surface) = self.state.surface.take() {
                        tracing::debug!(pending = ?surface.pending(), "picker unmounted");
                    }
                    changed = true;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
