//! A single wheel column: scroll-vs-selection reconciliation.
//!
//! The wheel never asks its scroll surface where it is. It pushes positions through
//! [`ScrollPort::scroll_to_index`] and learns about finished user gestures through
//! [`ScrollPort::take_settled`]. While a user-driven gesture is in flight, external value
//! changes are recorded but do not move the surface; that guard is what keeps a programmatic
//! snap from fighting the finger.

use crate::services::config::PickerConfig;

use super::scroll::ScrollSurface;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelItem {
    pub label: String,
    pub value: i32,
}

impl WheelItem {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub trait ScrollPort {
    fn scroll_to_index(&mut self, index: usize, animated: bool);

    /// Resting offset of a user gesture whose momentum just ended, reported once.
    fn take_settled(&mut self) -> Option<f32>;

    fn set_item_count(&mut self, _count: usize) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_user_driven: bool,
}

#[derive(Clone, Debug)]
pub struct ValueWheel<P = ScrollSurface> {
    items: Vec<WheelItem>,
    selected: i32,
    item_height: f32,
    scroll: ScrollState,
    port: P,
}

impl<P: ScrollPort> ValueWheel<P> {
    pub fn with_port(items: Vec<WheelItem>, selected: i32, item_height: f32, mut port: P) -> Self {
        port.set_item_count(items.len());
        let mut wheel = Self {
            items,
            selected,
            item_height,
            scroll: ScrollState::default(),
            port,
        };
        wheel.reconcile(selected);
        wheel
    }

    pub fn items(&self) -> &[WheelItem] {
        &self.items
    }

    pub fn selected_value(&self) -> i32 {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.value == self.selected)
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Records `selected` and snaps the surface to it unless the user is scrolling.
    ///
    /// Returns whether a programmatic scroll was issued.
    pub fn reconcile(&mut self, selected: i32) -> bool {
        self.selected = selected;
        if self.scroll.is_user_driven {
            return false;
        }
        let Some(index) = self.selected_index() else {
            return false;
        };
        self.port.scroll_to_index(index, false);
        true
    }

    /// Replaces the domain, keeping the recorded value.
    pub fn set_items(&mut self, items: Vec<WheelItem>) {
        self.port.set_item_count(items.len());
        self.items = items;
        self.reconcile(self.selected);
    }

    pub fn begin_drag(&mut self) {
        self.scroll.is_user_driven = true;
    }

    /// Momentum ended at `offset`: the nearest in-range item becomes the selection.
    pub fn on_settle(&mut self, offset: f32) -> Option<i32> {
        self.scroll.is_user_driven = false;
        let index = settle_index(offset, self.item_height, self.items.len())?;
        let value = self.items.get(index)?.value;
        tracing::debug!(offset, index, value, "wheel settled");
        Some(value)
    }

    pub fn poll_settle(&mut self) -> Option<i32> {
        let offset = self.port.take_settled()?;
        self.on_settle(offset)
    }

    /// Direct tap on an item: selects it and glides the surface there.
    pub fn tap(&mut self, index: usize) -> Option<i32> {
        let value = self.items.get(index)?.value;
        self.scroll.is_user_driven = false;
        self.port.scroll_to_index(index, true);
        Some(value)
    }

    /// Keyboard step relative to the current selection; behaves like a tap on the target.
    pub fn step(&mut self, delta: isize) -> Option<i32> {
        if self.items.is_empty() {
            return None;
        }
        let current = self.selected_index().unwrap_or(0);
        let last = self.items.len() - 1;
        let target = current.saturating_add_signed(delta).min(last);
        if target == current && self.selected_index().is_some() {
            return None;
        }
        self.tap(target)
    }
}

impl ValueWheel<ScrollSurface> {
    pub fn new(items: Vec<WheelItem>, selected: i32, config: &PickerConfig) -> Self {
        let port = ScrollSurface::new(
            config.item_height,
            config.scroll_duration,
            config.momentum_duration,
        );
        Self::with_port(items, selected, config.item_height, port)
    }

    pub fn offset(&self) -> f32 {
        self.port.offset()
    }

    pub fn drag_by(&mut self, delta: f32) {
        self.begin_drag();
        self.port.drag_by(delta);
    }

    pub fn release(&mut self) {
        self.port.release();
    }

    pub fn tick(&mut self, now: std::time::Instant) -> bool {
        self.port.tick(now)
    }

    /// Item under the selection band right now.
    pub fn centered_index(&self) -> Option<usize> {
        settle_index(self.offset(), self.item_height, self.items.len())
    }

    /// The selected item, or the item under the band while the user is scrolling.
    pub fn highlighted_index(&self) -> Option<usize> {
        if self.scroll.is_user_driven {
            self.centered_index()
        } else {
            self.selected_index()
        }
    }
}

/// Nearest item index for a scroll offset, clamped to the list.
pub fn settle_index(offset: f32, item_height: f32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if !offset.is_finite() || item_height <= 0.0 {
        return Some(0);
    }
    let raw = (offset / item_height).round();
    Some(raw.clamp(0.0, (len - 1) as f32) as usize)
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/wheel.rs"]
mod tests;
