//! Show/hide lifecycle of the picker sheet.
//!
//! The sheet stays mounted until both the slide-down and the backdrop fade have run their full
//! durations.

use std::time::Instant;

use super::animation::AnimatedValue;
use crate::services::config::ModalTimings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Mounted,
    Opened,
    Unmounted,
}

#[derive(Clone, Debug)]
pub struct ModalLifecycle {
    phase: AnimationPhase,
    opacity: AnimatedValue,
    translate_y: AnimatedValue,
    reopen_pending: bool,
    timings: ModalTimings,
}

impl ModalLifecycle {
    pub fn new(timings: ModalTimings) -> Self {
        Self {
            phase: AnimationPhase::Closed,
            opacity: AnimatedValue::new(0.0),
            translate_y: AnimatedValue::new(timings.initial_translate_y),
            reopen_pending: false,
            timings,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != AnimationPhase::Closed
    }

    /// Accepts wheel and button input.
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, AnimationPhase::Opening | AnimationPhase::Open)
    }

    pub fn reopen_pending(&self) -> bool {
        self.reopen_pending
    }

    /// Backdrop opacity in `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Sheet offset below its resting position, in px.
    pub fn translate_y(&self) -> f32 {
        self.translate_y.value()
    }

    pub fn timings(&self) -> &ModalTimings {
        &self.timings
    }

    pub fn set_visible(&mut self, visible: bool) -> Vec<ModalEvent> {
        match (self.phase, visible) {
            (AnimationPhase::Closed, true) => {
                self.start_opening();
                vec![ModalEvent::Mounted]
            }
            (AnimationPhase::Closing, true) => {
                self.reopen_pending = true;
                Vec::new()
            }
            (AnimationPhase::Closing, false) => {
                self.reopen_pending = false;
                Vec::new()
            }
            (AnimationPhase::Opening | AnimationPhase::Open, false) => {
                self.start_closing();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn tick(&mut self, now: Instant) -> Vec<ModalEvent> {
        self.opacity.tick(now);
        self.translate_y.tick(now);

        match self.phase {
            AnimationPhase::Opening
                if !self.opacity.is_animating() && !self.translate_y.is_animating() =>
            {
                self.phase = AnimationPhase::Open;
                tracing::debug!("picker open");
                vec![ModalEvent::Opened]
            }
            AnimationPhase::Closing if !self.is_animating() => {
                self.phase = AnimationPhase::Closed;
                tracing::debug!(reopen = self.reopen_pending, "picker closed");
                let mut events = vec![ModalEvent::Unmounted];
                if std::mem::take(&mut self.reopen_pending) {
                    self.start_opening();
                    events.push(ModalEvent::Mounted);
                }
                events
            }
            _ => Vec::new(),
        }
    }

    /// Whether a tick could change anything.
    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating() || self.translate_y.is_animating()
    }

    fn start_opening(&mut self) {
        self.phase = AnimationPhase::Opening;
        self.opacity.set(0.0);
        self.translate_y.set(self.timings.initial_translate_y);
        self.opacity.animate_to(1.0, self.timings.fade_in);
        self.translate_y.animate_to(0.0, self.timings.slide_up);
    }

    fn start_closing(&mut self) {
        self.phase = AnimationPhase::Closing;
        self.reopen_pending = false;
        self.opacity.animate_to(0.0, self.timings.fade_out);
        self.translate_y
            .animate_to(self.timings.final_translate_y, self.timings.slide_down);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/modal.rs"]
mod tests;
