//! Headless scroll engine backing each wheel column.
//!
//! Mirrors a native snap-to-interval scroll view closely enough for the wheel logic: a user
//! drag moves the offset directly (with one item of rubber-band overscroll), releasing starts a
//! short momentum phase that lands on an item boundary, and only that momentum reports a
//! settled offset. Programmatic scrolls never settle.

use std::time::{Duration, Instant};

use super::animation::AnimatedValue;
use super::wheel::ScrollPort;

/// Carry distance per px of the last drag delta.
const MOMENTUM_CARRY: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Idle,
    Dragging { velocity: f32 },
    Momentum,
    Programmatic,
}

#[derive(Clone, Debug)]
pub struct ScrollSurface {
    item_height: f32,
    item_count: usize,
    offset: AnimatedValue,
    motion: Motion,
    settled: Option<f32>,
    scroll_duration: Duration,
    momentum_duration: Duration,
}

impl ScrollSurface {
    pub fn new(item_height: f32, scroll_duration: Duration, momentum_duration: Duration) -> Self {
        Self {
            item_height,
            item_count: 0,
            offset: AnimatedValue::new(0.0),
            motion: Motion::Idle,
            settled: None,
            scroll_duration,
            momentum_duration,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging { .. })
    }

    pub fn is_moving(&self) -> bool {
        self.motion != Motion::Idle
    }

    fn max_offset(&self) -> f32 {
        self.item_count.saturating_sub(1) as f32 * self.item_height
    }

    /// Moves the content by `delta` px under the user's finger.
    pub fn drag_by(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        let min = -self.item_height;
        let max = self.max_offset() + self.item_height;
        let next = (self.offset.value() + delta).clamp(min, max);
        self.offset.set(next);
        self.settled = None;
        self.motion = Motion::Dragging { velocity: delta };
    }

    /// Lifts the finger: momentum carries on and snaps to the nearest item boundary.
    pub fn release(&mut self) {
        let Motion::Dragging { velocity } = self.motion else {
            return;
        };
        let projected = self.offset.value() + velocity * MOMENTUM_CARRY;
        let snapped = if self.item_height > 0.0 {
            (projected / self.item_height).round() * self.item_height
        } else {
            0.0
        };
        let target = snapped.clamp(0.0, self.max_offset());
        self.offset.animate_to(target, self.momentum_duration);
        self.motion = Motion::Momentum;
    }

    /// Advances running motion. Returns `true` while anything moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.motion {
            Motion::Idle | Motion::Dragging { .. } => false,
            Motion::Momentum => {
                if self.offset.tick(now) {
                    self.settled = Some(self.offset.value());
                    self.motion = Motion::Idle;
                }
                true
            }
            Motion::Programmatic => {
                if self.offset.tick(now) {
                    self.motion = Motion::Idle;
                }
                true
            }
        }
    }
}

impl ScrollPort for ScrollSurface {
    fn scroll_to_index(&mut self, index: usize, animated: bool) {
        let target = index as f32 * self.item_height;
        self.settled = None;
        if animated {
            self.offset.animate_to(target, self.scroll_duration);
            self.motion = Motion::Programmatic;
        } else {
            self.offset.set(target);
            self.motion = Motion::Idle;
        }
    }

    fn take_settled(&mut self) -> Option<f32> {
        self.settled.take()
    }

    fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/scroll.rs"]
mod tests;
