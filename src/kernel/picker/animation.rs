//! Observable animated values.
//!
//! Nothing here reads a clock. A tween is started with [`AnimatedValue::animate_to`] and its
//! clock starts at the first [`AnimatedValue::tick`] afterwards; the tick that reaches the
//! declared duration reports completion.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    started: Option<Instant>,
}

impl Tween {
    fn sample(&mut self, now: Instant) -> (f32, bool) {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from + (self.to - self.from) * ease_in_out_quad(t), false)
    }
}

pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    tween: Option<Tween>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Where the value is heading; the current value when idle.
    pub fn target(&self) -> f32 {
        self.tween.map(|t| t.to).unwrap_or(self.value)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jumps to `value`, dropping any running tween.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    /// Starts a tween from the current value, replacing any running one.
    pub fn animate_to(&mut self, to: f32, duration: Duration) {
        self.tween = Some(Tween {
            from: self.value,
            to,
            duration,
            started: None,
        });
    }

    /// Advances the running tween. Returns `true` on the tick that completes it.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let (value, done) = tween.sample(now);
        self.value = value;
        if done {
            self.tween = None;
        }
        done
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/animation.rs"]
mod tests;
