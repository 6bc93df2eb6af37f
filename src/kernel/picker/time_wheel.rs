//! Hour / minute wheels composed into one time of day.

use chrono::{NaiveTime, Timelike};

use super::calendar::{hour_items, minute_items, normalize_step, snap_minute};
use super::wheel::ValueWheel;
use crate::services::config::PickerConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTime {
    pub hour: u32,
    pub minute: u32,
}

impl PendingTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Hour clamped to 0-23, minute floored onto the step grid.
    pub fn snapped(self, step: u32) -> Self {
        Self {
            hour: self.hour.min(23),
            minute: snap_minute(self.minute, step),
        }
    }
}

impl From<NaiveTime> for PendingTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
}

impl TimeField {
    pub const ALL: [TimeField; 2] = [TimeField::Hour, TimeField::Minute];

    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }
}

#[derive(Clone, Debug)]
pub struct TimeWheel {
    hours: ValueWheel,
    minutes: ValueWheel,
    value: PendingTime,
    step: u32,
}

impl TimeWheel {
    pub fn new(value: PendingTime, config: &PickerConfig) -> Self {
        let step = normalize_step(config.minute_step);
        let value = value.snapped(step);
        Self {
            hours: ValueWheel::new(hour_items(), value.hour as i32, config),
            minutes: ValueWheel::new(minute_items(step), value.minute as i32, config),
            value,
            step,
        }
    }

    pub fn value(&self) -> PendingTime {
        self.value
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn wheel(&self, field: TimeField) -> &ValueWheel {
        match field {
            TimeField::Hour => &self.hours,
            TimeField::Minute => &self.minutes,
        }
    }

    pub fn wheel_mut(&mut self, field: TimeField) -> &mut ValueWheel {
        match field {
            TimeField::Hour => &mut self.hours,
            TimeField::Minute => &mut self.minutes,
        }
    }

    pub fn select(&mut self, field: TimeField, value: i32) -> PendingTime {
        let value = value.max(0) as u32;
        let mut next = self.value;
        match field {
            TimeField::Hour => next.hour = value,
            TimeField::Minute => next.minute = value,
        }
        self.apply(next)
    }

    pub fn set_value(&mut self, value: PendingTime) -> PendingTime {
        self.apply(value)
    }

    pub fn settle(&mut self) -> Option<PendingTime> {
        let mut changed = None;
        for field in TimeField::ALL {
            if let Some(value) = self.wheel_mut(field).poll_settle() {
                changed = Some(self.select(field, value));
            }
        }
        changed
    }

    fn apply(&mut self, next: PendingTime) -> PendingTime {
        let next = next.snapped(self.step);
        self.value = next;
        self.hours.reconcile(next.hour as i32);
        self.minutes.reconcile(next.minute as i32);
        next
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/time_wheel.rs"]
mod tests;
