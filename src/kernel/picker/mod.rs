//! Multi-wheel date/time picker.
//!
//! - `wheel`/`scroll`: one column and its scroll engine
//! - `date_wheel`/`time_wheel`: composite wheels holding the pending value
//! - `modal`/`animation`: open/close lifecycle

pub mod animation;
pub mod calendar;
pub mod date_wheel;
pub mod modal;
pub mod scroll;
pub mod time_wheel;
pub mod wheel;

use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};

pub use date_wheel::{DateField, DateWheel, PendingDate};
pub use modal::{AnimationPhase, ModalEvent, ModalLifecycle};
pub use time_wheel::{PendingTime, TimeField, TimeWheel};
pub use wheel::{ScrollPort, ScrollState, ValueWheel, WheelItem};

use crate::services::config::{PickerConfig, PickerLabels};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickerMode {
    #[default]
    Date,
    Time,
}

/// What the host hands the picker.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerProps {
    pub mode: PickerMode,
    /// Last confirmed value; the pending value is seeded from it.
    pub value: NaiveDateTime,
    pub minimum_date: NaiveDate,
    pub maximum_date: NaiveDate,
    pub title: Option<String>,
}

impl PickerProps {
    pub fn new(mode: PickerMode, value: NaiveDateTime) -> Self {
        Self {
            mode,
            value,
            minimum_date: calendar::default_minimum_date(),
            maximum_date: calendar::default_maximum_date(),
            title: None,
        }
    }

    pub fn title<'a>(&'a self, labels: &'a PickerLabels) -> &'a str {
        match (&self.title, self.mode) {
            (Some(title), _) => title,
            (None, PickerMode::Date) => &labels.date_title,
            (None, PickerMode::Time) => &labels.time_title,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingSelection {
    Date(PendingDate),
    Time(PendingTime),
}

impl PendingSelection {
    /// Merges the edited fields into `seed`. Date mode keeps the seed's time of day; time mode
    /// keeps the seed's date and drops seconds.
    pub fn apply_to(self, seed: NaiveDateTime) -> NaiveDateTime {
        match self {
            PendingSelection::Date(date) => date
                .to_date()
                .map(|d| d.and_time(seed.time()))
                .unwrap_or(seed),
            PendingSelection::Time(time) => seed
                .date()
                .and_hms_opt(time.hour, time.minute, 0)
                .unwrap_or(seed),
        }
    }
}

#[derive(Clone, Debug)]
pub enum CompositeWheel {
    Date(DateWheel),
    Time(TimeWheel),
}

impl CompositeWheel {
    pub fn new(props: &PickerProps, config: &PickerConfig) -> Self {
        match props.mode {
            PickerMode::Date => CompositeWheel::Date(DateWheel::new(
                PendingDate::from(props.value.date()),
                props.minimum_date,
                props.maximum_date,
                config,
            )),
            PickerMode::Time => {
                CompositeWheel::Time(TimeWheel::new(PendingTime::from(props.value.time()), config))
            }
        }
    }

    pub fn pending(&self) -> PendingSelection {
        match self {
            CompositeWheel::Date(wheel) => PendingSelection::Date(wheel.value()),
            CompositeWheel::Time(wheel) => PendingSelection::Time(wheel.value()),
        }
    }

    pub fn columns(&self) -> usize {
        match self {
            CompositeWheel::Date(_) => DateField::ALL.len(),
            CompositeWheel::Time(_) => TimeField::ALL.len(),
        }
    }

    pub fn wheel(&self, column: usize) -> Option<&ValueWheel> {
        match self {
            CompositeWheel::Date(wheel) => Some(wheel.wheel(DateField::from_column(column)?)),
            CompositeWheel::Time(wheel) => Some(wheel.wheel(TimeField::from_column(column)?)),
        }
    }

    pub fn wheel_mut(&mut self, column: usize) -> Option<&mut ValueWheel> {
        match self {
            CompositeWheel::Date(wheel) => Some(wheel.wheel_mut(DateField::from_column(column)?)),
            CompositeWheel::Time(wheel) => Some(wheel.wheel_mut(TimeField::from_column(column)?)),
        }
    }

    /// Reconciles every column against a new external value.
    pub fn set_value(&mut self, value: NaiveDateTime) {
        match self {
            CompositeWheel::Date(wheel) => {
                wheel.set_value(PendingDate::from(value.date()));
            }
            CompositeWheel::Time(wheel) => {
                wheel.set_value(PendingTime::from(value.time()));
            }
        }
    }

    /// Routes a column's newly selected value through the composite.
    pub fn select(&mut self, column: usize, value: i32) -> bool {
        let before = self.pending();
        match self {
            CompositeWheel::Date(wheel) => {
                let Some(field) = DateField::from_column(column) else {
                    return false;
                };
                wheel.select(field, value);
            }
            CompositeWheel::Time(wheel) => {
                let Some(field) = TimeField::from_column(column) else {
                    return false;
                };
                wheel.select(field, value);
            }
        }
        self.pending() != before
    }

    pub fn drag(&mut self, column: usize, delta: f32) -> bool {
        let Some(wheel) = self.wheel_mut(column) else {
            return false;
        };
        wheel.drag_by(delta);
        true
    }

    pub fn release(&mut self, column: usize) -> bool {
        let Some(wheel) = self.wheel_mut(column) else {
            return false;
        };
        wheel.release();
        true
    }

    pub fn tap(&mut self, column: usize, index: usize) -> bool {
        let Some(value) = self.wheel_mut(column).and_then(|w| w.tap(index)) else {
            return false;
        };
        self.select(column, value);
        true
    }

    pub fn step(&mut self, column: usize, delta: isize) -> bool {
        let Some(value) = self.wheel_mut(column).and_then(|w| w.step(delta)) else {
            return false;
        };
        self.select(column, value);
        true
    }

    /// Advances every column's scroll engine and applies settled gestures.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut moved = false;
        for column in 0..self.columns() {
            if let Some(wheel) = self.wheel_mut(column) {
                moved |= wheel.tick(now);
            }
        }
        let settled = match self {
            CompositeWheel::Date(wheel) => wheel.settle().is_some(),
            CompositeWheel::Time(wheel) => wheel.settle().is_some(),
        };
        moved || settled
    }
}

/// Everything that exists only while the sheet is mounted.
#[derive(Clone, Debug)]
pub struct PickerSurface {
    seed: NaiveDateTime,
    wheels: CompositeWheel,
}

impl PickerSurface {
    pub fn new(props: &PickerProps, config: &PickerConfig) -> Self {
        Self {
            seed: props.value,
            wheels: CompositeWheel::new(props, config),
        }
    }

    pub fn seed(&self) -> NaiveDateTime {
        self.seed
    }

    pub fn pending(&self) -> PendingSelection {
        self.wheels.pending()
    }

    /// The value a confirm press would hand back right now.
    pub fn pending_value(&self) -> NaiveDateTime {
        self.pending().apply_to(self.seed)
    }

    pub fn wheels(&self) -> &CompositeWheel {
        &self.wheels
    }

    pub fn wheels_mut(&mut self) -> &mut CompositeWheel {
        &mut self.wheels
    }

    pub fn reseed(&mut self, value: NaiveDateTime) {
        self.seed = value;
        self.wheels.set_value(value);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/mod.rs"]
mod tests;
