//! Year / month / day wheels composed into one date.

use chrono::{Datelike, NaiveDate};

use super::calendar::{day_items, days_in_month, month_items, year_bounds, year_items};
use super::wheel::ValueWheel;
use crate::services::config::{PickerConfig, PickerLabels};

/// Date under edit. `month` is 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PendingDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }
}

impl From<NaiveDate> for PendingDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    pub const ALL: [DateField; 3] = [DateField::Year, DateField::Month, DateField::Day];

    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }
}

#[derive(Clone, Debug)]
pub struct DateWheel {
    years: ValueWheel,
    months: ValueWheel,
    days: ValueWheel,
    value: PendingDate,
    year_range: (i32, i32),
    labels: PickerLabels,
}

impl DateWheel {
    pub fn new(value: PendingDate, min: NaiveDate, max: NaiveDate, config: &PickerConfig) -> Self {
        let labels = config.labels.clone();
        let year_range = year_bounds(min, max);
        let value = clamp_date(value, year_range);
        Self {
            years: ValueWheel::new(year_items(min, max, &labels), value.year, config),
            months: ValueWheel::new(month_items(&labels), value.month as i32, config),
            days: ValueWheel::new(
                day_items(value.year, value.month, &labels),
                value.day as i32,
                config,
            ),
            value,
            year_range,
            labels,
        }
    }

    pub fn value(&self) -> PendingDate {
        self.value
    }

    pub fn wheel(&self, field: DateField) -> &ValueWheel {
        match field {
            DateField::Year => &self.years,
            DateField::Month => &self.months,
            DateField::Day => &self.days,
        }
    }

    pub fn wheel_mut(&mut self, field: DateField) -> &mut ValueWheel {
        match field {
            DateField::Year => &mut self.years,
            DateField::Month => &mut self.months,
            DateField::Day => &mut self.days,
        }
    }

    /// One wheel picked `value`: recompose, refresh the day list, clamp the day.
    pub fn select(&mut self, field: DateField, value: i32) -> PendingDate {
        let mut next = self.value;
        match field {
            DateField::Year => next.year = value,
            DateField::Month => next.month = value.clamp(0, 11) as u32,
            DateField::Day => next.day = value.max(1) as u32,
        }
        self.apply(next)
    }

    /// External value changed: reconcile every wheel against it.
    pub fn set_value(&mut self, value: PendingDate) -> PendingDate {
        self.apply(value)
    }

    /// Feeds settled gestures back in as selections.
    pub fn settle(&mut self) -> Option<PendingDate> {
        let mut changed = None;
        for field in DateField::ALL {
            if let Some(value) = self.wheel_mut(field).poll_settle() {
                changed = Some(self.select(field, value));
            }
        }
        changed
    }

    fn apply(&mut self, requested: PendingDate) -> PendingDate {
        let next = clamp_date(requested, self.year_range);
        if next.day < requested.day {
            tracing::debug!(requested = requested.day, clamped = next.day, "day clamped");
        }
        let day_count = days_in_month(next.year, next.month) as usize;
        if self.days.items().len() != day_count {
            self.days
                .set_items(day_items(next.year, next.month, &self.labels));
        }
        self.value = next;
        self.years.reconcile(next.year);
        self.months.reconcile(next.month as i32);
        self.days.reconcile(next.day as i32);
        next
    }
}

fn clamp_date(value: PendingDate, (first_year, last_year): (i32, i32)) -> PendingDate {
    let year = value.year.clamp(first_year, last_year);
    let month = value.month.min(11);
    let day = value.day.clamp(1, days_in_month(year, month));
    PendingDate { year, month, day }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/date_wheel.rs"]
mod tests;
