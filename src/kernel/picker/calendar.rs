//! Calendar arithmetic and wheel domains.

use chrono::{Datelike, NaiveDate};

use super::wheel::WheelItem;
use crate::services::config::{is_valid_minute_step, PickerLabels, DEFAULT_MINUTE_STEP};

pub fn default_minimum_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn default_maximum_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Number of days in `month` (0-based) of `year`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month = month.min(11);
    let (next_year, next_month) = if month == 11 {
        (year + 1, 1)
    } else {
        (year, month + 2)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Floors `minute` onto the step grid. Invalid steps fall back to the default step.
pub fn snap_minute(minute: u32, step: u32) -> u32 {
    let step = normalize_step(step);
    (minute.min(59) / step) * step
}

pub fn normalize_step(step: u32) -> u32 {
    if is_valid_minute_step(step) {
        step
    } else {
        DEFAULT_MINUTE_STEP
    }
}

pub fn year_items(min: NaiveDate, max: NaiveDate, labels: &PickerLabels) -> Vec<WheelItem> {
    let (first, last) = year_bounds(min, max);
    (first..=last)
        .map(|year| WheelItem::new(format!("{year}{}", labels.year_suffix), year))
        .collect()
}

/// Inclusive year range, tolerant of swapped bounds.
pub fn year_bounds(min: NaiveDate, max: NaiveDate) -> (i32, i32) {
    let (a, b) = (min.year(), max.year());
    (a.min(b), a.max(b))
}

pub fn month_items(labels: &PickerLabels) -> Vec<WheelItem> {
    (0..12)
        .map(|month| WheelItem::new(format!("{}{}", month + 1, labels.month_suffix), month))
        .collect()
}

pub fn day_items(year: i32, month: u32, labels: &PickerLabels) -> Vec<WheelItem> {
    (1..=days_in_month(year, month) as i32)
        .map(|day| WheelItem::new(format!("{day}{}", labels.day_suffix), day))
        .collect()
}

pub fn hour_items() -> Vec<WheelItem> {
    (0..24)
        .map(|hour| WheelItem::new(format!("{hour:02}"), hour))
        .collect()
}

pub fn minute_items(step: u32) -> Vec<WheelItem> {
    let step = normalize_step(step) as usize;
    (0..60)
        .step_by(step)
        .map(|minute| WheelItem::new(format!("{minute:02}"), minute))
        .collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/picker/calendar.rs"]
mod tests;
