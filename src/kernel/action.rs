use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};

use super::picker::PickerMode;

#[derive(Debug, Clone)]
pub enum Action {
    SetVisible(bool),
    SetMode(PickerMode),
    SetValue(NaiveDateTime),
    SetBounds {
        min: NaiveDate,
        max: NaiveDate,
    },
    SetTitle(Option<String>),
    WheelDrag {
        column: usize,
        delta: f32,
    },
    WheelRelease {
        column: usize,
    },
    WheelTap {
        column: usize,
        index: usize,
    },
    WheelStep {
        column: usize,
        delta: isize,
    },
    Confirm,
    Cancel,
    BackdropPress,
    Tick {
        now: Instant,
    },
}
