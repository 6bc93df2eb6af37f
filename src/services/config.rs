//! Picker configuration: wheel geometry, minute granularity, animation timings and labels.

use std::time::Duration;

pub const DEFAULT_MINUTE_STEP: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalTimings {
    pub fade_in: Duration,
    pub slide_up: Duration,
    pub fade_out: Duration,
    pub slide_down: Duration,
    /// Sheet offset (px) before the slide-up starts.
    pub initial_translate_y: f32,
    /// Sheet offset (px) the slide-down ends at.
    pub final_translate_y: f32,
}

impl Default for ModalTimings {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(250),
            slide_up: Duration::from_millis(300),
            fade_out: Duration::from_millis(200),
            slide_down: Duration::from_millis(250),
            initial_translate_y: 300.0,
            final_translate_y: 400.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerLabels {
    pub cancel: String,
    pub confirm: String,
    pub date_title: String,
    pub time_title: String,
    pub year_suffix: String,
    pub month_suffix: String,
    pub day_suffix: String,
    pub separator: String,
}

impl Default for PickerLabels {
    fn default() -> Self {
        Self {
            cancel: "Cancel".to_string(),
            confirm: "Done".to_string(),
            date_title: "Select date".to_string(),
            time_title: "Select time".to_string(),
            year_suffix: String::new(),
            month_suffix: String::new(),
            day_suffix: String::new(),
            separator: ":".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    pub minute_step: u32,
    /// Height of one wheel item in px; scroll offsets are measured in the same unit.
    pub item_height: f32,
    /// Rows shown per wheel column. The middle row is the selection band.
    pub visible_rows: u16,
    /// Duration of an animated programmatic scroll (item tap, keyboard step).
    pub scroll_duration: Duration,
    /// Duration of the momentum phase after a gesture is released.
    pub momentum_duration: Duration,
    /// Idle time after the last mouse-wheel notch before the gesture counts as released.
    pub release_idle: Duration,
    pub timings: ModalTimings,
    pub labels: PickerLabels,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            minute_step: DEFAULT_MINUTE_STEP,
            item_height: 50.0,
            visible_rows: 5,
            scroll_duration: Duration::from_millis(200),
            momentum_duration: Duration::from_millis(180),
            release_idle: Duration::from_millis(120),
            timings: ModalTimings::default(),
            labels: PickerLabels::default(),
        }
    }
}

impl PickerConfig {
    pub fn set_minute_step(&mut self, step: u32) -> bool {
        if !is_valid_minute_step(step) {
            return false;
        }
        self.minute_step = step;
        true
    }

    pub fn set_item_height(&mut self, height: f32) -> bool {
        if !height.is_finite() || height <= 0.0 {
            return false;
        }
        self.item_height = height;
        true
    }

    /// Even row counts are bumped to the next odd count so the band sits in the middle.
    pub fn set_visible_rows(&mut self, rows: u16) -> bool {
        if rows == 0 {
            return false;
        }
        self.visible_rows = rows | 1;
        true
    }
}

/// A step is valid when it tiles the hour exactly.
pub fn is_valid_minute_step(step: u32) -> bool {
    (1..=30).contains(&step) && 60 % step == 0
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
