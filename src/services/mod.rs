//! Configuration and the settings file backing it.

pub mod config;
pub mod settings;

pub use config::{ModalTimings, PickerConfig, PickerLabels};
pub use settings::Settings;
