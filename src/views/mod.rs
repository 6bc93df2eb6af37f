//! Views: pure painting and hit-testing over kernel state.

pub mod picker;

pub use picker::{hit_test_picker, PickerHit, PickerLayout, PickerView};
