//! Headless picker core (state/action/effect).

pub mod action;
pub mod effect;
pub mod picker;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use picker::{AnimationPhase, PickerMode, PickerProps, PickerSurface};
pub use state::PickerState;
pub use store::{DispatchResult, Store};
