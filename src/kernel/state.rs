use super::picker::{ModalLifecycle, PickerProps, PickerSurface};
use crate::services::config::ModalTimings;

#[derive(Debug, Clone)]
pub struct PickerState {
    pub props: PickerProps,
    /// Host-facing visibility flag; cleared when the picker closes itself.
    pub visible: bool,
    pub modal: ModalLifecycle,
    /// Mounted sheet. `None` exactly when the modal is closed.
    pub surface: Option<PickerSurface>,
}

impl PickerState {
    pub fn new(props: PickerProps, timings: ModalTimings) -> Self {
        Self {
            props,
            visible: false,
            modal: ModalLifecycle::new(timings),
            surface: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }
}
