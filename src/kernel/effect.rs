use chrono::NaiveDateTime;

/// Callbacks owed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Confirm(NaiveDateTime),
    Cancel,
}
