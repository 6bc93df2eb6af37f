//! Demo application around the picker.

pub mod cli;
mod host;

pub use cli::{CliArgs, USAGE};
pub use host::DemoHost;
