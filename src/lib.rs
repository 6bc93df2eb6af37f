//! wheelpick - multi-wheel date/time picker
//!
//! Modules:
//! - kernel: headless picker (wheels, modal lifecycle, store)
//! - services: configuration and the settings file
//! - ui: paint commands and backends
//! - views: picker painting and hit-testing
//! - app: demo host screen
//! - tui: terminal loop (crossterm + ratatui)

pub mod app;
pub mod core;
pub mod kernel;
pub mod services;
pub mod ui;
pub mod views;

#[cfg(feature = "tui")]
pub mod tui;
