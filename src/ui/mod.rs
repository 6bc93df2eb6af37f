//! UI layer: backend-neutral painting over `ratatui`.
//!
//! Views paint into a [`core::painter::Painter`]; a backend turns the commands into cells.

pub mod backend;
pub mod core;
