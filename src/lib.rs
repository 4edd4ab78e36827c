//! Gambit library exports for testing

pub mod core;
pub mod oracle;
pub mod tui;
