//! # Application State
//!
//! Core game state for Gambit. This module contains domain logic only —
//! no TUI-specific types. Presentation state (input buffer, scroll offsets)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── oracle: Oracle            // rules library wrapper (owns the position)
//! ├── history: MoveHistory      // accepted moves, in order
//! ├── status_message: String    // status line text
//! └── error: Option<String>     // last invalid-move message
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::history::MoveHistory;
use crate::oracle::Oracle;

pub struct App {
    pub oracle: Oracle,
    pub history: MoveHistory,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            oracle: Oracle::new(),
            history: MoveHistory::new(),
            status_message: String::from("Welcome to Gambit! Enter a move to begin."),
            error: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
