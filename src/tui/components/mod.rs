//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status line (status message / invalid-move error)
//! - `BoardView`: The colored board grid, a pure function of position + theme
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `MoveInput`: Bounded move-entry field
//! - `HistoryPanel`: Scrollable numbered-turn view
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (struct fields), not by
//! reading global state, so dependencies stay explicit and each component is
//! testable on its own. Each file co-locates the component's state types,
//! event types, rendering, event handling, and tests.

pub mod board;
pub mod history_panel;
pub mod move_input;
pub mod title_bar;

pub use board::BoardView;
pub use history_panel::{HistoryPanel, HistoryPanelState};
pub use move_input::{MoveInput, MoveInputEvent};
pub use title_bar::TitleBar;
