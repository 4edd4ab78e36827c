//! # Core Application Logic
//!
//! This module contains Gambit's game-facing logic. It knows nothing about
//! any specific UI technology — the ratatui adapter lives in `tui` and the
//! rules library lives behind the `oracle` wrapper.
//!
//! ```text
//!                ┌───────────────────────────┐
//!                │          CORE             │
//!                │                           │
//!                │  • App (game state)       │
//!                │  • Action (events)        │
//!                │  • update() (reducer)     │
//!                │  • MoveHistory            │
//!                │  • Config                 │
//!                └────────────┬──────────────┘
//!                             │
//!                ┌────────────┴──────────────┐
//!                ▼                           ▼
//!         ┌─────────────┐            ┌─────────────┐
//!         │ TUI Adapter │            │   Oracle    │
//!         │  (ratatui)  │            │ (chess lib) │
//!         └─────────────┘            └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all game state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`history`]: Ordered record of accepted moves and turn formatting
//! - [`config`]: Theme/layout configuration with override hierarchy

pub mod action;
pub mod config;
pub mod history;
pub mod state;
