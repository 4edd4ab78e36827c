//! # Rules Oracle
//!
//! The boundary to the external chess-rules library.
//!
//! Gambit implements no move generation, no check detection, and no outcome
//! logic of its own — all of that is delegated to the [`chess`] crate, wrapped
//! here behind a small surface:
//!
//! - [`Oracle`]: apply a move string, report the game outcome.
//! - [`Position`]: an owned board snapshot the renderer reads. The rest of the
//!   crate never touches the rules library's own board type.
//!
//! ## Modules
//!
//! - [`position`]: snapshot types (`Position`, `ColoredPiece`, `Side`, `PieceKind`)
//! - [`rules`]: the `chess`-crate-backed `Oracle` and its error type

pub mod position;
pub mod rules;

pub use position::{ColoredPiece, PieceKind, Position, Side};
pub use rules::{MoveError, Oracle, Outcome};
