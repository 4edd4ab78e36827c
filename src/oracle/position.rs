//! Board snapshot types.
//!
//! The position is owned exclusively by the [`Oracle`](super::Oracle); the
//! renderer only ever reads a [`Position`] snapshot. Keeping these types free
//! of the rules library means the board renderer can be tested against
//! arbitrary hand-built positions.

use std::fmt;

/// The side a piece belongs to, and whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Piece kind, without ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece together with its owning side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredPiece {
    pub side: Side,
    pub kind: PieceKind,
}

/// An 8×8 arrangement of squares, each empty or holding a [`ColoredPiece`],
/// plus the side to move.
///
/// Files and ranks are zero-indexed: file 0 is the a-file, rank 0 is rank 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<ColoredPiece>; 8]; 8],
    pub side_to_move: Side,
}

impl Position {
    /// An empty board.
    pub fn empty(side_to_move: Side) -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move,
        }
    }

    /// Piece at (file, rank), zero-indexed. Out-of-range coordinates are empty.
    pub fn piece_at(&self, file: usize, rank: usize) -> Option<ColoredPiece> {
        if file < 8 && rank < 8 {
            self.squares[rank][file]
        } else {
            None
        }
    }

    /// Place (or clear) a piece at (file, rank). Used when building snapshots
    /// and hand-built test positions.
    pub fn set(&mut self, file: usize, rank: usize, piece: Option<ColoredPiece>) {
        if file < 8 && rank < 8 {
            self.squares[rank][file] = piece;
        }
    }
}
