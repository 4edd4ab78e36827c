//! The `chess`-crate-backed rules oracle.
//!
//! Move legality, check detection, and outcome determination all live in the
//! external library; this wrapper only translates between its types and the
//! crate's own [`Position`]/[`Outcome`] vocabulary.

use std::fmt;
use std::str::FromStr;

use chess::{ChessMove, Game, GameResult};
use log::debug;

use super::position::{ColoredPiece, PieceKind, Position, Side};

/// Terminal game result classification.
///
/// Transitions once, monotonically, from `Ongoing` to a terminal value and is
/// never reversed; once terminal, [`Oracle::apply`] rejects further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Conventional score string (`*` while ongoing).
    pub fn score(&self) -> &'static str {
        match self {
            Outcome::Ongoing => "*",
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::WhiteWins => write!(f, "White wins"),
            Outcome::BlackWins => write!(f, "Black wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// The single recoverable error kind: an invalid move string.
///
/// Everything else in the program (terminal setup, config parse) is fatal;
/// this one is surfaced in the status line and the user resubmits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveError {
    move_text: String,
    reason: String,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move '{}': {}", self.move_text, self.reason)
    }
}

impl std::error::Error for MoveError {}

/// Wrapper around [`chess::Game`]: apply moves, report the outcome, and hand
/// out [`Position`] snapshots for rendering.
pub struct Oracle {
    game: Game,
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new()
    }
}

impl Oracle {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Parse and apply a move.
    ///
    /// Accepts whatever the rules library parses: SAN first (`e4`, `Nf3`,
    /// `O-O`), then coordinate notation (`e2e4`, `e7e8q`). On failure the
    /// position is unchanged and the library's diagnostic is preserved in the
    /// returned error.
    pub fn apply(&mut self, move_text: &str) -> Result<(), MoveError> {
        let board = self.game.current_position();

        let mv = match ChessMove::from_san(&board, move_text) {
            Ok(mv) => mv,
            Err(san_err) => match ChessMove::from_str(move_text) {
                Ok(mv) => mv,
                Err(_) => {
                    return Err(MoveError {
                        move_text: move_text.to_string(),
                        reason: san_err.to_string(),
                    });
                }
            },
        };

        // Coordinate parsing only checks syntax; legality is the library's call.
        if !self.game.make_move(mv) {
            return Err(MoveError {
                move_text: move_text.to_string(),
                reason: "not a legal move in this position".to_string(),
            });
        }

        // Auto-claim draws (threefold repetition, 50-move rule) the way the
        // original front-ends did via the library's outcome reporting.
        if self.game.can_declare_draw() {
            debug!("claimable draw after '{}', declaring", move_text);
            self.game.declare_draw();
        }

        Ok(())
    }

    pub fn side_to_move(&self) -> Side {
        match self.game.side_to_move() {
            chess::Color::White => Side::White,
            chess::Color::Black => Side::Black,
        }
    }

    /// Current outcome as reported by the rules library.
    pub fn outcome(&self) -> Outcome {
        match self.game.result() {
            None => Outcome::Ongoing,
            Some(GameResult::WhiteCheckmates) | Some(GameResult::BlackResigns) => {
                Outcome::WhiteWins
            }
            Some(GameResult::BlackCheckmates) | Some(GameResult::WhiteResigns) => {
                Outcome::BlackWins
            }
            Some(GameResult::Stalemate)
            | Some(GameResult::DrawAccepted)
            | Some(GameResult::DrawDeclared) => Outcome::Draw,
        }
    }

    /// Owned snapshot of the current position for the renderer.
    pub fn snapshot(&self) -> Position {
        let board = self.game.current_position();
        let mut pos = Position::empty(self.side_to_move());

        for rank in 0..8usize {
            for file in 0..8usize {
                let square = chess::Square::make_square(
                    chess::Rank::from_index(rank),
                    chess::File::from_index(file),
                );
                if let (Some(piece), Some(color)) =
                    (board.piece_on(square), board.color_on(square))
                {
                    pos.set(
                        file,
                        rank,
                        Some(ColoredPiece {
                            side: match color {
                                chess::Color::White => Side::White,
                                chess::Color::Black => Side::Black,
                            },
                            kind: match piece {
                                chess::Piece::Pawn => PieceKind::Pawn,
                                chess::Piece::Knight => PieceKind::Knight,
                                chess::Piece::Bishop => PieceKind::Bishop,
                                chess::Piece::Rook => PieceKind::Rook,
                                chess::Piece::Queen => PieceKind::Queen,
                                chess::Piece::King => PieceKind::King,
                            },
                        }),
                    );
                }
            }
        }

        pos
    }
}
