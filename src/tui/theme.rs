//! # Themes
//!
//! The pluggable style policy for the board renderer.
//!
//! The original repository shipped one near-identical program per color
//! scheme; here the schemes are data. A [`Theme`] is resolved once from
//! config/CLI and passed explicitly to whatever renders — components never
//! read style globals.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::oracle::{ColoredPiece, PieceKind, Side};

/// Named color schemes selectable via config file or `--theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Wood-toned squares, the look of the original default variant.
    #[default]
    Classic,
    /// Blue squares with high-contrast pieces.
    Ocean,
    /// Grayscale, for terminals without much color support.
    Mono,
}

/// Piece glyph alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    /// Chess figurines: ♞ ♕ …
    #[default]
    Unicode,
    /// Letters: N for white, n for black.
    Ascii,
}

/// Resolved style policy handed to the renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    /// Style for the rank/file label gutters.
    pub label: Style,
    pub glyphs: GlyphSet,
}

impl Theme {
    pub fn named(name: ThemeName, glyphs: GlyphSet) -> Self {
        match name {
            ThemeName::Classic => Self {
                light_square: Color::Rgb(160, 145, 121),
                dark_square: Color::Rgb(121, 91, 66),
                white_piece: Color::Rgb(250, 250, 250),
                black_piece: Color::Rgb(20, 20, 20),
                label: Style::default().fg(Color::DarkGray),
                glyphs,
            },
            ThemeName::Ocean => Self {
                light_square: Color::Rgb(110, 153, 192),
                dark_square: Color::Rgb(52, 86, 120),
                white_piece: Color::Rgb(245, 245, 245),
                black_piece: Color::Rgb(15, 15, 25),
                label: Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
                glyphs,
            },
            ThemeName::Mono => Self {
                light_square: Color::Gray,
                dark_square: Color::DarkGray,
                white_piece: Color::White,
                black_piece: Color::Black,
                label: Style::default().fg(Color::Gray),
                glyphs,
            },
        }
    }

    /// Foreground color for a piece's owning side.
    pub fn piece_color(&self, side: Side) -> Color {
        match side {
            Side::White => self.white_piece,
            Side::Black => self.black_piece,
        }
    }

    /// Background color for the square at (file, rank), by parity.
    /// a1 — file 0, rank 0 — is a dark square.
    pub fn square_color(&self, file: usize, rank: usize) -> Color {
        if (file + rank) % 2 == 0 {
            self.dark_square
        } else {
            self.light_square
        }
    }

    pub fn glyph(&self, piece: ColoredPiece) -> char {
        match self.glyphs {
            GlyphSet::Unicode => match (piece.side, piece.kind) {
                (Side::White, PieceKind::Pawn) => '♙',
                (Side::White, PieceKind::Knight) => '♘',
                (Side::White, PieceKind::Bishop) => '♗',
                (Side::White, PieceKind::Rook) => '♖',
                (Side::White, PieceKind::Queen) => '♕',
                (Side::White, PieceKind::King) => '♔',
                (Side::Black, PieceKind::Pawn) => '♟',
                (Side::Black, PieceKind::Knight) => '♞',
                (Side::Black, PieceKind::Bishop) => '♝',
                (Side::Black, PieceKind::Rook) => '♜',
                (Side::Black, PieceKind::Queen) => '♛',
                (Side::Black, PieceKind::King) => '♚',
            },
            GlyphSet::Ascii => {
                let letter = match piece.kind {
                    PieceKind::Pawn => 'P',
                    PieceKind::Knight => 'N',
                    PieceKind::Bishop => 'B',
                    PieceKind::Rook => 'R',
                    PieceKind::Queen => 'Q',
                    PieceKind::King => 'K',
                };
                match piece.side {
                    Side::White => letter,
                    Side::Black => letter.to_ascii_lowercase(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a1_is_dark_h1_is_light() {
        let theme = Theme::named(ThemeName::Classic, GlyphSet::Unicode);
        assert_eq!(theme.square_color(0, 0), theme.dark_square);
        assert_eq!(theme.square_color(7, 0), theme.light_square);
        // Neighbors always alternate
        assert_ne!(theme.square_color(3, 3), theme.square_color(3, 4));
    }

    #[test]
    fn test_ascii_glyphs_encode_side_by_case() {
        let theme = Theme::named(ThemeName::Mono, GlyphSet::Ascii);
        let white_knight = ColoredPiece { side: Side::White, kind: PieceKind::Knight };
        let black_knight = ColoredPiece { side: Side::Black, kind: PieceKind::Knight };
        assert_eq!(theme.glyph(white_knight), 'N');
        assert_eq!(theme.glyph(black_knight), 'n');
    }

    #[test]
    fn test_unicode_glyphs_differ_by_side() {
        let theme = Theme::named(ThemeName::Classic, GlyphSet::Unicode);
        let white_king = ColoredPiece { side: Side::White, kind: PieceKind::King };
        let black_king = ColoredPiece { side: Side::Black, kind: PieceKind::King };
        assert_eq!(theme.glyph(white_king), '♔');
        assert_eq!(theme.glyph(black_king), '♚');
    }
}
