//! # Board Component
//!
//! Converts a [`Position`] snapshot into a fixed-grid colored text rendering.
//!
//! The line builder is a pure function of (position, target width, theme):
//! no error conditions, no side effects. For any width at or above
//! [`MIN_BOARD_WIDTH`] it produces exactly 10 lines — 8 rank rows plus file
//! labels above and below — all padded to the same width. Rank labels sit on
//! both edges; squares are colored by the parity of (file + rank) and piece
//! glyphs by their owning side.
//!
//! Viewports narrower than the minimum (or with zero height) render blank.
//! The original variants clamped degenerate resize dimensions to zero without
//! saying whether that was intended; degrade-to-blank is the decided behavior
//! here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::oracle::Position;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Width of one square cell, in terminal columns.
const SQUARE_WIDTH: usize = 3;
/// Width of the rank-label gutter on each edge.
const GUTTER_WIDTH: usize = 2;
/// Narrowest rendering: two gutters around eight square cells.
pub const MIN_BOARD_WIDTH: u16 = (GUTTER_WIDTH * 2 + SQUARE_WIDTH * 8) as u16;
/// 8 rank rows plus a file-label row above and below.
pub const BOARD_HEIGHT: u16 = 10;

/// Build the board's text lines for the given target width.
///
/// Returns an empty `Vec` when `width < MIN_BOARD_WIDTH` (degrade-to-blank);
/// otherwise exactly [`BOARD_HEIGHT`] lines, each `width` columns wide.
pub fn render_lines(position: &Position, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    if width < MIN_BOARD_WIDTH {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    lines.push(file_label_line(width, theme));

    for rank in (0..8usize).rev() {
        let mut spans = vec![Span::styled(format!("{} ", rank + 1), theme.label)];
        for file in 0..8usize {
            let background = Style::default().bg(theme.square_color(file, rank));
            let span = match position.piece_at(file, rank) {
                Some(piece) => Span::styled(
                    format!(" {} ", theme.glyph(piece)),
                    background.fg(theme.piece_color(piece.side)),
                ),
                None => Span::styled(" ".repeat(SQUARE_WIDTH), background),
            };
            spans.push(span);
        }
        spans.push(Span::styled(format!(" {}", rank + 1), theme.label));
        pad_to_width(&mut spans, width);
        lines.push(Line::from(spans));
    }

    lines.push(file_label_line(width, theme));
    lines
}

fn file_label_line(width: u16, theme: &Theme) -> Line<'static> {
    let mut labels = String::with_capacity(MIN_BOARD_WIDTH as usize);
    labels.push_str("  ");
    for file in 0..8u8 {
        labels.push(' ');
        labels.push((b'a' + file) as char);
        labels.push(' ');
    }
    labels.push_str("  ");

    let mut spans = vec![Span::styled(labels, theme.label)];
    pad_to_width(&mut spans, width);
    Line::from(spans)
}

/// Pad a line with trailing spaces so every line has the same target width.
fn pad_to_width(spans: &mut Vec<Span<'static>>, width: u16) {
    let current: usize = spans.iter().map(|s| s.content.width()).sum();
    let missing = (width as usize).saturating_sub(current);
    if missing > 0 {
        spans.push(Span::raw(" ".repeat(missing)));
    }
}

/// Board widget wrapping the pure line builder.
///
/// # Props
///
/// - `position`: snapshot from the rules oracle
/// - `theme`: resolved style policy
pub struct BoardView<'a> {
    pub position: &'a Position,
    pub theme: &'a Theme,
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let lines = render_lines(self.position, area.width, self.theme);
        if lines.is_empty() {
            return; // viewport too narrow, deliberately blank
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}
