//! # TitleBar Component
//!
//! Top status line: application name, outcome/status text, and the
//! invalid-move error when one is pending.
//!
//! Stateless — it receives all data as props and renders what it's given.
//! The error wins over the status message so the reason a move was rejected
//! is always visible; it is cleared by the next accepted move.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `status_message`: Core App state (last move, outcome, welcome text)
/// - `error`: Core App state (pending invalid-move message, if any)
pub struct TitleBar {
    pub status_message: String,
    pub error: Option<String>,
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match &self.error {
            Some(error) => Span::styled(
                format!("Gambit | {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None if self.status_message.is_empty() => Span::raw("Gambit"),
            None => Span::raw(format!("Gambit | {}", self.status_message)),
        };
        frame.render_widget(span, area);
    }
}
