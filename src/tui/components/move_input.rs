//! # MoveInput Component
//!
//! The move-entry text field.
//!
//! ## Responsibilities
//!
//! - Accumulate keystrokes into a candidate move string, bounded by a
//!   configured character limit (excess keystrokes are ignored)
//! - Handle backspace (a no-op on an empty buffer)
//! - Emit the buffer on Enter **without clearing it** — the application
//!   clears the field only once the rules oracle accepts the move, so a
//!   rejected move stays visible for re-editing
//!
//! ## State Management
//!
//! The buffer and its limit are internal state. The prompt text (side to
//! move / game over) is a prop from the application state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the MoveInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInputEvent {
    /// User pressed Enter with a non-empty buffer. The buffer is NOT cleared;
    /// call [`MoveInput::clear`] once the move is accepted.
    Submit(String),
    /// Text content changed
    Changed,
}

/// Move-entry field with a bounded buffer.
///
/// # Props
///
/// - `prompt`: Block title, e.g. "White to move" (from App state)
///
/// # State
///
/// - `buffer`: candidate move text
/// - `limit`: maximum number of characters the buffer will hold
pub struct MoveInput {
    /// Candidate move text (Internal State)
    pub buffer: String,
    /// Block title, e.g. "White to move" (Prop)
    pub prompt: String,
    limit: usize,
}

impl MoveInput {
    pub fn new(limit: usize) -> Self {
        Self {
            buffer: String::new(),
            prompt: String::new(),
            limit,
        }
    }

    /// Clear the buffer after an accepted submission.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Component for MoveInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.prompt.clone());

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);

        // Cursor sits after the last typed character, inside the border.
        if area.width > 2 && area.height > 2 {
            let max_x = area.x + area.width - 2;
            let cursor_x = (area.x + 1 + self.buffer.width() as u16).min(max_x);
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for MoveInput {
    type Event = MoveInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                // Bounded buffer: keystrokes past the limit are dropped.
                if self.buffer.chars().count() < self.limit {
                    self.buffer.push(*c);
                    Some(MoveInputEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Backspace => {
                // No-op on an empty buffer; never underflows.
                self.buffer.pop().map(|_| MoveInputEvent::Changed)
            }
            TuiEvent::Submit => {
                let text = self.buffer.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(MoveInputEvent::Submit(text.to_string()))
                }
            }
            _ => None,
        }
    }
}
