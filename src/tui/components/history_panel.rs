//! # HistoryPanel Component
//!
//! Scrollable view of the accepted-move history.
//!
//! ## Responsibilities
//!
//! - Reformat the move history into numbered turn pairs (one line per turn)
//! - Feed the result to a scrollable viewport, pinned to the newest entry
//! - Manage scroll state (wheel / arrow keys / PgUp / PgDn detach; `End` or
//!   scrolling back past the bottom re-pins)
//!
//! ## Architecture
//!
//! `HistoryPanel` is a transient component (created each frame) that wraps
//! `&'a mut HistoryPanelState` (persistent state) and the `MoveHistory`
//! (props). Since `Component::render` takes `&mut self`, scroll state can be
//! mutated during the render pass, aligning with Ratatui's `StatefulWidget`
//! pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::history::MoveHistory;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the history panel.
/// Must be persisted in the parent TuiState.
pub struct HistoryPanelState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to the newest turn on new content
    pub stick_to_bottom: bool,
    /// Total content height from the last render (for scroll clamping)
    content_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    viewport_height: u16,
}

impl Default for HistoryPanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryPanelState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to the newest entry
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Re-pin to the newest entry (used after an accepted move or new game).
    pub fn pin_to_newest(&mut self) {
        self.stick_to_bottom = true;
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Re-engage auto-scroll if the user has scrolled back to the bottom.
    fn repin_if_at_bottom(&mut self) {
        if self.scroll_state.offset().y >= self.max_scroll() {
            self.stick_to_bottom = true;
        }
        self.clamp_scroll();
    }
}

impl EventHandler for HistoryPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
            }
            _ => {}
        }
        None
    }
}

/// Scrollable move-history view, created fresh each frame.
///
/// # Props
///
/// - `history`: the ordered accepted-move record from App state
pub struct HistoryPanel<'a> {
    pub state: &'a mut HistoryPanelState,
    pub history: &'a MoveHistory,
}

impl Component for HistoryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Moves");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.history.is_empty() {
            let placeholder = Paragraph::new("no moves yet").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(placeholder, inner);
            return;
        }

        let content_width = inner.width.saturating_sub(1).max(1); // -1 for scrollbar
        let content_height = self.history.turn_count() as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;

        if self.state.stick_to_bottom {
            let max_y = self.state.max_scroll();
            self.state.scroll_state.set_offset(Position { x: 0, y: max_y });
        } else {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let turns = Paragraph::new(self.history.numbered_turns());
        scroll_view.render_widget(turns, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn history_of(moves: &[&str]) -> MoveHistory {
        let mut h = MoveHistory::new();
        for m in moves {
            h.push(m.to_string());
        }
        h
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_numbered_turns() {
        let backend = TestBackend::new(24, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let history = history_of(&["e4", "e5", "Nf3"]);
        let mut state = HistoryPanelState::new();

        terminal
            .draw(|f| {
                let mut panel = HistoryPanel {
                    state: &mut state,
                    history: &history,
                };
                panel.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("1. e4 e5"));
        assert!(text.contains("2. Nf3"));
    }

    #[test]
    fn test_empty_history_shows_placeholder() {
        let backend = TestBackend::new(24, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let history = MoveHistory::new();
        let mut state = HistoryPanelState::new();

        terminal
            .draw(|f| {
                let mut panel = HistoryPanel {
                    state: &mut state,
                    history: &history,
                };
                panel.render(f, f.area());
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("no moves yet"));
    }

    #[test]
    fn test_sticks_to_newest_turn() {
        // 4 visible rows inside the border, 20 turns of content
        let backend = TestBackend::new(24, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let moves: Vec<String> = (0..40).map(|i| format!("m{i}")).collect();
        let refs: Vec<&str> = moves.iter().map(String::as_str).collect();
        let history = history_of(&refs);
        let mut state = HistoryPanelState::new();

        terminal
            .draw(|f| {
                let mut panel = HistoryPanel {
                    state: &mut state,
                    history: &history,
                };
                panel.render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("20. m38 m39"), "newest turn is visible");
        assert!(!text.contains("1. m0 m1"), "oldest turn scrolled out");
        assert!(state.scroll_state.offset().y > 0);
    }

    #[test]
    fn test_scroll_up_detaches_end_repins() {
        let mut state = HistoryPanelState::new();
        state.content_height = 20;
        state.viewport_height = 4;

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);

        state.handle_event(&TuiEvent::ScrollToBottom);
        assert!(state.stick_to_bottom);
    }

    #[test]
    fn test_scrolling_past_bottom_repins() {
        let mut state = HistoryPanelState::new();
        state.content_height = 6;
        state.viewport_height = 4;
        state.stick_to_bottom = false;
        state.scroll_state.set_offset(Position { x: 0, y: 1 });

        // max_scroll is 2; one scroll down reaches it
        state.handle_event(&TuiEvent::ScrollDown);
        assert!(state.stick_to_bottom);
    }
}
