//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event model
//!
//! Single-threaded and event-driven: one terminal event is processed to
//! completion before the next is read. The loop uses conditional redraw —
//! it sleeps in `poll` (up to 250ms) and only draws after an event or a
//! terminal resize, since nothing on screen animates between moves.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

pub use component::{Component, EventHandler};
pub use components::board::{BOARD_HEIGHT, MIN_BOARD_WIDTH, render_lines};
pub use components::{BoardView, HistoryPanel, HistoryPanelState, MoveInput, MoveInputEvent, TitleBar};

use log::info;
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub move_input: MoveInput,
    pub history_panel: HistoryPanelState,
}

impl TuiState {
    pub fn new(max_input_chars: usize) -> Self {
        Self {
            move_input: MoveInput::new(max_input_chars),
            history_panel: HistoryPanelState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture gives us wheel scrolling for the history panel;
        // motion events are translated away and ignored.
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Prompt text for the move-entry field.
fn input_prompt(app: &App) -> String {
    let outcome = app.oracle.outcome();
    if outcome.is_terminal() {
        format!("Game over ({}) — Ctrl+N for a new game", outcome.score())
    } else {
        format!("{} to move", app.oracle.side_to_move())
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(config.max_input_chars);
    let theme = Theme::named(config.theme, config.glyphs);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync MoveInput props with App state
        tui.move_input.prompt = input_prompt(&app);

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &config, &theme))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before the next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                TuiEvent::NewGame => {
                    update(&mut app, Action::NewGame);
                    tui.move_input.clear();
                    tui.history_panel = HistoryPanelState::new();
                }

                // Scroll events always go to the history panel
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToBottom => {
                    tui.history_panel.handle_event(&event);
                }

                // Everything else belongs to the move-entry field
                _ => {
                    if let Some(MoveInputEvent::Submit(text)) =
                        tui.move_input.handle_event(&event)
                    {
                        match update(&mut app, Action::Submit(text)) {
                            Effect::MoveAccepted => {
                                // Rejected moves keep the buffer for re-editing;
                                // accepted ones clear it and re-pin the history.
                                tui.move_input.clear();
                                tui.history_panel.pin_to_newest();
                            }
                            Effect::Quit => should_quit = true,
                            Effect::None => {}
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
