//! # Actions
//!
//! Everything that can happen in Gambit becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! User hits Ctrl+N? That's `Action::NewGame`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state, returning an `Effect` for the adapter to perform. No terminal
//! I/O here — that happens in the `tui` module.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes the move-submission rules testable without a terminal:
//! `assert_eq!(update(&mut app, action), expected_effect)`.

use log::{debug, info};

use crate::core::state::App;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A move string was submitted from the input field.
    Submit(String),
    /// Reset the oracle and history for a fresh game.
    NewGame,
    /// Exit the application.
    Quit,
}

/// Side effects the TUI adapter performs after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The oracle accepted the move: clear the input buffer and re-pin the
    /// history panel to the newest entry.
    MoveAccepted,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::NewGame => {
            info!("starting a new game");
            *app = App::new();
            app.status_message = String::from("New game. White to move.");
            Effect::None
        }

        Action::Submit(text) => {
            let move_text = text.trim();
            if move_text.is_empty() {
                return Effect::None;
            }

            // Once the outcome is terminal, submissions are no-ops on both
            // position and history.
            let outcome = app.oracle.outcome();
            if outcome.is_terminal() {
                debug!("move '{}' ignored, game is over ({})", move_text, outcome);
                app.status_message = format!("Game over: {} {}", outcome, outcome.score());
                return Effect::None;
            }

            let mover = app.oracle.side_to_move();
            match app.oracle.apply(move_text) {
                Ok(()) => {
                    app.history.push(move_text.to_string());
                    app.error = None;

                    let outcome = app.oracle.outcome();
                    app.status_message = if outcome.is_terminal() {
                        info!("game over after '{}': {}", move_text, outcome);
                        format!("Game over: {} {}", outcome, outcome.score())
                    } else {
                        debug!("{} played '{}'", mover, move_text);
                        format!("{} played {}", mover, move_text)
                    };
                    Effect::MoveAccepted
                }
                Err(e) => {
                    debug!("rejected: {}", e);
                    app.error = Some(e.to_string());
                    Effect::None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Outcome;

    #[test]
    fn test_legal_move_appends_history_and_clears_error() {
        let mut app = App::new();
        app.error = Some(String::from("stale error"));

        let effect = update(&mut app, Action::Submit("e4".to_string()));

        assert_eq!(effect, Effect::MoveAccepted);
        assert_eq!(app.history.moves(), &["e4".to_string()]);
        assert!(app.error.is_none());
        assert_eq!(app.status_message, "White played e4");
    }

    #[test]
    fn test_invalid_move_sets_error_and_keeps_history() {
        let mut app = App::new();
        let before = app.oracle.snapshot();

        let effect = update(&mut app, Action::Submit("Ke5".to_string()));

        assert_eq!(effect, Effect::None);
        assert!(app.history.is_empty());
        let error = app.error.as_deref().unwrap();
        assert!(!error.is_empty());
        assert_eq!(app.oracle.snapshot(), before);
    }

    #[test]
    fn test_submitted_text_is_trimmed_into_history() {
        let mut app = App::new();
        update(&mut app, Action::Submit("  e4  ".to_string()));
        assert_eq!(app.history.moves(), &["e4".to_string()]);
    }

    #[test]
    fn test_whitespace_submission_is_noop() {
        let mut app = App::new();
        let effect = update(&mut app, Action::Submit("   ".to_string()));
        assert_eq!(effect, Effect::None);
        assert!(app.history.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_moves_after_terminal_outcome_are_noops() {
        let mut app = App::new();
        for mv in ["f3", "e5", "g4", "Qh4"] {
            assert_eq!(update(&mut app, Action::Submit(mv.to_string())), Effect::MoveAccepted);
        }
        assert_eq!(app.oracle.outcome(), Outcome::BlackWins);
        assert_eq!(app.history.len(), 4);
        let position = app.oracle.snapshot();

        let effect = update(&mut app, Action::Submit("a3".to_string()));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.history.len(), 4);
        assert_eq!(app.oracle.snapshot(), position);
        assert!(app.status_message.contains("Game over"));
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut app = App::new();
        update(&mut app, Action::Submit("e4".to_string()));
        update(&mut app, Action::Submit("bogus".to_string()));

        let effect = update(&mut app, Action::NewGame);

        assert_eq!(effect, Effect::None);
        assert!(app.history.is_empty());
        assert!(app.error.is_none());
        assert_eq!(app.oracle.snapshot(), App::new().oracle.snapshot());
    }

    #[test]
    fn test_quit_action() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
