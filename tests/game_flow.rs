//! End-to-end game flow tests: real oracle, real reducer, real renderer.
//!
//! These drive `update()` the way the event loop does and check the
//! observable invariants: history length tracks accepted submissions, the
//! outcome is monotonic, and the board rendering stays a fixed 10-line grid.

use gambit::core::action::{Action, Effect, update};
use gambit::core::state::App;
use gambit::oracle::Outcome;
use gambit::tui::theme::{GlyphSet, Theme, ThemeName};
use gambit::tui::{BOARD_HEIGHT, MIN_BOARD_WIDTH, render_lines};
use unicode_width::UnicodeWidthStr;

fn submit(app: &mut App, mv: &str) -> Effect {
    update(app, Action::Submit(mv.to_string()))
}

#[test]
fn test_opening_moves_accumulate_history() {
    let mut app = App::new();

    for mv in ["e4", "e5", "Nf3", "Nc6", "Bb5"] {
        assert_eq!(submit(&mut app, mv), Effect::MoveAccepted, "move {mv}");
        assert!(app.error.is_none());
    }

    assert_eq!(app.history.len(), 5);
    assert_eq!(
        app.history.numbered_turns(),
        "1. e4 e5\n2. Nf3 Nc6\n3. Bb5"
    );
    assert_eq!(app.oracle.outcome(), Outcome::Ongoing);
}

#[test]
fn test_rejected_moves_never_touch_history_or_position() {
    let mut app = App::new();
    submit(&mut app, "e4");
    let position = app.oracle.snapshot();

    for bad in ["e9", "Ke4", "zzz", "4e", "e2e9"] {
        assert_eq!(submit(&mut app, bad), Effect::None, "move {bad}");
        let error = app.error.as_deref().expect("error message set");
        assert!(!error.is_empty());
        assert_eq!(app.oracle.snapshot(), position, "position unchanged after {bad}");
        assert_eq!(app.history.len(), 1);
    }

    // Next accepted move clears the pending error
    assert_eq!(submit(&mut app, "e5"), Effect::MoveAccepted);
    assert!(app.error.is_none());
    assert_eq!(app.history.len(), 2);
}

#[test]
fn test_mixed_san_and_coordinate_notation() {
    let mut app = App::new();
    // Whatever the rules library parses is accepted: SAN and coordinate
    // notation can be mixed freely within one game.
    for mv in ["e2e4", "e5", "g1f3", "Nc6"] {
        assert_eq!(submit(&mut app, mv), Effect::MoveAccepted, "move {mv}");
    }
    assert_eq!(app.history.numbered_turns(), "1. e2e4 e5\n2. g1f3 Nc6");
}

#[test]
fn test_checkmate_ends_the_game_permanently() {
    let mut app = App::new();
    // Scholar's mate
    for mv in ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7"] {
        assert_eq!(submit(&mut app, mv), Effect::MoveAccepted, "move {mv}");
    }

    assert_eq!(app.oracle.outcome(), Outcome::WhiteWins);
    assert!(app.status_message.contains("1-0"));

    // Once terminal, submissions are no-ops: position and history unchanged,
    // even for moves that would otherwise be legal-looking.
    let position = app.oracle.snapshot();
    for mv in ["Kxf7", "a6", "e2e4"] {
        assert_eq!(submit(&mut app, mv), Effect::None, "move {mv}");
    }
    assert_eq!(app.history.len(), 7);
    assert_eq!(app.oracle.snapshot(), position);
    assert_eq!(app.oracle.outcome(), Outcome::WhiteWins);
}

#[test]
fn test_new_game_after_checkmate_restarts_play() {
    let mut app = App::new();
    for mv in ["f3", "e5", "g4", "Qh4"] {
        submit(&mut app, mv);
    }
    assert_eq!(app.oracle.outcome(), Outcome::BlackWins);

    update(&mut app, Action::NewGame);
    assert_eq!(app.oracle.outcome(), Outcome::Ongoing);
    assert!(app.history.is_empty());
    assert_eq!(submit(&mut app, "d4"), Effect::MoveAccepted);
}

#[test]
fn test_board_grid_is_stable_across_a_game() {
    let mut app = App::new();
    let theme = Theme::named(ThemeName::Classic, GlyphSet::Unicode);

    for mv in ["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4"] {
        submit(&mut app, mv);

        // Renderer property: 10 lines of identical width at every position
        let lines = render_lines(&app.oracle.snapshot(), MIN_BOARD_WIDTH + 4, &theme);
        assert_eq!(lines.len(), BOARD_HEIGHT as usize);
        for line in &lines {
            let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            assert_eq!(width, (MIN_BOARD_WIDTH + 4) as usize);
        }
    }
}
