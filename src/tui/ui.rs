//! Frame layout: title line on top, board and history panel side by side,
//! move-entry field at the bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::board::{BoardView, MIN_BOARD_WIDTH};
use crate::tui::components::{HistoryPanel, TitleBar};
use crate::tui::theme::Theme;

/// Columns reserved for the board pane: the board minimum plus breathing room
/// before the history panel.
const BOARD_PANE_WIDTH: u16 = MIN_BOARD_WIDTH + 2;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, config: &ResolvedConfig, theme: &Theme) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    // Title line - status message, or the pending invalid-move error in red
    let mut title_bar = TitleBar {
        status_message: app.status_message.clone(),
        error: app.error.clone(),
    };
    title_bar.render(frame, title_area);

    // Main area - board, with the history panel beside it unless disabled
    let position = app.oracle.snapshot();
    let board_area = if config.show_history {
        let [board_area, history_area] =
            Layout::horizontal([Length(BOARD_PANE_WIDTH), Min(0)]).areas(main_area);
        let mut panel = HistoryPanel {
            state: &mut tui.history_panel,
            history: &app.history,
        };
        panel.render(frame, history_area);
        board_area
    } else {
        main_area
    };
    let mut board = BoardView {
        position: &position,
        theme,
    };
    board.render(frame, board_area);

    // Input area
    tui.move_input.render(frame, input_area);
}
