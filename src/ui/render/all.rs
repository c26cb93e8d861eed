use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};
use std::time::Instant;

/// Height of the log panel when shown.
///
const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    all_at(frame, state, Instant::now());
}

/// Render all widgets with the sidebar slide sampled at `now`.
///
pub fn all_at(frame: &mut Frame, state: &mut State, now: Instant) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let sidebar_width = state.animator().visible_width(now).min(rows[0].width);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(rows[0]);

    if sidebar_width > 0 {
        sidebar(frame, columns[0], state);
    }

    let content = if state.is_log_visible() {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(LOG_HEIGHT)])
            .split(columns[1]);
        log(frame, parts[1], state);
        parts[0]
    } else {
        columns[1]
    };

    screen(frame, content, state);
    footer(frame, rows[1], state);

    if state.has_logout_dialog() {
        logout_dialog(frame, size, state);
    }
}
