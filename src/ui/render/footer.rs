use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction, HotkeyMode};
use crate::state::{Focus, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the hotkey hints for the current mode and focus.
///
fn controls_text(state: &State) -> String {
    let hotkeys = state.get_hotkeys();
    match state.hotkey_mode() {
        HotkeyMode::LogoutDialog => build_footer_text(
            hotkeys.for_mode(HotkeyMode::LogoutDialog),
            &[
                (HotkeyAction::ConfirmLogout, "log out", None),
                (HotkeyAction::CancelLogout, "stay", None),
            ],
        ),
        HotkeyMode::Shell if *state.current_focus() == Focus::Menu => build_footer_text(
            hotkeys.for_mode(HotkeyMode::Shell),
            &[
                (HotkeyAction::MenuNext, "navigate", Some(HotkeyAction::MenuPrev)),
                (HotkeyAction::Select, "open", None),
                (HotkeyAction::FocusScreen, "screen", None),
                (HotkeyAction::ToggleSidebar, "hide menu", None),
                (HotkeyAction::Back, "back", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
        HotkeyMode::Shell => build_footer_text(
            hotkeys.for_mode(HotkeyMode::Shell),
            &[
                (HotkeyAction::ToggleSidebar, "show menu", None),
                (HotkeyAction::FocusMenu, "menu", None),
                (HotkeyAction::Back, "back", None),
                (HotkeyAction::ToggleLog, "log", None),
                (HotkeyAction::Quit, "quit", None),
            ],
        ),
    }
}

/// Render footer according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, color) = match (state.hotkey_mode(), state.current_focus()) {
        (HotkeyMode::LogoutDialog, _) => ("LOGOUT:", &theme.footer_logout),
        (HotkeyMode::Shell, Focus::Menu) => ("MENU:", &theme.footer_menu),
        (HotkeyMode::Shell, Focus::Screen) => ("SCREEN:", &theme.footer_screen),
    };
    let controls = controls_text(state);

    let controls_content = Line::from(vec![
        Span::styled(
            format!("{} ", state.animator().toggle_icon().glyph()),
            Style::default().fg(theme.primary.to_color()),
        ),
        Span::styled(
            label,
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
