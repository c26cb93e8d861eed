use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the active screen panel according to state.
///
pub fn screen(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let active = state.active_screen();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(active.title());
    if *state.current_focus() == Focus::Screen {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(active.title(), styling::active_block_title_style()));
    }

    let mut lines = Vec::new();
    if let Some((group, label)) = state.sidebar().menu().breadcrumb(active) {
        let breadcrumb = if group == label {
            group.to_string()
        } else {
            format!("{} › {}", group, label)
        };
        lines.push(Line::from(Span::styled(
            breadcrumb,
            styling::muted_text_style(theme),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        active.summary(),
        styling::banner_style(theme),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, size);
}
