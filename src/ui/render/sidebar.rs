use super::Frame;
use crate::sidebar::SidebarRow;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const BLOCK_TITLE: &str = "Coop";
const LOGOUT_LABEL: &str = "⏻ Logout";

/// Render the sidebar menu according to state.
///
pub fn sidebar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = *state.current_focus() == Focus::Menu;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(BLOCK_TITLE);
    if focused {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    }
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let controller = state.sidebar();
    let menu = controller.menu();
    let active = state.active_screen();
    let expansion = controller.expansion();

    // Logout is always the last row, so list indices match row indices
    let items: Vec<ListItem> = controller
        .visible_rows()
        .into_iter()
        .filter_map(|row| match row {
            SidebarRow::Group(index) => menu.group(index).map(|group| {
                let marker = if !group.is_expandable() {
                    ""
                } else if expansion.is_expanded(index) {
                    " ▾"
                } else {
                    " ▸"
                };
                let style = if controller.is_group_highlighted(index, active) {
                    styling::highlighted_group_style(theme)
                } else {
                    styling::normal_text_style(theme)
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{} {}{}", group.icon.glyph(), group.name, marker),
                    style,
                )))
            }),
            SidebarRow::SubItem { group, item } => menu
                .group(group)
                .and_then(|menu_group| menu_group.sub_items().get(item))
                .map(|sub_item| {
                    ListItem::new(Line::from(Span::styled(
                        format!("   {} {}", sub_item.icon.glyph(), sub_item.label),
                        styling::normal_text_style(theme),
                    )))
                }),
            SidebarRow::Logout => None,
        })
        .collect();

    let selected = controller.selected_row();
    let mut list_state = ListState::default();
    if focused && selected != Some(SidebarRow::Logout) {
        list_state.select(Some(controller.cursor()));
    }

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::cursor_style(theme));
    frame.render_stateful_widget(list, parts[0], &mut list_state);

    let logout_style = if focused && selected == Some(SidebarRow::Logout) {
        styling::cursor_style(theme)
    } else {
        styling::muted_text_style(theme)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(LOGOUT_LABEL, logout_style))),
        parts[1],
    );
}
