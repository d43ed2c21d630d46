use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::theme;
use super::util;
use crate::app::App;

/// Project picker: one row per directory under the projects root.
pub fn draw_picker(f: &mut Frame, area: Rect, app: &App) {
    let height = (app.picker_items.len() as u16 + 4).clamp(7, 18);
    let popup_area = util::centered(area, 54, height);
    f.render_widget(Clear, popup_area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(1),    // project list
            Constraint::Length(2), // hints
        ])
        .split(popup_area);

    let title_block = Block::default()
        .title(format!(" Open Project [{}] ", app.picker_items.len()))
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new("").block(title_block), inner_chunks[0]);

    let available = (popup_area.width as usize).saturating_sub(6);
    let items: Vec<ListItem> = app
        .picker_items
        .iter()
        .map(|name| ListItem::new(format!(" {}", util::truncate_width(name, available))))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.picker_index));

    let body_block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    let list = List::new(items)
        .block(body_block)
        .highlight_style(theme::LIST_SELECTED);
    f.render_stateful_widget(list, inner_chunks[1], &mut state);

    let hints = Line::from(vec![
        Span::styled(" j/k", theme::HELP_KEY),
        Span::styled(": select  ", theme::HELP_DESC),
        Span::styled("Enter", theme::HELP_KEY),
        Span::styled(": open  ", theme::HELP_DESC),
        Span::styled("Esc", theme::HELP_KEY),
        Span::styled(": cancel ", theme::HELP_DESC),
    ]);
    let hint_block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new(hints).block(hint_block), inner_chunks[2]);
}
