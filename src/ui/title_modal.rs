use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;
use super::util;
use crate::app::App;

/// Project title input. The title names the project directory, so hostile
/// characters are sanitized later, at path-resolution time.
pub fn draw_title_modal(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = util::centered(area, 54, 7);
    f.render_widget(Clear, popup_area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(1),    // input
            Constraint::Length(2), // hints
        ])
        .split(popup_area);

    let title_block = Block::default()
        .title(" Project Title ")
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new("").block(title_block), inner_chunks[0]);

    let input = Line::from(vec![
        Span::raw(format!("  {}", app.title_input)),
        Span::styled(" ", Style::new().add_modifier(Modifier::REVERSED)),
    ]);
    let body_block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new(input).block(body_block), inner_chunks[1]);

    let hints = Line::from(vec![
        Span::styled(" Enter", theme::HELP_KEY),
        Span::styled(": rename  ", theme::HELP_DESC),
        Span::styled("Esc", theme::HELP_KEY),
        Span::styled(": cancel ", theme::HELP_DESC),
    ]);
    let hint_block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new(hints).block(hint_block), inner_chunks[2]);
}
