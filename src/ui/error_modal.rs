use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::theme;
use super::util;
use crate::app::App;

/// Copyable error dialog. Shows the full error text (including raw HTTP
/// bodies), which the status line truncates to its first line.
pub fn draw_error_modal(f: &mut Frame, area: Rect, app: &App) {
    let Some(ref message) = app.error_modal else {
        return;
    };

    let popup_area = util::centered(area, 80, 16);
    f.render_widget(Clear, popup_area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(3),    // error text
            Constraint::Length(2), // hints
        ])
        .split(popup_area);

    let title_block = Block::default()
        .title(" Error ")
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::ERROR_BORDER);
    f.render_widget(Paragraph::new("").block(title_block), inner_chunks[0]);

    let body_block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(theme::ERROR_BORDER);
    let lines: Vec<Line> = message.lines().map(Line::from).collect();
    let body = Paragraph::new(lines)
        .block(body_block)
        .wrap(Wrap { trim: false });
    f.render_widget(body, inner_chunks[1]);

    let hints = Line::from(vec![
        Span::styled(" c", theme::HELP_KEY),
        Span::styled(": copy  ", theme::HELP_DESC),
        Span::styled("Esc", theme::HELP_KEY),
        Span::styled(": dismiss ", theme::HELP_DESC),
    ]);
    let hint_block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::ERROR_BORDER);
    f.render_widget(Paragraph::new(hints).block(hint_block), inner_chunks[2]);
}
