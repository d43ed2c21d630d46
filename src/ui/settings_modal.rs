use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;
use super::util;
use crate::app::{App, SettingsField};

/// Gemini settings editor. The key is masked on screen; the model field can
/// be typed freely or cycled through presets with Left/Right.
pub fn draw_settings(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = util::centered(area, 62, 9);
    f.render_widget(Clear, popup_area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(3),    // fields
            Constraint::Length(2), // hints
        ])
        .split(popup_area);

    let title_block = Block::default()
        .title(" Gemini Settings ")
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new("").block(title_block), inner_chunks[0]);

    let key_focused = app.settings_field == SettingsField::ApiKey;
    let model_focused = app.settings_field == SettingsField::Model;

    let key_value: Span = if app.settings_api_key.is_empty() {
        Span::styled("(not set)", theme::EMPTY_STATE)
    } else {
        Span::raw("*".repeat(app.settings_api_key.chars().count()))
    };

    let mut model_spans = vec![
        Span::raw(if model_focused { "> " } else { "  " }),
        Span::styled(
            "Model    ",
            if model_focused {
                theme::FIELD_FOCUSED
            } else {
                theme::FIELD_IDLE
            },
        ),
        Span::raw(app.settings_model.clone()),
    ];
    if model_focused {
        model_spans.push(Span::styled("  Left/Right presets", theme::EMPTY_STATE));
    }

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(if key_focused { "> " } else { "  " }),
            Span::styled(
                "API key  ",
                if key_focused {
                    theme::FIELD_FOCUSED
                } else {
                    theme::FIELD_IDLE
                },
            ),
            key_value,
        ]),
        Line::from(model_spans),
        Line::from(""),
    ];

    let body_block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new(lines).block(body_block), inner_chunks[1]);

    let hints = Line::from(vec![
        Span::styled(" Tab", theme::HELP_KEY),
        Span::styled(": field  ", theme::HELP_DESC),
        Span::styled("Enter", theme::HELP_KEY),
        Span::styled(": save  ", theme::HELP_DESC),
        Span::styled("Esc", theme::HELP_KEY),
        Span::styled(": cancel ", theme::HELP_DESC),
    ]);
    let hint_block = Block::default()
        .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
        .border_style(theme::MODAL_BORDER);
    f.render_widget(Paragraph::new(hints).block(hint_block), inner_chunks[2]);
}
