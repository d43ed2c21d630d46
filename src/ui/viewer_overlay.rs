use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::theme;
use crate::app::App;

/// Fullscreen status view for the current page's image. Terminals cannot
/// show the PNG itself; this reports where it landed and whether it exists.
pub fn draw_viewer(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Clear, area);

    let title = app.document.project_title.trim();
    let shown = if title.is_empty() { "(unnamed)" } else { title };

    let mut lines = vec![
        Line::from(""),
        Line::from(format!("  Project: {}", shown)),
        Line::from(format!("  {}", app.document.page_label(app.current_page))),
        Line::from(""),
    ];

    match app.current_image {
        Some(ref info) => {
            lines.push(Line::from(format!("  Image:    {}", info.path.display())));
            lines.push(Line::from(format!("  Size:     {}", info.display_size())));
            lines.push(Line::from(format!(
                "  Modified: {}",
                info.display_modified()
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  No image for this page yet. Press i to generate one.",
                theme::EMPTY_STATE,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Left/Right", theme::HELP_KEY),
        Span::styled(" page  ", theme::HELP_DESC),
        Span::styled("Esc", theme::HELP_KEY),
        Span::styled(" close", theme::HELP_DESC),
    ]));

    let block = Block::default()
        .title(" Image Viewer ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_ACTIVE);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
