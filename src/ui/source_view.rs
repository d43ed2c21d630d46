use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::theme;
use super::util;
use crate::app::App;

pub fn draw_source(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.editing {
        theme::EDIT_BORDER
    } else {
        theme::BORDER_ACTIVE
    };

    let lines = app.source_editor.lines();
    let block = Block::default()
        .title(format!(" Novel Source [{} lines] ", lines.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let is_blank = lines.len() == 1 && lines[0].is_empty();
    if is_blank && !app.editing {
        let msg = Paragraph::new(
            "No source text yet.\n\n\
             Press e and type or paste the novel text, Esc when done,\n\
             then s to generate a storyboard.",
        )
        .style(theme::EMPTY_STATE)
        .block(block)
        .wrap(Wrap { trim: false });
        f.render_widget(msg, area);
        return;
    }

    let widget = util::editor_widget(&app.source_editor, block, app.editing);
    f.render_widget(&widget, area);
}
