use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::TextArea;
use unicode_width::UnicodeWidthChar;

use super::theme;

/// Truncate a string to at most `max_width` display columns. CJK characters
/// count double. Returns a borrowed slice; no allocation when not truncated.
pub fn truncate_width(s: &str, max_width: usize) -> &str {
    let mut width = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width {
            return &s[..idx];
        }
        width += w;
    }
    s
}

/// Center a `width` x `height` box inside `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));

    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1]);

    horiz[1]
}

/// Clone an editor for rendering with the given block. The cursor and cursor
/// line are only highlighted while the editor has edit focus.
pub fn editor_widget(
    editor: &TextArea<'static>,
    block: Block<'static>,
    focused: bool,
) -> TextArea<'static> {
    let mut widget = editor.clone();
    widget.set_block(block);
    widget.set_style(theme::EDITOR_TEXT);
    if focused {
        widget.set_cursor_line_style(theme::CURSOR_LINE);
    } else {
        widget.set_cursor_line_style(Style::default());
        widget.set_cursor_style(Style::default());
    }
    widget
}
