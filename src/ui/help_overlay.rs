use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Center a box
    let width = 64u16.min(area.width.saturating_sub(4));
    let height = 27u16.min(area.height.saturating_sub(4));

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

    let popup_area = horiz[1];

    // Clear background
    f.render_widget(Clear, popup_area);

    let bindings = [
        ("Tab / 1 / 2", "Switch between Source and Storyboard"),
        ("h/l or Left/Right", "Switch panes (list / header / page)"),
        ("j/k or Up/Down", "Select page (list) / scroll text"),
        ("n / p", "Next / previous page"),
        ("g / G", "First / last page"),
        ("Enter", "Open the selected page (list pane)"),
        ("e", "Edit the focused text"),
        ("Esc", "Finish editing / close overlay"),
        ("Ctrl+S", "Save storyboard (also while editing)"),
        ("s", "Generate storyboard from source text"),
        ("i", "Generate image for the current page"),
        ("I", "Generate images for every page"),
        ("v", "Image status viewer"),
        ("y", "Copy current page prompt to clipboard"),
        ("w", "Save storyboard to the project folder"),
        ("o", "Open a saved project"),
        ("r", "Rename the project"),
        ("S", "Settings (API key, text model)"),
        ("? / Ctrl+H", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(" Keybindings", theme::HELP_TITLE)),
        Line::from(""),
    ];

    for (key, desc) in &bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:20}", key), theme::HELP_KEY),
            Span::styled(*desc, theme::HELP_DESC),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_ACTIVE);

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}
