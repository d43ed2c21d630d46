use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{
    error_modal, help_overlay, picker_modal, settings_modal, source_view, storyboard_view, tabs,
    theme, title_modal, viewer_overlay,
};
use crate::app::{ActiveTab, App, RunningTask, StoryboardPane};

pub fn draw_layout(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Tab bar
    tabs::draw_tab_bar(f, chunks[0], app);

    // Content area
    draw_content(f, chunks[1], app);

    // Status bar
    draw_status_bar(f, chunks[2], app);

    // Overlays, innermost first; later draws sit on top
    if app.viewer_open {
        viewer_overlay::draw_viewer(f, f.area(), app);
    }
    if app.picker_open {
        picker_modal::draw_picker(f, f.area(), app);
    }
    if app.title_editing {
        title_modal::draw_title_modal(f, f.area(), app);
    }
    if app.settings_open {
        settings_modal::draw_settings(f, f.area(), app);
    }
    if app.confirm_batch {
        draw_batch_confirm(f, f.area(), app.document.pages.len());
    }
    if app.confirm_quit {
        draw_quit_confirm(f, f.area());
    }
    if app.error_modal.is_some() {
        error_modal::draw_error_modal(f, f.area(), app);
    }

    // Help overlay (on top of everything)
    if app.show_help {
        help_overlay::draw_help(f, f.area());
    }
}

fn draw_quit_confirm(f: &mut Frame, area: Rect) {
    let width = 54u16.min(area.width.saturating_sub(4));
    let height = 5u16;

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

    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Save changes before quitting?",
            Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "  y",
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" save and quit  "),
            Span::styled(
                "n",
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" discard  "),
            Span::styled(
                "Esc",
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" cancel"),
        ]),
    ];

    let block = Block::default()
        .title(" Unsaved Changes ")
        .borders(Borders::ALL)
        .border_style(Style::new().fg(Color::Yellow));

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}

fn draw_batch_confirm(f: &mut Frame, area: Rect, total: usize) {
    let width = 54u16.min(area.width.saturating_sub(4));
    let height = 5u16;

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

    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Generate images for {} pages?", total),
            Style::new()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "  y",
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" start  "),
            Span::styled(
                "n",
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" cancel"),
        ]),
    ];

    let block = Block::default()
        .title(" Generate All Images ")
        .borders(Borders::ALL)
        .border_style(theme::MODAL_BORDER);

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}

fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    match app.active_tab {
        ActiveTab::Source => source_view::draw_source(f, area, app),
        ActiveTab::Storyboard => storyboard_view::draw_storyboard(f, area, app),
    }
}

fn hint_text(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.editing {
        return vec![("Esc", "done"), ("^S", "save")];
    }

    let mut hints: Vec<(&str, &str)> = match app.active_tab {
        ActiveTab::Source => vec![
            ("e", "edit"),
            ("s", "storyboard"),
            ("o", "open"),
            ("S", "settings"),
        ],
        ActiveTab::Storyboard => match app.storyboard_pane {
            StoryboardPane::List => vec![
                ("j/k", "pages"),
                ("Enter", "view"),
                ("l", "editor"),
                ("w", "save"),
            ],
            StoryboardPane::Header => vec![
                ("e", "edit"),
                ("h/l", "panes"),
                ("n/p", "page"),
                ("w", "save"),
            ],
            StoryboardPane::Page => vec![
                ("e", "edit"),
                ("n/p", "page"),
                ("i", "image"),
                ("I", "all"),
                ("v", "viewer"),
                ("y", "copy"),
            ],
        },
    };
    hints.push(("?", "help"));
    hints
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut left_spans: Vec<Span> = Vec::new();

    // Edit mode indicator
    if app.editing {
        left_spans.push(Span::styled(
            " EDIT ",
            Style::new()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Running task indicator
    if let Some(ref task) = app.task {
        let label = match task {
            RunningTask::Storyboard => " STORYBOARD ".to_string(),
            RunningTask::PageImage(page) => format!(" IMAGE {} ", page + 1),
            RunningTask::BatchImages { total } => {
                format!(" BATCH {}/{} ", app.batch_success + app.batch_fail, total)
            }
        };
        left_spans.push(Span::styled(label, theme::TASK_ACTIVE));
    }

    // Error display
    if let Some(ref err) = app.last_error {
        left_spans.push(Span::styled(
            format!(" ERR: {} ", err),
            Style::new().fg(Color::Red).bg(Color::DarkGray),
        ));
    }

    // Transient status message
    if let Some(ref status) = app.status {
        left_spans.push(Span::styled(
            format!(" {} ", status),
            theme::STATUS_MESSAGE,
        ));
    }

    // Build right-aligned hint spans
    let hints = hint_text(app);
    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled("  ", theme::STATUS_BAR));
        }
        hint_spans.push(Span::styled(*key, theme::HINT_KEY));
        hint_spans.push(Span::styled(":", theme::HINT_DESC));
        hint_spans.push(Span::styled(*desc, theme::HINT_DESC));
    }
    hint_spans.push(Span::styled(" ", theme::STATUS_BAR));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let hint_width: usize = hint_spans.iter().map(|s| s.width()).sum();
    let total = area.width as usize;
    let gap = total.saturating_sub(left_width + hint_width);

    let mut spans = left_spans;
    spans.push(Span::styled(" ".repeat(gap), theme::STATUS_BAR));
    spans.extend(hint_spans);

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}
