use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::theme;
use super::util;
use crate::app::{App, StoryboardPane};

pub fn draw_storyboard(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    draw_page_list(f, chunks[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(chunks[1]);

    draw_header_pane(f, right[0], app);
    draw_page_pane(f, right[1], app);
}

fn draw_page_list(f: &mut Frame, area: Rect, app: &App) {
    let is_active = app.storyboard_pane == StoryboardPane::List;
    let border_style = if is_active {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };

    let block = Block::default()
        .title(format!(" Pages [{}] ", app.document.pages.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if app.document.pages.is_empty() {
        let msg = Paragraph::new("No pages yet.\n\nGenerate a storyboard with s.")
            .style(theme::EMPTY_STATE)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .document
        .pages
        .iter()
        .map(|page| {
            let title = Span::styled(page.title.clone(), theme::LIST_NORMAL);
            let available = (area.width as usize).saturating_sub(title.width() + 5);
            let summary = util::truncate_width(page.summary(), available).to_string();
            let line = Line::from(vec![
                title,
                Span::raw(" "),
                Span::styled(summary, theme::PAGE_SUMMARY),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.current_page.min(app.document.pages.len() - 1)));

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::LIST_SELECTED);

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_header_pane(f: &mut Frame, area: Rect, app: &App) {
    let is_active = app.storyboard_pane == StoryboardPane::Header;
    let editing_here = app.editing && is_active;
    let border_style = if editing_here {
        theme::EDIT_BORDER
    } else if is_active {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };

    let block = Block::default()
        .title(" Header ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let widget = util::editor_widget(&app.header_editor, block, editing_here);
    f.render_widget(&widget, area);
}

fn draw_page_pane(f: &mut Frame, area: Rect, app: &App) {
    let is_active = app.storyboard_pane == StoryboardPane::Page;
    let editing_here = app.editing && is_active;
    let border_style = if editing_here {
        theme::EDIT_BORDER
    } else if is_active {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };

    let label = app.document.page_label(app.current_page);
    let title = if app.current_image.is_some() {
        format!(" {} [img] ", label)
    } else {
        format!(" {} ", label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if app.document.pages.is_empty() {
        let msg = Paragraph::new("The combined page view appears here once a storyboard exists.")
            .style(theme::EMPTY_STATE)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(msg, area);
        return;
    }

    let widget = util::editor_widget(&app.page_editor, block, editing_here);
    f.render_widget(&widget, area);
}
