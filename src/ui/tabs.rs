use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme;
use crate::app::{ActiveTab, App};

pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for (i, tab) in [ActiveTab::Source, ActiveTab::Storyboard].iter().enumerate() {
        let num = i + 1;
        let label = match tab {
            ActiveTab::Source => format!("{}:Source", num),
            ActiveTab::Storyboard => format!("{}:Storyboard", num),
        };

        let style = if *tab == app.active_tab {
            theme::TAB_ACTIVE
        } else {
            theme::TAB_INACTIVE
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    // Project title and version on the right
    let title = app.document.project_title.trim();
    let shown = if title.is_empty() { "(unnamed)" } else { title };
    let star = if app.unsaved_changes { "*" } else { "" };
    let right = Span::styled(
        format!("{}{}  novelboard v{}", shown, star, env!("CARGO_PKG_VERSION")),
        theme::STATUS_BAR,
    );

    let tabs_width: usize = spans.iter().map(|s| s.width()).sum();
    let pad = (area.width as usize).saturating_sub(tabs_width + right.width());
    if pad > 0 {
        spans.push(Span::raw(" ".repeat(pad)));
    }
    spans.push(right);

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}
