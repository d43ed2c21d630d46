use ratatui::style::{Color, Modifier, Style};

// Tab bar
pub const TAB_ACTIVE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
pub const TAB_INACTIVE: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Status bar
pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
pub const STATUS_MESSAGE: Style = Style::new().fg(Color::Green).bg(Color::DarkGray);

// Running generation task indicator
pub const TASK_ACTIVE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD);

// List items
pub const LIST_SELECTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
pub const LIST_NORMAL: Style = Style::new().fg(Color::White);
pub const PAGE_SUMMARY: Style = Style::new().fg(Color::DarkGray);

// Borders
pub const BORDER_ACTIVE: Style = Style::new().fg(Color::Cyan);
pub const BORDER_INACTIVE: Style = Style::new().fg(Color::DarkGray);
pub const EDIT_BORDER: Style = Style::new().fg(Color::Yellow);
pub const ERROR_BORDER: Style = Style::new().fg(Color::Red);
pub const MODAL_BORDER: Style = Style::new().fg(Color::Magenta);

// Editor surfaces
pub const EDITOR_TEXT: Style = Style::new().fg(Color::White);
pub const CURSOR_LINE: Style = Style::new().bg(Color::DarkGray);

// Help overlay
pub const HELP_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const HELP_KEY: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const HELP_DESC: Style = Style::new().fg(Color::White);

// Footer hints
pub const HINT_KEY: Style = Style::new().fg(Color::Yellow).bg(Color::DarkGray);
pub const HINT_DESC: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Empty state
pub const EMPTY_STATE: Style = Style::new().fg(Color::DarkGray);

// Settings field labels
pub const FIELD_FOCUSED: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const FIELD_IDLE: Style = Style::new().fg(Color::Gray);
