pub mod error_modal;
pub mod help_overlay;
pub mod layout;
pub mod picker_modal;
pub mod settings_modal;
pub mod source_view;
pub mod storyboard_view;
pub mod tabs;
pub mod theme;
pub mod title_modal;
pub mod util;
pub mod viewer_overlay;

use ratatui::Frame;

use crate::app::App;

/// Main draw dispatcher.
pub fn draw(f: &mut Frame, app: &App) {
    layout::draw_layout(f, app);
}
