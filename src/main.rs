mod app;
mod config;
mod data;
mod event;
mod model;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self as ct_event, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::event::AppEvent;

#[derive(Parser)]
#[command(
    name = "novelboard",
    version,
    about = "Novelboard - storyboard a novel with Gemini, page by page",
    override_help = HELP_TEXT,
)]
struct Cli {
    /// Directory that holds project folders (defaults to ./projects)
    #[arg(long)]
    projects_dir: Option<PathBuf>,

    /// Config file path (defaults to ./storyboard_config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Load this project's storyboard at startup
    #[arg(long)]
    project: Option<String>,

    /// Preload novel text from a file into the Source tab
    #[arg(long)]
    source: Option<PathBuf>,
}

const HELP_TEXT: &str = "\
Novelboard - storyboard a novel with Gemini, page by page

USAGE:
  novelboard [OPTIONS]

OPTIONS:
  --projects-dir <DIR>   Directory that holds project folders [default: ./projects]
  --config <FILE>        Config file path [default: ./storyboard_config.json]
  --project <TITLE>      Load this project's storyboard at startup
  --source <FILE>        Preload novel text from a file into the Source tab
  -h, --help             Print this help
  -V, --version          Print version

TUI KEYBINDINGS:
  Tab / 1 / 2        Switch between Source and Storyboard tabs
  h/l  Left/Right    Switch panes (page list / header / page view)
  j/k  Up/Down       Select page (list pane) / scroll text
  n / p              Next / previous page
  g / G              First / last page
  Enter              Open the selected page (list pane)
  e                  Edit the focused text, Esc when done
  Ctrl+S             Save storyboard (also finishes editing)
  s                  Generate a storyboard from the source text
  i                  Generate an image for the current page
  I                  Generate images for every page (asks first)
  v                  Image status viewer (Left/Right to browse)
  y                  Copy the current page prompt to the clipboard
  w                  Save storyboard to the project folder
  o                  Open a saved project
  r                  Rename the project
  S                  Settings (API key, text model)
  ? / Ctrl+H         Toggle help overlay
  q / Ctrl+C         Quit (asks to save when changes are unsaved)

EXAMPLES:
  novelboard --source drafts/chapter1.txt
  novelboard --project moonlight_sonata
  novelboard --projects-dir ~/storyboards";

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_tui(cli)
}

fn run_tui(cli: Cli) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cli);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {}", e);
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, cli: Cli) -> Result<()> {
    let projects_root = cli
        .projects_dir
        .unwrap_or_else(|| PathBuf::from(config::PROJECTS_DIR));
    let config_path = config::config_path(cli.config);
    let mut app = App::new(projects_root, config_path);

    // Create the event channel before anything can spawn a worker
    let (tx, rx) = mpsc::channel::<AppEvent>();
    app.event_tx = Some(tx);

    if let Some(ref path) = cli.source {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading source file {}", path.display()))?;
        app.set_source_text(&text);
    }
    if let Some(ref name) = cli.project {
        app.load_project(name);
    }

    let tick_rate = Duration::from_millis(config::TICK_RATE_MS);
    let mut last_tick = Instant::now();

    loop {
        // Draw only when dirty
        if app.dirty {
            terminal.draw(|f| ui::draw(f, &app))?;
            app.dirty = false;
        }

        // Handle events
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        // Check for crossterm events
        if ct_event::poll(timeout)? {
            if let Event::Key(key) = ct_event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                    app.mark_dirty();
                }
            }
        }

        // Check for worker results
        while let Ok(evt) = rx.try_recv() {
            match evt {
                AppEvent::StoryboardGenerated(result) => app.handle_storyboard_generated(result),
                AppEvent::PageImageGenerated { page, result } => {
                    app.handle_page_image_generated(page, result)
                }
                AppEvent::BatchImageProgress { page, result } => {
                    app.handle_batch_image_progress(page, result)
                }
                AppEvent::BatchImagesFinished { success, fail } => {
                    app.handle_batch_images_finished(success, fail)
                }
            }
            app.mark_dirty();
        }

        // Tick
        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            app.clear_stale_status();
            app.mark_dirty();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybindings (always active)
    let typing = app.editing || app.settings_open || app.title_editing;
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') if !typing => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        _ => {}
    }

    // Don't process other keys when help is showing
    if app.show_help {
        return;
    }

    // Error dialog
    if app.error_modal.is_some() {
        match key.code {
            KeyCode::Char('c') => app.copy_error(),
            KeyCode::Esc | KeyCode::Enter => app.dismiss_error(),
            _ => {}
        }
        return;
    }

    // Quit confirmation
    if app.confirm_quit {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.quit_saving(),
            KeyCode::Char('n') | KeyCode::Char('N') => app.quit_without_saving(),
            KeyCode::Esc => app.cancel_quit(),
            _ => {}
        }
        return;
    }

    // Batch image confirmation
    if app.confirm_batch {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.start_generate_all(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_generate_all(),
            _ => {}
        }
        return;
    }

    // Settings modal text input
    if app.settings_open {
        handle_settings_key(app, key);
        return;
    }

    // Project title input
    if app.title_editing {
        handle_title_key(app, key);
        return;
    }

    // Project picker
    if app.picker_open {
        handle_picker_key(app, key);
        return;
    }

    // Image viewer
    if app.viewer_open {
        handle_viewer_key(app, key);
        return;
    }

    // Edit mode: keys go to the focused TextArea
    if app.editing {
        handle_edit_key(app, key);
        return;
    }

    // Quit
    if key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match key.code {
        // Tab switching
        KeyCode::Tab | KeyCode::BackTab => {
            app.active_tab = match app.active_tab {
                app::ActiveTab::Source => app::ActiveTab::Storyboard,
                app::ActiveTab::Storyboard => app::ActiveTab::Source,
            };
        }
        KeyCode::Char('1') => app.active_tab = app::ActiveTab::Source,
        KeyCode::Char('2') => app.active_tab = app::ActiveTab::Storyboard,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => navigate_down(app),
        KeyCode::Char('k') | KeyCode::Up => navigate_up(app),
        KeyCode::Char('h') | KeyCode::Left => pane_left(app),
        KeyCode::Char('l') | KeyCode::Right => pane_right(app),
        KeyCode::Enter => {
            if app.active_tab == app::ActiveTab::Storyboard
                && app.storyboard_pane == app::StoryboardPane::List
            {
                app.storyboard_pane = app::StoryboardPane::Page;
            }
        }

        // Page jumps
        KeyCode::Char('g') => {
            if app.active_tab == app::ActiveTab::Storyboard {
                app.first_page();
            }
        }
        KeyCode::Char('G') => {
            if app.active_tab == app::ActiveTab::Storyboard {
                app.last_page();
            }
        }
        KeyCode::Char('n') => {
            if app.active_tab == app::ActiveTab::Storyboard {
                app.next_page();
            }
        }
        KeyCode::Char('p') => {
            if app.active_tab == app::ActiveTab::Storyboard {
                app.prev_page();
            }
        }

        // Editing
        KeyCode::Char('e') => app.start_edit(),

        // Generation and persistence
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.save_storyboard()
        }
        KeyCode::Char('s') => app.generate_storyboard(),
        KeyCode::Char('i') => app.generate_current_image(),
        KeyCode::Char('I') => app.request_generate_all(),
        KeyCode::Char('v') => app.open_viewer(),
        KeyCode::Char('y') => app.copy_current_page(),
        KeyCode::Char('w') => app.save_storyboard(),
        KeyCode::Char('o') => app.open_project_picker(),
        KeyCode::Char('r') => app.start_rename(),
        KeyCode::Char('S') => app.open_settings(),

        _ => {}
    }
}

fn navigate_down(app: &mut App) {
    match app.active_tab {
        app::ActiveTab::Source => {
            app.source_editor.scroll((1, 0));
        }
        app::ActiveTab::Storyboard => match app.storyboard_pane {
            app::StoryboardPane::List => app.next_page(),
            app::StoryboardPane::Header => {
                app.header_editor.scroll((1, 0));
            }
            app::StoryboardPane::Page => {
                app.page_editor.scroll((1, 0));
            }
        },
    }
}

fn navigate_up(app: &mut App) {
    match app.active_tab {
        app::ActiveTab::Source => {
            app.source_editor.scroll((-1, 0));
        }
        app::ActiveTab::Storyboard => match app.storyboard_pane {
            app::StoryboardPane::List => app.prev_page(),
            app::StoryboardPane::Header => {
                app.header_editor.scroll((-1, 0));
            }
            app::StoryboardPane::Page => {
                app.page_editor.scroll((-1, 0));
            }
        },
    }
}

fn pane_left(app: &mut App) {
    if app.active_tab != app::ActiveTab::Storyboard {
        return;
    }
    app.storyboard_pane = match app.storyboard_pane {
        app::StoryboardPane::Page => app::StoryboardPane::Header,
        _ => app::StoryboardPane::List,
    };
}

fn pane_right(app: &mut App) {
    if app.active_tab != app::ActiveTab::Storyboard {
        return;
    }
    app.storyboard_pane = match app.storyboard_pane {
        app::StoryboardPane::List => app::StoryboardPane::Header,
        _ => app::StoryboardPane::Page,
    };
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.stop_edit();
            app.save_storyboard();
        }
        KeyCode::Esc => {
            app.stop_edit();
        }
        _ => {
            // Pass key to the focused TextArea
            app.active_editor().input(key);
        }
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_settings(),
        KeyCode::Enter => app.save_settings(),
        KeyCode::Tab | KeyCode::BackTab => {
            app.settings_field = match app.settings_field {
                app::SettingsField::ApiKey => app::SettingsField::Model,
                app::SettingsField::Model => app::SettingsField::ApiKey,
            };
        }
        KeyCode::Left if app.settings_field == app::SettingsField::Model => {
            app.settings_cycle_model(false)
        }
        KeyCode::Right if app.settings_field == app::SettingsField::Model => {
            app.settings_cycle_model(true)
        }
        KeyCode::Backspace => match app.settings_field {
            app::SettingsField::ApiKey => {
                app.settings_api_key.pop();
            }
            app::SettingsField::Model => {
                app.settings_model.pop();
            }
        },
        KeyCode::Char(c) => match app.settings_field {
            app::SettingsField::ApiKey => app.settings_api_key.push(c),
            app::SettingsField::Model => app.settings_model.push(c),
        },
        _ => {}
    }
}

fn handle_title_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_rename(),
        KeyCode::Enter => app.commit_rename(),
        KeyCode::Backspace => {
            app.title_input.pop();
        }
        KeyCode::Char(c) => {
            app.title_input.push(c);
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.picker_index + 1 < app.picker_items.len() {
                app.picker_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.picker_index = app.picker_index.saturating_sub(1);
        }
        KeyCode::Enter => app.load_selected_project(),
        KeyCode::Esc => app.picker_open = false,
        _ => {}
    }
}

fn handle_viewer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Esc | KeyCode::Char('v') => app.close_viewer(),
        _ => {}
    }
}
