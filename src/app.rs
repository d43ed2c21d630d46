use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tui_textarea::{CursorMove, TextArea};

use crate::config::{self, ProjectConfig};
use crate::data::{clipboard, gemini, parser, projects, prompt, store};
use crate::event::AppEvent;
use crate::model::image::ImageInfo;
use crate::model::storyboard::StoryboardDocument;

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveTab {
    Source,
    Storyboard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoryboardPane {
    List,
    Header,
    Page,
}

/// Which settings field receives typed input.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsField {
    ApiKey,
    Model,
}

/// The single in-flight generation, if any. Starting a second one is
/// rejected until the worker's terminal event arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum RunningTask {
    Storyboard,
    PageImage(usize),
    BatchImages { total: usize },
}

pub struct App {
    pub should_quit: bool,
    pub active_tab: ActiveTab,
    pub show_help: bool,
    pub dirty: bool,

    // Config
    pub config: ProjectConfig,
    pub config_path: PathBuf,
    pub projects_root: PathBuf,

    // Document
    pub document: StoryboardDocument,
    pub current_page: usize,
    pub unsaved_changes: bool,
    pub current_image: Option<ImageInfo>,

    // Editable surfaces. The page editor always shows the combined view
    // (preamble + header + title + content); edits are reconciled back into
    // the document before navigation or persistence.
    pub source_editor: TextArea<'static>,
    pub header_editor: TextArea<'static>,
    pub page_editor: TextArea<'static>,
    pub editing: bool,
    pub storyboard_pane: StoryboardPane,

    // Background task
    pub task: Option<RunningTask>,
    pub batch_success: usize,
    pub batch_fail: usize,
    pub batch_last_ok: Option<usize>,
    pub event_tx: Option<mpsc::Sender<AppEvent>>,

    // Settings modal
    pub settings_open: bool,
    pub settings_field: SettingsField,
    pub settings_api_key: String,
    pub settings_model: String,

    // Project title rename
    pub title_editing: bool,
    pub title_input: String,

    // Load picker
    pub picker_open: bool,
    pub picker_items: Vec<String>,
    pub picker_index: usize,

    // Confirmations and overlays
    pub confirm_quit: bool,
    pub confirm_batch: bool,
    pub viewer_open: bool,
    pub error_modal: Option<String>,

    // Status
    pub status: Option<String>,
    pub status_set_at: Instant,
    pub last_error: Option<String>,
}

fn text_editor(text: &str) -> TextArea<'static> {
    let mut editor = TextArea::default();
    editor.insert_str(text);
    editor.move_cursor(CursorMove::Top);
    editor.move_cursor(CursorMove::Head);
    editor
}

impl App {
    pub fn new(projects_root: PathBuf, config_path: PathBuf) -> Self {
        let config = config::load_config(&config_path);

        App {
            should_quit: false,
            active_tab: ActiveTab::Source,
            show_help: false,
            dirty: true,

            config,
            config_path,
            projects_root,

            document: StoryboardDocument::default(),
            current_page: 0,
            unsaved_changes: false,
            current_image: None,

            source_editor: TextArea::default(),
            header_editor: TextArea::default(),
            page_editor: TextArea::default(),
            editing: false,
            storyboard_pane: StoryboardPane::Page,

            task: None,
            batch_success: 0,
            batch_fail: 0,
            batch_last_ok: None,
            event_tx: None,

            settings_open: false,
            settings_field: SettingsField::ApiKey,
            settings_api_key: String::new(),
            settings_model: String::new(),

            title_editing: false,
            title_input: String::new(),

            picker_open: false,
            picker_items: Vec::new(),
            picker_index: 0,

            confirm_quit: false,
            confirm_batch: false,
            viewer_open: false,
            error_modal: None,

            status: None,
            status_set_at: Instant::now(),
            last_error: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Transient status-line message; cleared after a few ticks.
    pub fn set_status(&mut self, msg: &str) {
        self.status = Some(msg.to_string());
        self.status_set_at = Instant::now();
    }

    pub fn clear_stale_status(&mut self) {
        if self.status.is_some()
            && self.status_set_at.elapsed().as_secs() >= config::STATUS_TTL_SECS
        {
            self.status = None;
        }
    }

    /// Full error text goes into the copyable modal, first line into the
    /// status bar.
    pub fn report_error(&mut self, message: String) {
        self.last_error = Some(message.lines().next().unwrap_or("").to_string());
        self.error_modal = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error_modal = None;
    }

    pub fn copy_error(&mut self) {
        if let Some(text) = self.error_modal.clone() {
            match clipboard::copy_to_clipboard(&text) {
                Ok(()) => self.set_status("Error text copied to clipboard"),
                Err(e) => self.last_error = Some(format!("Clipboard: {}", e)),
            }
        }
    }

    // --- Editable surfaces ---

    pub fn set_source_text(&mut self, text: &str) {
        self.source_editor = text_editor(text);
    }

    pub fn source_text(&self) -> String {
        self.source_editor.lines().join("\n")
    }

    /// Rebuild the header and combined page view from the document. Any
    /// un-reconciled edits in those surfaces are dropped.
    pub fn refresh_editors(&mut self) {
        self.header_editor = text_editor(&self.document.header);
        let combined = match self.document.pages.get(self.current_page) {
            Some(page) => prompt::compose_page_view(&self.document.header, page),
            None => String::new(),
        };
        self.page_editor = text_editor(&combined);
        self.refresh_current_image();
    }

    /// The editor the current tab/pane routes keys to while editing.
    pub fn active_editor(&mut self) -> &mut TextArea<'static> {
        match self.active_tab {
            ActiveTab::Source => &mut self.source_editor,
            ActiveTab::Storyboard => match self.storyboard_pane {
                StoryboardPane::Header => &mut self.header_editor,
                _ => &mut self.page_editor,
            },
        }
    }

    pub fn start_edit(&mut self) {
        match self.active_tab {
            ActiveTab::Source => self.editing = true,
            ActiveTab::Storyboard => {
                if self.storyboard_pane != StoryboardPane::List {
                    self.editing = true;
                }
            }
        }
    }

    pub fn stop_edit(&mut self) {
        self.editing = false;
    }

    // --- Reconciliation and navigation ---

    /// Fold the header editor and combined page view back into the document.
    /// Runs before every navigation, save, copy, and image call. A no-op when
    /// there are no pages, mirroring the original editor contract.
    pub fn reconcile_current_page(&mut self) {
        if self.document.pages.is_empty() {
            return;
        }

        let header = self.header_editor.lines().join("\n").trim().to_string();
        if header != self.document.header {
            self.document.header = header;
            self.unsaved_changes = true;
        }

        let combined = self.page_editor.lines().join("\n");
        let idx = self.current_page.min(self.document.pages.len() - 1);
        let updated =
            prompt::reconcile_page(&combined, &self.document.header, &self.document.pages[idx]);
        if updated != self.document.pages[idx] {
            self.document.pages[idx] = updated;
            self.unsaved_changes = true;
        }
    }

    /// Move to a page. Out-of-range is a silent no-op; the outgoing page is
    /// reconciled first.
    pub fn goto_page(&mut self, index: usize) {
        if index >= self.document.pages.len() || index == self.current_page {
            return;
        }
        self.reconcile_current_page();
        self.current_page = index;
        self.refresh_editors();
    }

    pub fn next_page(&mut self) {
        self.goto_page(self.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 0 {
            self.goto_page(self.current_page - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.goto_page(0);
    }

    pub fn last_page(&mut self) {
        if !self.document.pages.is_empty() {
            self.goto_page(self.document.pages.len() - 1);
        }
    }

    fn current_image_path(&self) -> Option<PathBuf> {
        if self.document.pages.is_empty() {
            return None;
        }
        let title = self.document.project_title.trim();
        if title.is_empty() {
            return None;
        }
        let dir = self.projects_root.join(projects::sanitize_title(title));
        Some(projects::page_image_path(&dir, self.current_page + 1))
    }

    pub fn refresh_current_image(&mut self) {
        self.current_image = self
            .current_image_path()
            .and_then(|p| projects::image_info(&p));
    }

    // --- Project resolution ---

    /// Resolve (creating if needed) the project directory. An empty title is
    /// auto-named `unnamed<N>` and written back so later calls reuse it.
    fn resolve_project_dir(&mut self) -> anyhow::Result<PathBuf> {
        if self.document.project_title.trim().is_empty() {
            self.document.project_title = projects::next_unnamed_title(&self.projects_root);
            self.unsaved_changes = true;
        }
        projects::ensure_project_dir(&self.projects_root, &self.document.project_title)
    }

    // --- Generation ---

    pub fn generate_storyboard(&mut self) {
        if self.task.is_some() {
            self.set_status("A generation task is already running");
            return;
        }
        if !self.config.has_api_key() {
            self.set_status("Set a Gemini API key first (S)");
            return;
        }
        let source = self.source_text().trim().to_string();
        if source.is_empty() {
            self.set_status("Paste novel text into the Source tab first");
            return;
        }
        let Some(tx) = self.event_tx.clone() else {
            return;
        };

        let api_key = self.config.api_key.clone();
        let model = self.config.model.clone();
        self.task = Some(RunningTask::Storyboard);
        self.set_status("Generating storyboard...");

        thread::spawn(move || {
            let result = gemini::generate_storyboard(&api_key, &model, &source);
            let _ = tx.send(AppEvent::StoryboardGenerated(result));
        });
    }

    pub fn handle_storyboard_generated(&mut self, result: Result<String, String>) {
        self.task = None;
        match result {
            Ok(text) => {
                self.last_error = None;
                let (header, pages) = parser::split_storyboard(&text);
                self.document.header = header;
                self.document.pages = pages;
                self.current_page = 0;
                self.unsaved_changes = true;
                self.refresh_editors();
                self.active_tab = ActiveTab::Storyboard;
                self.storyboard_pane = StoryboardPane::Page;
                self.set_status(&format!(
                    "Storyboard ready: {} pages",
                    self.document.pages.len()
                ));
            }
            Err(e) => self.report_error(format!("Storyboard generation failed: {}", e)),
        }
    }

    pub fn generate_current_image(&mut self) {
        if self.task.is_some() {
            self.set_status("A generation task is already running");
            return;
        }
        if !self.config.has_api_key() {
            self.set_status("Set a Gemini API key first (S)");
            return;
        }
        if self.document.pages.is_empty() {
            self.set_status("No pages to illustrate");
            return;
        }

        self.reconcile_current_page();
        // The prompt is the combined view exactly as displayed, even when
        // reconciliation declined the edit.
        let prompt_text = self.page_editor.lines().join("\n").trim().to_string();
        let page = self.current_page;
        let path = match self.resolve_project_dir() {
            Ok(dir) => projects::page_image_path(&dir, page + 1),
            Err(e) => {
                self.report_error(format!("{:#}", e));
                return;
            }
        };
        let Some(tx) = self.event_tx.clone() else {
            return;
        };

        let api_key = self.config.api_key.clone();
        self.task = Some(RunningTask::PageImage(page));
        self.set_status(&format!("Generating image for page {}...", page + 1));

        thread::spawn(move || {
            let result = match gemini::generate_image(&api_key, &prompt_text) {
                Ok(bytes) => match store::save_image(&path, &bytes) {
                    Ok(()) => Ok(path),
                    Err(e) => Err(format!("{:#}", e)),
                },
                Err(e) => Err(e),
            };
            let _ = tx.send(AppEvent::PageImageGenerated { page, result });
        });
    }

    pub fn handle_page_image_generated(&mut self, page: usize, result: Result<PathBuf, String>) {
        self.task = None;
        match result {
            Ok(path) => {
                self.last_error = None;
                if page == self.current_page {
                    self.current_image = projects::image_info(&path);
                }
                self.set_status(&format!("Image saved: {}", path.display()));
            }
            Err(e) => self.report_error(format!("Image generation failed: {}", e)),
        }
    }

    /// Ask before a batch run; it can take minutes.
    pub fn request_generate_all(&mut self) {
        if self.task.is_some() {
            self.set_status("A generation task is already running");
            return;
        }
        if !self.config.has_api_key() {
            self.set_status("Set a Gemini API key first (S)");
            return;
        }
        if self.document.pages.is_empty() {
            self.set_status("No pages to illustrate");
            return;
        }
        self.reconcile_current_page();
        self.confirm_batch = true;
    }

    pub fn cancel_generate_all(&mut self) {
        self.confirm_batch = false;
    }

    pub fn start_generate_all(&mut self) {
        self.confirm_batch = false;
        let dir = match self.resolve_project_dir() {
            Ok(d) => d,
            Err(e) => {
                self.report_error(format!("{:#}", e));
                return;
            }
        };
        let Some(tx) = self.event_tx.clone() else {
            return;
        };

        let api_key = self.config.api_key.clone();
        let header = self.document.header.clone();
        let pages = self.document.pages.clone();
        let total = pages.len();

        self.task = Some(RunningTask::BatchImages { total });
        self.batch_success = 0;
        self.batch_fail = 0;
        self.batch_last_ok = None;
        self.set_status(&format!("Generating {} page images...", total));

        thread::spawn(move || {
            let mut success = 0usize;
            let mut fail = 0usize;
            for (i, page) in pages.iter().enumerate() {
                let prompt_text = prompt::compose_batch_prompt(&header, page);
                let path = projects::page_image_path(&dir, i + 1);
                let result = match gemini::generate_image(&api_key, &prompt_text) {
                    Ok(bytes) => match store::save_image(&path, &bytes) {
                        Ok(()) => Ok(path),
                        Err(e) => Err(format!("{:#}", e)),
                    },
                    Err(e) => Err(e),
                };
                match result {
                    Ok(_) => success += 1,
                    Err(_) => fail += 1,
                }
                let _ = tx.send(AppEvent::BatchImageProgress { page: i, result });
            }
            let _ = tx.send(AppEvent::BatchImagesFinished { success, fail });
        });
    }

    pub fn handle_batch_image_progress(&mut self, page: usize, result: Result<PathBuf, String>) {
        match result {
            Ok(path) => {
                self.batch_success += 1;
                self.batch_last_ok = Some(page);
                if page == self.current_page {
                    self.current_image = projects::image_info(&path);
                }
            }
            Err(e) => {
                self.batch_fail += 1;
                self.last_error = Some(format!(
                    "Page {}: {}",
                    page + 1,
                    e.lines().next().unwrap_or("")
                ));
            }
        }
        if let Some(RunningTask::BatchImages { total }) = self.task {
            self.set_status(&format!(
                "Generating images... {}/{}",
                self.batch_success + self.batch_fail,
                total
            ));
        }
    }

    pub fn handle_batch_images_finished(&mut self, success: usize, fail: usize) {
        self.task = None;
        if fail == 0 {
            self.last_error = None;
        }
        self.set_status(&format!(
            "Image generation complete: {} succeeded, {} failed",
            success, fail
        ));
        if let Some(page) = self.batch_last_ok {
            self.goto_page(page);
            self.refresh_current_image();
        }
    }

    // --- Persistence ---

    pub fn save_storyboard(&mut self) {
        if self.document.is_empty() {
            self.set_status("Nothing to save yet");
            return;
        }
        self.reconcile_current_page();
        let path = match self.resolve_project_dir() {
            Ok(dir) => projects::document_path(&dir),
            Err(e) => {
                self.report_error(format!("{:#}", e));
                return;
            }
        };
        match store::save_document(&path, &self.document) {
            Ok(()) => {
                self.unsaved_changes = false;
                self.last_error = None;
                self.set_status(&format!("Saved {}", path.display()));
            }
            Err(e) => self.report_error(format!("{:#}", e)),
        }
    }

    pub fn open_project_picker(&mut self) {
        let items = projects::list_projects(&self.projects_root);
        if items.is_empty() {
            self.set_status("No saved projects found");
            return;
        }
        self.picker_items = items;
        self.picker_index = 0;
        self.picker_open = true;
    }

    pub fn load_selected_project(&mut self) {
        if self.picker_items.is_empty() {
            self.picker_open = false;
            return;
        }
        let idx = self.picker_index.min(self.picker_items.len() - 1);
        let name = self.picker_items[idx].clone();
        self.picker_open = false;
        self.load_project(&name);
    }

    /// Load `storyboard.json` from a project directory. On failure the
    /// in-memory document is left untouched.
    pub fn load_project(&mut self, name: &str) {
        let path = projects::document_path(&self.projects_root.join(name));
        match store::load_document(&path) {
            Ok(doc) => {
                self.document = doc;
                self.current_page = 0;
                self.unsaved_changes = false;
                self.last_error = None;
                self.refresh_editors();
                self.active_tab = ActiveTab::Storyboard;
                self.storyboard_pane = StoryboardPane::Page;
                self.set_status(&format!("Loaded {}", path.display()));
            }
            Err(e) => self.report_error(format!("{:#}", e)),
        }
    }

    // --- Clipboard ---

    pub fn copy_current_page(&mut self) {
        if self.document.pages.is_empty() {
            self.set_status("No page to copy");
            return;
        }
        self.reconcile_current_page();
        let text = self.page_editor.lines().join("\n").trim().to_string();
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.set_status(&format!(
                "Page {} copied to clipboard",
                self.current_page + 1
            )),
            Err(e) => self.report_error(format!("Clipboard copy failed: {}", e)),
        }
    }

    // --- Settings modal ---

    pub fn open_settings(&mut self) {
        self.settings_api_key = self.config.api_key.clone();
        self.settings_model = self.config.model.clone();
        self.settings_field = SettingsField::ApiKey;
        self.settings_open = true;
    }

    pub fn cancel_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn save_settings(&mut self) {
        self.config.api_key = self.settings_api_key.trim().to_string();
        let model = self.settings_model.trim();
        self.config.model = if model.is_empty() {
            config::DEFAULT_MODEL.to_string()
        } else {
            model.to_string()
        };
        self.settings_open = false;
        match config::save_config(&self.config_path, &self.config) {
            Ok(()) => self.set_status("Settings saved"),
            Err(e) => self.report_error(format!("{:#}", e)),
        }
    }

    pub fn settings_cycle_model(&mut self, forward: bool) {
        let presets = config::MODEL_PRESETS;
        let next = match (
            presets.iter().position(|m| *m == self.settings_model),
            forward,
        ) {
            (Some(i), true) => (i + 1) % presets.len(),
            (Some(i), false) => (i + presets.len() - 1) % presets.len(),
            (None, _) => 0,
        };
        self.settings_model = presets[next].to_string();
    }

    // --- Project title rename ---

    pub fn start_rename(&mut self) {
        self.title_input = self.document.project_title.clone();
        self.title_editing = true;
    }

    pub fn commit_rename(&mut self) {
        let title = self.title_input.trim().to_string();
        if title != self.document.project_title {
            self.document.project_title = title;
            self.unsaved_changes = true;
            self.refresh_current_image();
        }
        self.title_editing = false;
    }

    pub fn cancel_rename(&mut self) {
        self.title_editing = false;
        self.title_input.clear();
    }

    // --- Image viewer ---

    pub fn open_viewer(&mut self) {
        if self.document.pages.is_empty() {
            self.set_status("No page selected");
            return;
        }
        self.refresh_current_image();
        self.viewer_open = true;
    }

    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }

    // --- Quit ---

    pub fn request_quit(&mut self) {
        self.reconcile_current_page();
        if self.unsaved_changes && !self.document.is_empty() {
            self.confirm_quit = true;
        } else {
            self.should_quit = true;
        }
    }

    pub fn quit_saving(&mut self) {
        self.confirm_quit = false;
        self.save_storyboard();
        // Stay open if the save failed so the error is visible.
        if !self.unsaved_changes {
            self.should_quit = true;
        }
    }

    pub fn quit_without_saving(&mut self) {
        self.confirm_quit = false;
        self.should_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::storyboard::Page;

    fn test_app() -> App {
        let root = tempfile::tempdir().unwrap();
        let config_path = root.path().join("storyboard_config.json");
        App::new(root.path().join("projects"), config_path)
    }

    fn app_with_pages(n: usize) -> App {
        let mut app = test_app();
        app.document.header = "mood notes".to_string();
        app.document.pages = (1..=n)
            .map(|i| Page::new(format!("Page {}", i), format!("content {}", i)))
            .collect();
        app.refresh_editors();
        app
    }

    #[test]
    fn out_of_range_navigation_is_a_no_op() {
        let mut app = app_with_pages(3);
        app.goto_page(1);
        assert_eq!(app.current_page, 1);
        app.goto_page(99);
        assert_eq!(app.current_page, 1);
        app.last_page();
        assert_eq!(app.current_page, 2);
        app.next_page();
        assert_eq!(app.current_page, 2);
    }

    #[test]
    fn navigation_reconciles_the_outgoing_page() {
        let mut app = app_with_pages(2);
        let edited = format!(
            "{}\n\nmood notes\n\nPage 1\n\nrewritten content",
            prompt::PAGE_VIEW_PREAMBLE
        );
        app.page_editor = text_editor(&edited);
        app.goto_page(1);
        assert_eq!(app.document.pages[0].content, "rewritten content");
        assert!(app.unsaved_changes);
    }

    #[test]
    fn header_edits_sync_before_the_combined_view_is_decomposed() {
        let mut app = app_with_pages(1);
        app.header_editor = text_editor("different header");
        app.reconcile_current_page();
        // The combined view still carries the old header, so the page edit
        // is declined while the header itself updates.
        assert_eq!(app.document.header, "different header");
        assert_eq!(app.document.pages[0].content, "content 1");
    }

    #[test]
    fn reconcile_without_pages_is_a_no_op() {
        let mut app = test_app();
        app.header_editor = text_editor("typed into header");
        app.reconcile_current_page();
        assert_eq!(app.document.header, "");
        assert!(!app.unsaved_changes);
    }

    #[test]
    fn batch_tally_counts_failures_without_stopping() {
        let mut app = app_with_pages(3);
        app.task = Some(RunningTask::BatchImages { total: 3 });

        app.handle_batch_image_progress(0, Ok(PathBuf::from("images/page_001.png")));
        app.handle_batch_image_progress(1, Err("HTTP 500: boom".to_string()));
        app.handle_batch_image_progress(2, Ok(PathBuf::from("images/page_003.png")));
        assert_eq!(app.batch_success, 2);
        assert_eq!(app.batch_fail, 1);

        app.handle_batch_images_finished(2, 1);
        assert!(app.task.is_none());
        let status = app.status.clone().unwrap_or_default();
        assert!(status.contains("2 succeeded"));
        assert!(status.contains("1 failed"));
        // Ends on the last successfully generated page.
        assert_eq!(app.current_page, 2);
    }

    #[test]
    fn quit_prompts_only_with_unsaved_changes() {
        let mut app = app_with_pages(1);
        app.unsaved_changes = false;
        app.request_quit();
        assert!(app.should_quit);

        let mut app = app_with_pages(1);
        app.unsaved_changes = true;
        app.request_quit();
        assert!(!app.should_quit);
        assert!(app.confirm_quit);
        app.cancel_quit();
        assert!(!app.confirm_quit);
    }

    #[test]
    fn storyboard_result_replaces_document_and_resets_position() {
        let mut app = app_with_pages(2);
        app.current_page = 1;
        app.task = Some(RunningTask::Storyboard);
        app.handle_storyboard_generated(Ok("new header\nPage 1\nfresh".to_string()));
        assert!(app.task.is_none());
        assert_eq!(app.document.header, "new header");
        assert_eq!(app.document.pages.len(), 1);
        assert_eq!(app.current_page, 0);
        assert!(app.unsaved_changes);
        assert_eq!(app.active_tab, ActiveTab::Storyboard);
    }

    #[test]
    fn failed_generation_opens_the_error_modal() {
        let mut app = test_app();
        app.task = Some(RunningTask::Storyboard);
        app.handle_storyboard_generated(Err("HTTP 429: quota exceeded\nraw body".to_string()));
        assert!(app.task.is_none());
        let modal = app.error_modal.clone().unwrap();
        assert!(modal.contains("quota exceeded"));
        assert!(modal.contains("raw body"));
        assert_eq!(
            app.last_error.as_deref(),
            Some("Storyboard generation failed: HTTP 429: quota exceeded")
        );
    }

    #[test]
    fn rename_marks_unsaved() {
        let mut app = app_with_pages(1);
        app.start_rename();
        app.title_input = "달빛 소나타".to_string();
        app.commit_rename();
        assert_eq!(app.document.project_title, "달빛 소나타");
        assert!(app.unsaved_changes);
        assert!(!app.title_editing);
    }

    #[test]
    fn model_cycling_walks_presets() {
        let mut app = test_app();
        app.settings_model = config::MODEL_PRESETS[0].to_string();
        app.settings_cycle_model(true);
        assert_eq!(app.settings_model, config::MODEL_PRESETS[1]);
        app.settings_cycle_model(false);
        assert_eq!(app.settings_model, config::MODEL_PRESETS[0]);
        app.settings_model = "custom-model".to_string();
        app.settings_cycle_model(true);
        assert_eq!(app.settings_model, config::MODEL_PRESETS[0]);
    }
}
