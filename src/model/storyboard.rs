use serde::{Deserialize, Serialize};

/// One storyboard page: the marker text that introduced it and the script
/// between that marker and the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Page {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Page {
            title: title.into(),
            content: content.into(),
        }
    }

    /// First content line, for compact list display.
    pub fn summary(&self) -> &str {
        self.content.lines().next().unwrap_or("").trim()
    }
}

/// The whole storyboard: header prompt, ordered pages, and the project title
/// it is saved under. Pages may be empty (header-only), never null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryboardDocument {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub project_title: String,
}

impl StoryboardDocument {
    /// Nothing to save or render yet.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.pages.is_empty()
    }

    /// 1-based page label, e.g. "Page 3 / 14". Index is clamped by callers.
    pub fn page_label(&self, index: usize) -> String {
        if self.pages.is_empty() {
            "Page 0 / 0".to_string()
        } else {
            format!("Page {} / {}", index + 1, self.pages.len())
        }
    }
}
