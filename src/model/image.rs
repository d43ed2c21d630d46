use std::path::PathBuf;

use chrono::{DateTime, Local};

/// Display record for a generated page image. Computed from file metadata on
/// demand, never persisted.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Local>>,
}

impl ImageInfo {
    pub fn display_size(&self) -> String {
        let kb = self.size_bytes as f64 / 1024.0;
        if kb >= 1024.0 {
            format!("{:.1} MB", kb / 1024.0)
        } else {
            format!("{:.0} KB", kb)
        }
    }

    pub fn display_modified(&self) -> String {
        match self.modified {
            Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            None => "-".to_string(),
        }
    }
}
