use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use regex::Regex;

use crate::model::image::ImageInfo;

pub const DOCUMENT_FILE: &str = "storyboard.json";
pub const IMAGES_DIR: &str = "images";

/// Make a project title safe to use as a directory name. Path separators and
/// characters illegal on common filesystems become '_'; trailing dots and
/// spaces are dropped. A title that sanitizes away entirely becomes
/// "untitled" so the project still gets a directory.
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim_end_matches(|c| c == '.' || c == ' ');
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Next auto-generated title: `unnamed<N>` where N is one past the highest
/// numeric suffix among existing `unnamed<digits>` directories (1 when none).
pub fn next_unnamed_title(projects_root: &Path) -> String {
    let pattern = Regex::new(r"^unnamed(\d+)$").unwrap();
    let mut max_num: u64 = 0;

    if let Ok(entries) = fs::read_dir(projects_root) {
        for entry in entries.flatten() {
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(caps) = pattern.captures(name) {
                if let Ok(num) = caps[1].parse::<u64>() {
                    max_num = max_num.max(num);
                }
            }
        }
    }

    format!("unnamed{}", max_num + 1)
}

/// Resolve (and create if needed) the project directory for a title.
/// Idempotent when the directory already exists.
pub fn ensure_project_dir(projects_root: &Path, title: &str) -> Result<PathBuf> {
    let dir = projects_root.join(sanitize_title(title));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create project directory {}", dir.display()))?;
    Ok(dir)
}

pub fn document_path(project_dir: &Path) -> PathBuf {
    project_dir.join(DOCUMENT_FILE)
}

/// Deterministic per-page image path: `images/page_<NNN>.png`, 1-based page
/// number zero-padded to three digits.
pub fn page_image_path(project_dir: &Path, page_number: usize) -> PathBuf {
    project_dir
        .join(IMAGES_DIR)
        .join(format!("page_{page_number:03}.png"))
}

/// Directory names under the projects root, sorted, for the load picker.
pub fn list_projects(projects_root: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(projects_root) {
        Ok(entries) => entries
            .flatten()
            .filter(|e| e.path().is_dir())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

/// Probe an image file for display. None when the file does not exist.
pub fn image_info(path: &Path) -> Option<ImageInfo> {
    let meta = fs::metadata(path).ok()?;
    Some(ImageInfo {
        path: path.to_path_buf(),
        size_bytes: meta.len(),
        modified: meta.modified().ok().map(DateTime::<Local>::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_naming_uses_max_plus_one() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("unnamed1")).unwrap();
        fs::create_dir(root.path().join("unnamed3")).unwrap();
        assert_eq!(next_unnamed_title(root.path()), "unnamed4");
    }

    #[test]
    fn auto_naming_starts_at_one() {
        let root = tempfile::tempdir().unwrap();
        assert_eq!(next_unnamed_title(root.path()), "unnamed1");
        assert_eq!(next_unnamed_title(&root.path().join("missing")), "unnamed1");
    }

    #[test]
    fn auto_naming_ignores_non_matching_names() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("unnamed2")).unwrap();
        fs::create_dir(root.path().join("unnamed3backup")).unwrap();
        fs::create_dir(root.path().join("unnamed")).unwrap();
        fs::create_dir(root.path().join("drafts")).unwrap();
        fs::write(root.path().join("unnamed9"), b"a file, not a dir").unwrap();
        assert_eq!(next_unnamed_title(root.path()), "unnamed3");
    }

    #[test]
    fn sanitize_replaces_hostile_characters() {
        assert_eq!(sanitize_title("a/b:c*d"), "a_b_c_d");
        assert_eq!(sanitize_title("  달빛 소나타  "), "달빛 소나타");
        assert_eq!(sanitize_title("name.."), "name");
        assert_eq!(sanitize_title("..."), "untitled");
        assert_eq!(sanitize_title("tab\there"), "tab_here");
    }

    #[test]
    fn project_dir_creation_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let a = ensure_project_dir(root.path(), "달빛: 소나타").unwrap();
        let b = ensure_project_dir(root.path(), "달빛: 소나타").unwrap();
        assert_eq!(a, b);
        assert!(a.is_dir());
        assert!(a.ends_with("달빛_ 소나타"));
    }

    #[test]
    fn image_paths_are_zero_padded() {
        let dir = Path::new("projects/demo");
        assert_eq!(
            page_image_path(dir, 7),
            Path::new("projects/demo/images/page_007.png")
        );
        assert_eq!(
            page_image_path(dir, 123),
            Path::new("projects/demo/images/page_123.png")
        );
    }

    #[test]
    fn listing_skips_files_and_sorts() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("zeta")).unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        fs::write(root.path().join("stray.json"), b"{}").unwrap();
        assert_eq!(list_projects(root.path()), vec!["alpha", "zeta"]);
    }

    #[test]
    fn image_info_reads_metadata() {
        let root = tempfile::tempdir().unwrap();
        let path = root.path().join("page_001.png");
        fs::write(&path, vec![0u8; 2048]).unwrap();
        let info = image_info(&path).unwrap();
        assert_eq!(info.size_bytes, 2048);
        assert!(image_info(&root.path().join("missing.png")).is_none());
    }
}
