use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::storyboard::StoryboardDocument;

/// Write the document as human-readable JSON (2-space indent, non-ASCII
/// left unescaped).
pub fn save_document(path: &Path, doc: &StoryboardDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(doc).context("Failed to serialize storyboard")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Read a document back; missing fields fall back to their defaults.
pub fn load_document(path: &Path) -> Result<StoryboardDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Persist decoded image bytes, creating the parent directory if needed.
pub fn save_image(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::storyboard::Page;

    fn sample() -> StoryboardDocument {
        StoryboardDocument {
            header: "제목: 달빛\n분위기: 잔잔함".to_string(),
            pages: vec![
                Page::new("Page 1", "소년이 골목을 걷는다."),
                Page::new("Page 2", "고양이가 나타난다."),
            ],
            project_title: "달빛".to_string(),
        }
    }

    #[test]
    fn document_round_trips_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storyboard.json");
        let doc = sample();
        save_document(&path, &doc).unwrap();
        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn saved_json_is_pretty_and_keeps_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storyboard.json");
        save_document(&path, &sample()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"header\""));
        assert!(raw.contains("달빛"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn missing_fields_load_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storyboard.json");
        fs::write(&path, r#"{"header": "only header"}"#).unwrap();
        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.header, "only header");
        assert!(loaded.pages.is_empty());
        assert_eq!(loaded.project_title, "");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storyboard.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_document(&path).is_err());
        assert!(load_document(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn image_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proj").join("images").join("page_001.png");
        save_image(&path, &[1, 2, 3]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }
}
