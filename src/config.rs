use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "storyboard_config.json";

/// Default projects root, resolved relative to the working directory.
pub const PROJECTS_DIR: &str = "projects";

/// Model used when the config file has none.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Models offered by the settings modal (free-form input is still allowed).
pub const MODEL_PRESETS: [&str; 3] = [
    "gemini-3-pro-preview",
    "gemini-2.0-flash-exp",
    "gemini-2.5-pro",
];

/// How often the tick event fires (ms).
pub const TICK_RATE_MS: u64 = 250;

/// How long a transient status message stays on the status bar (secs).
pub const STATUS_TTL_SECS: u64 = 6;

// ---------------------------------------------------------------------------
// API config (storyboard_config.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            api_key: String::new(),
            model: default_model(),
        }
    }
}

impl ProjectConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Load config from the given path.
/// Returns the default config if the file doesn't exist or can't be parsed.
pub fn load_config(path: &Path) -> ProjectConfig {
    if path.exists() {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        ProjectConfig::default()
    }
}

/// Write config as pretty JSON, creating parent directories if needed.
pub fn save_config(path: &Path, config: &ProjectConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(config).context("serialize config")?;
    std::fs::write(path, json).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}

/// Resolve the config path from an optional CLI override.
pub fn config_path(cli_override: Option<PathBuf>) -> PathBuf {
    cli_override.unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.json"));
        assert_eq!(config.api_key, "");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let config = load_config(&path);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn model_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"api_key": "k"}"#).unwrap();
        let config = load_config(&path);
        assert_eq!(config.api_key, "k");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = ProjectConfig {
            api_key: "secret".to_string(),
            model: "gemini-3-pro-preview".to_string(),
        };
        save_config(&path, &config).unwrap();
        let loaded = load_config(&path);
        assert_eq!(loaded.api_key, "secret");
        assert_eq!(loaded.model, "gemini-3-pro-preview");
    }
}
