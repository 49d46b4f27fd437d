//! Configuration types and structures.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default hidden directory holding the JSON record files.
pub const DEFAULT_DATA_DIR: &str = ".human_suite_data";

/// Default slot for the task list.
pub const DEFAULT_TASKS_FILE: &str = "tasks_data.json";

/// Default slot for the session log.
pub const DEFAULT_SESSIONS_FILE: &str = "session_log.json";

/// Indent width used when pretty-printing record files.
pub const DEFAULT_JSON_INDENT: usize = 2;

/// Where and how records are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the record files (created on demand).
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the task list slot.
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,

    /// File name of the session log slot.
    #[serde(default = "default_sessions_file")]
    pub sessions_file: String,

    /// Number of spaces per indent level in written files.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tasks_file: default_tasks_file(),
            sessions_file: default_sessions_file(),
            indent: default_indent(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_tasks_file() -> String {
    DEFAULT_TASKS_FILE.to_string()
}

fn default_sessions_file() -> String {
    DEFAULT_SESSIONS_FILE.to_string()
}

fn default_indent() -> usize {
    DEFAULT_JSON_INDENT
}

/// Note search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// File name suffixes considered notes (matched case-insensitively).
    #[serde(default = "NotesConfig::default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            extensions: Self::default_extensions(),
        }
    }
}

impl NotesConfig {
    pub fn default_extensions() -> Vec<String> {
        vec![".txt".to_string(), ".md".to_string(), ".note".to_string()]
    }
}

/// Time log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLogConfig {
    /// chrono format string for session start stamps.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for TimeLogConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d @ %H:%M:%S".to_string()
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub notes: NotesConfig,

    #[serde(default)]
    pub timelog: TimeLogConfig,
}

impl Config {
    /// Load configuration from a single YAML file.
    ///
    /// Empty or comment-only files yield the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Option<Config> = serde_yaml::from_str(&content)?;
        Ok(config.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.data_dir, PathBuf::from(".human_suite_data"));
        assert_eq!(config.storage.tasks_file, "tasks_data.json");
        assert_eq!(config.storage.sessions_file, "session_log.json");
        assert_eq!(config.storage.indent, 2);
        assert_eq!(config.notes.extensions, vec![".txt", ".md", ".note"]);
        assert_eq!(config.timelog.timestamp_format, "%Y-%m-%d @ %H:%M:%S");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str(
            r#"
storage:
  indent: 4
"#,
        )
        .unwrap();
        assert_eq!(config.storage.indent, 4);
        assert_eq!(config.storage.tasks_file, "tasks_data.json");
        assert_eq!(config.notes.extensions.len(), 3);
    }

    #[test]
    fn test_load_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "# nothing here\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.storage.indent, 2);
    }
}
