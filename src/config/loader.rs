//! Configuration loader with tier-based merging.
//!
//! Loads configuration from multiple tiers and merges them field-by-field.

use super::merge::deep_merge_all;
use super::types::Config;
use anyhow::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming one explicit config file (overrides all tiers).
pub const CONFIG_PATH_ENV: &str = "HUMAN_SUITE_CONFIG_PATH";

/// Environment variable overriding `storage.data_dir`.
pub const DATA_DIR_ENV: &str = "HUMAN_SUITE_DATA_DIR";

/// Where a loaded config file came from, lowest priority first.
///
/// Built-in defaults and environment overrides are always applied and are
/// not listed as sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    /// Project-level config ($CWD/human-suite/)
    Project,
    /// User-level config (~/.human-suite/)
    User,
    /// File named by `--config` or the config path variable; replaces both tiers
    Explicit,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Explicit => write!(f, "explicit"),
        }
    }
}

/// Directories searched for `config.yaml`.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project-level config directory
    pub project_dir: Option<PathBuf>,
    /// User-level config directory
    pub user_dir: Option<PathBuf>,
    /// Explicit config file, bypassing the tiers
    pub explicit_file: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        let user_dir = dirs::home_dir().map(|h| h.join(".human-suite"));
        let explicit_file = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);

        Self {
            project_dir: Some(PathBuf::from("human-suite")),
            user_dir,
            explicit_file,
        }
    }

    /// Create paths with explicit directories.
    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
            explicit_file: None,
        }
    }

    /// Use a single config file instead of the tiers.
    pub fn with_explicit_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(file.into());
        self
    }
}

/// Configuration loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Paths for each tier
    pub paths: ConfigPaths,
    /// Loaded configuration
    config: Config,
    /// Config files that contributed, highest tier last
    sources: Vec<(ConfigTier, PathBuf)>,
}

impl ConfigLoader {
    /// Load configuration from all tiers with proper merging.
    pub fn load() -> Result<Self> {
        Self::load_with_paths(ConfigPaths::discover())
    }

    /// Load configuration with explicit paths.
    pub fn load_with_paths(paths: ConfigPaths) -> Result<Self> {
        if let Some(ref explicit) = paths.explicit_file {
            // An explicit file is the user's intent; failing to read it is fatal.
            let mut config = Config::load(explicit)?;
            Self::apply_env_overrides(&mut config);
            let sources = vec![(ConfigTier::Explicit, explicit.clone())];
            return Ok(Self {
                paths,
                config,
                sources,
            });
        }

        let mut configs: Vec<Value> = Vec::new();
        let mut sources = Vec::new();

        // Tier 1: Defaults
        if let Ok(default_json) = serde_json::to_value(Config::default()) {
            configs.push(default_json);
        }

        // Tier 2: Project config
        if let Some(ref project_dir) = paths.project_dir {
            let file = project_dir.join("config.yaml");
            if let Some(value) = read_yaml_tier(&file) {
                configs.push(value);
                sources.push((ConfigTier::Project, file));
            }
        }

        // Tier 3: User config
        if let Some(ref user_dir) = paths.user_dir {
            let file = user_dir.join("config.yaml");
            if let Some(value) = read_yaml_tier(&file) {
                configs.push(value);
                sources.push((ConfigTier::User, file));
            }
        }

        let merged = deep_merge_all(configs);
        let mut config: Config = serde_json::from_value(merged)?;

        // Tier 4: Environment variable overrides
        Self::apply_env_overrides(&mut config);

        Ok(Self {
            paths,
            config,
            sources,
        })
    }

    /// Apply environment variable overrides to config.
    fn apply_env_overrides(config: &mut Config) {
        if let Ok(data_dir) = std::env::var(DATA_DIR_ENV) {
            config.storage.data_dir = PathBuf::from(data_dir);
        }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Consume the loader and return the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }

    /// Config files that were merged, lowest tier first.
    pub fn sources(&self) -> &[(ConfigTier, PathBuf)] {
        &self.sources
    }
}

/// Read one tier's YAML file. Missing files are silent; unreadable or
/// malformed ones are skipped with a warning.
fn read_yaml_tier(file: &Path) -> Option<Value> {
    if !file.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %file.display(), error = %e, "Skipping unreadable config file");
            return None;
        }
    };
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Null) => None,
        Ok(value) => {
            debug!(path = %file.display(), "Loaded config tier");
            Some(value)
        }
        Err(e) => {
            warn!(path = %file.display(), error = %e, "Skipping malformed config file");
            None
        }
    }
}
