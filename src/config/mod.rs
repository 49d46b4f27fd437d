//! Unified configuration system.
//!
//! Consolidates configuration from tiers with field-by-field YAML merging:
//! 1. **Defaults** - built into the binary
//! 2. **Project** - `$CWD/human-suite/config.yaml`
//! 3. **User** - `~/.human-suite/config.yaml`
//! 4. **Environment** - `HUMAN_SUITE_DATA_DIR`
//!
//! `HUMAN_SUITE_CONFIG_PATH` (or `--config`) names a single file that
//! replaces tiers 2 and 3.

mod loader;
mod merge;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, ConfigPaths, ConfigTier, DATA_DIR_ENV};
pub use merge::deep_merge;
pub use types::*;
