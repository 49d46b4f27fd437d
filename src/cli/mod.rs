//! Command-line arguments for human-suite.
//!
//! Every flag is optional; running with none starts the interactive menu
//! with configuration from the usual tiers.

use clap::Parser;
use std::path::PathBuf;

/// Utility suite: tasks, file sorting, note search, email drafts, time log
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (replaces project and user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the task and session files (overrides config)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
