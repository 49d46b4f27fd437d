//! Human Suite
//!
//! Interactive text menu over a task list, file organizer, note search,
//! email drafter and time log.

use anyhow::{Context, Result};
use clap::Parser;
use human_suite::cli::Cli;
use human_suite::config::{ConfigLoader, ConfigPaths};
use human_suite::logging::{self, LogTarget};
use human_suite::menu::{Menu, Suite};
use std::io;
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;

    let mut paths = ConfigPaths::discover();
    if let Some(ref config_path) = cli.config {
        paths = paths.with_explicit_file(config_path);
    }
    let mut loader = ConfigLoader::load_with_paths(paths).context("failed to load configuration")?;
    for (tier, path) in loader.sources() {
        debug!(tier = %tier, path = %path.display(), "Config tier applied");
    }

    // CLI overrides win over every config tier
    let config = loader.config_mut();
    if let Some(ref data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    let config = loader.into_config();

    // The storage location must be creatable before the menu starts.
    std::fs::create_dir_all(&config.storage.data_dir).with_context(|| {
        format!(
            "cannot create data directory {}",
            config.storage.data_dir.display()
        )
    })?;
    info!(data_dir = %config.storage.data_dir.display(), "Starting human-suite");

    let suite = Suite::from_config(&config);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Menu::new(suite, stdin, stdout)
        .with_clear_screen(true)
        .run()?;

    Ok(())
}
