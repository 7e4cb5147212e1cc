//! Navel - keyboard-driven page and tab navigation
//!
//! Command-line entry point: simulation harness and settings management.

mod cli;
mod cmd_simulate;
mod cmd_site;
mod key_script;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{debug, error, warn};

use navel_config::{ConfigLoader, ConfigValidator, FileSettingsStore};
use navel_content::highlight::allocate;
use navel_logging::init_tracing;

use crate::cli::{Cli, Commands};

// Commands and the executor share one thread so a simulated key press is
// fully handled before the next one.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    let logs = init_tracing(&config.logging)?;
    debug!(path = %cli.config.display(), "Loaded configuration");

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    if !validation.is_valid() {
        for err in &validation.errors {
            error!(path = %err.path, "{}", err.message);
        }
        bail!("Invalid configuration in {}", cli.config.display());
    }

    let settings_path = cli.settings.as_deref().unwrap_or(&config.settings.path);
    let settings = FileSettingsStore::new(ConfigLoader::expand_path(settings_path));
    debug!(path = %settings.path().display(), "Using settings store");

    match cli.command {
        Commands::Simulate { page, keys, open } => {
            cmd_simulate::simulate(&config, &settings, logs, &page, &keys, &open).await
        }
        Commands::Labels { count } => {
            println!("{}", allocate(count).join(" "));
            Ok(())
        }
        Commands::Site { action } => cmd_site::handle_site_command(action, &settings).await,
    }
}
