//! `navel site`: per-site disablement settings.

use anyhow::{Context, Result};

use navel_config::{ConfigValidator, ExtensionOptions, SettingsStore, SiteFilter};

use crate::cli::SiteAction;

/// Handle site subcommands.
pub(crate) async fn handle_site_command(
    action: SiteAction,
    settings: &dyn SettingsStore,
) -> Result<()> {
    match action {
        SiteAction::Check { url } => site_check(settings, &url).await,
        SiteAction::List => site_list(settings).await,
        SiteAction::Set { patterns, file } => {
            let options = match file {
                Some(path) => {
                    let text = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    ExtensionOptions::from_text(&text)
                }
                None => ExtensionOptions {
                    disabled_site_regexes: patterns,
                },
            };
            site_set(settings, &options).await
        }
    }
}

async fn site_check(settings: &dyn SettingsStore, url: &str) -> Result<()> {
    let options = settings.load_options().await?;
    let filter = SiteFilter::new(&options.disabled_site_regexes);

    for (pattern, error) in filter.invalid_patterns() {
        println!("Ignoring invalid pattern {}: {}", pattern, error);
    }

    if filter.is_disabled(url) {
        println!("disabled: {}", url);
    } else {
        println!("enabled: {}", url);
    }
    Ok(())
}

async fn site_list(settings: &dyn SettingsStore) -> Result<()> {
    let options = settings.load_options().await?;
    if options.disabled_site_regexes.is_empty() {
        println!("No disabled sites.");
        return Ok(());
    }
    println!("{}", options.to_text());
    Ok(())
}

async fn site_set(settings: &dyn SettingsStore, options: &ExtensionOptions) -> Result<()> {
    let validation = ConfigValidator::validate_options(options);
    for warning in &validation.warnings {
        println!("Warning: {}: {}", warning.path, warning.message);
    }
    for error in &validation.errors {
        println!("Error: {}: {}", error.path, error.message);
    }

    settings.save_options(options).await?;
    println!(
        "Saved {} pattern(s).",
        options.disabled_site_regexes.len()
    );
    Ok(())
}
