//! CLI definitions for Navel.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Navel CLI.
#[derive(Parser)]
#[command(name = "navel")]
#[command(about = "Keyboard-driven page and tab navigation")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Settings store path (overrides the configured one)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Drive a page fixture with a key script and print the resulting state
    Simulate {
        /// Page fixture (JSON)
        #[arg(long)]
        page: PathBuf,

        /// Whitespace-separated key script, e.g. "C-l s" or "C-S-ArrowRight"
        #[arg(long, default_value = "")]
        keys: String,

        /// Additional tabs opened after the page's tab
        #[arg(long = "open")]
        open: Vec<String>,
    },

    /// Print the labels allocated for a number of targets
    Labels {
        /// Number of targets
        count: usize,
    },

    /// Per-site disablement settings
    Site {
        #[command(subcommand)]
        action: SiteAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SiteAction {
    /// Report whether Navel is active on a URL
    Check {
        /// Page URL
        url: String,
    },

    /// List disabled-site patterns
    List,

    /// Replace the disabled-site patterns
    Set {
        /// Patterns (regular expressions)
        patterns: Vec<String>,

        /// Read patterns from a file, one per line
        #[arg(short, long, conflicts_with = "patterns")]
        file: Option<PathBuf>,
    },
}
