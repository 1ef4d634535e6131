//! p4cfg — inspect and edit the Perforce integration settings from a shell.
//!
//! This binary is a small host for `p4cfg-core`: it loads the settings
//! document once, works on the published current configuration, and saves it
//! back only when a command changed something.
//!
//! # Usage
//!
//! ```text
//! p4cfg [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   path                 Print the settings document path
//!   show [--json]        Print every setting
//!   get <KEY>            Print one setting
//!   set <KEY> <VALUE>    Change one setting and save
//!   reset                Restore defaults and save
//!   describe             Print settings grouped by category with help text
//! ```
//!
//! # Environment variables
//!
//! | Variable       | Description                                          |
//! |----------------|------------------------------------------------------|
//! | `P4CFG_CONFIG` | Settings document path, same as `--config`           |
//! | `RUST_LOG`     | Log filter for diagnostics on stderr (default: warn) |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit the Perforce integration settings.
#[derive(Debug, Parser)]
#[command(name = "p4cfg", about = "Inspect and edit Perforce integration settings", version)]
struct Cli {
    /// Path of the settings document.
    ///
    /// Defaults to `settings.toml` in the platform config directory.
    #[arg(long, global = true, env = "P4CFG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Print the settings document path.
    Path,
    /// Print every setting as `key = value`.
    Show {
        /// Print a JSON object instead.
        #[arg(long)]
        json: bool,
    },
    /// Print the value of one setting.
    Get {
        /// Setting key, e.g. `port` or `autoCheckoutOnEdit`.
        key: String,
    },
    /// Change one setting and save.
    Set {
        /// Setting key, e.g. `port` or `autoCheckoutOnEdit`.
        key: String,
        /// New value; booleans accept true/false, yes/no, on/off, 1/0.
        value: String,
    },
    /// Restore every setting to its default and save.
    Reset,
    /// Print settings grouped by category, with help text.
    Describe,
}

impl Cli {
    /// Resolves the settings document path.
    ///
    /// # Errors
    ///
    /// Returns an error if no `--config` was given and the platform config
    /// directory cannot be determined.
    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => p4cfg_core::default_config_path()
                .context("no --config given and no platform config directory found"),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so command output stays pipeable.  Level is
    // overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.config_path()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cli.command, &path, &mut out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
