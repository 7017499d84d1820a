//! cli
//!
//! Command-line interface layer for najia.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the `tracing` subscriber
//! - Resolve configuration and load the catalogue
//! - Delegate to command handlers
//!
//! # Precedence
//!
//! CLI flags override the config file, which overrides defaults.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::catalog::Catalog;
use crate::core::config::{Config, OutputFormat};
use crate::core::hidden::IntegrityPolicy;
use crate::ui::output::{self, Verbosity};

/// Everything a command handler needs.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub catalog: &'a Catalog,
    pub verbosity: Verbosity,
    pub policy: IntegrityPolicy,
    pub format: OutputFormat,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_tracing(verbosity);

    // Completion needs neither config nor catalogue.
    if let args::Command::Completion { shell } = cli.command {
        return commands::completion(shell);
    }

    let config = Config::load().context("Failed to load configuration")?;
    if let Some(path) = config.loaded_from() {
        output::debug(format!("config: {}", path.display()), verbosity);
    }

    let loaded;
    let catalog = match cli.catalog.clone().or_else(|| config.catalog_path()) {
        Some(path) => {
            output::debug(format!("catalogue: {}", path.display()), verbosity);
            loaded = Catalog::load(&path)
                .with_context(|| format!("Failed to load catalogue '{}'", path.display()))?;
            &loaded
        }
        None => Catalog::builtin(),
    };

    let policy = if cli.strict {
        IntegrityPolicy::Strict
    } else {
        config.integrity_policy()
    };

    let ctx = Context {
        catalog,
        verbosity,
        policy,
        format: config.output_format(),
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install a stderr subscriber; `RUST_LOG` overrides the verbosity default.
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}
