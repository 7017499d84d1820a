//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--catalog <path>`: Use a replacement catalogue document
//! - `--strict`: Fail on reference-data gaps instead of warning

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::Trigram;

/// najia - six relatives and hidden spirits for the 64 hexagrams
#[derive(Parser, Debug)]
#[command(name = "najia")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Catalogue document to use instead of the builtin one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Treat missing reference data as an error
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the six-line view of a hexagram
    #[command(
        name = "show",
        long_about = "Show the six-line view of a hexagram.\n\n\
            Each line lists its branch, element and six-relatives role, with the \
            self (世) and response (応) markers. Relatives missing from the hexagram \
            are borrowed from the pure hexagram of its palace and shown as hidden \
            spirits (伏) on the line where they sit.",
        after_help = "\
EXAMPLES:
    # Heaven over wind (天風姤)
    najia show 44

    # Machine-readable output
    najia show 44 --json"
    )]
    Show {
        /// Hexagram number (1-64, King Wen order)
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List hexagrams
    #[command(
        name = "list",
        after_help = "\
EXAMPLES:
    # All 64 in King Wen order
    najia list

    # The eight hexagrams of the 乾 palace, pure hexagram first
    najia list --palace 乾"
    )]
    List {
        /// Only hexagrams of this palace, in palace order
        #[arg(long, value_parser = parse_trigram)]
        palace: Option<Trigram>,
    },

    /// Check the catalogue against the na-jia rules
    #[command(
        name = "verify",
        long_about = "Check the catalogue against the na-jia rules.\n\n\
            Every record's palace, self/response lines, branches and flags are \
            recomputed from its trigrams and compared with the stored data. Exits \
            non-zero if anything disagrees."
    )]
    Verify,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

fn parse_trigram(text: &str) -> Result<Trigram, String> {
    text.parse::<Trigram>().map_err(|e| e.to_string())
}
