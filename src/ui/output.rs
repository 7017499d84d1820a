//! ui::output
//!
//! Terminal channels for the najia commands.
//!
//! # Streams
//!
//! Rendered hexagrams, listings and JSON go to stdout. Status lines,
//! warnings and errors go to stderr so piped output stays clean.
//!
//! Integrity gaps are logged by the core through `tracing`.
//! [`Verbosity::filter_directive`] picks the subscriber's default level
//! from `--quiet`/`--debug` unless `RUST_LOG` is set.

use std::fmt::Display;

/// How chatty the CLI is on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet`: errors only
    Quiet,
    Normal,
    /// `--debug`: config and catalogue sources too
    Debug,
}

impl Verbosity {
    /// `--quiet` takes precedence over `--debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter for this verbosity.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "najia=debug,warn",
        }
    }
}

/// Print a status line to stdout unless quiet.
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a `[debug]` line to stderr under `--debug`.
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an `error:` line to stderr, even when quiet.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a `warning:` line to stderr unless quiet.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// One item per line, each behind `prefix`.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
