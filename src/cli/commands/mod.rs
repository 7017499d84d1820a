//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into [`crate::core`] for the computation
//! 3. Formats and displays output through [`crate::ui`]
//!
//! Handlers never modify the catalogue.

mod completion;
mod list;
mod show;
mod verify;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use list::list;
pub use show::show;
pub use verify::verify;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Show { id, json } => show::show(ctx, id, json),
        Command::List { palace } => list::list(ctx, palace),
        Command::Verify => verify::verify(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
