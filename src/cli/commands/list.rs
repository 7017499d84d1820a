//! list command - List catalogue records

use crate::cli::Context;
use crate::core::types::Trigram;
use crate::ui::output;
use crate::ui::render::render_summary;
use anyhow::Result;

/// List hexagrams in id order, or one palace in generation order.
pub fn list(ctx: &Context, palace: Option<Trigram>) -> Result<()> {
    let records = match palace {
        Some(palace) => ctx.catalog.in_palace(palace),
        None => ctx.catalog.iter().collect(),
    };

    if records.is_empty() {
        output::warn("no hexagrams match", ctx.verbosity);
        return Ok(());
    }

    let rows: Vec<String> = records.into_iter().map(render_summary).collect();
    println!("{}", output::format_list(&rows, ""));
    Ok(())
}
