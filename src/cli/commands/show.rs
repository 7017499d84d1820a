//! show command - Print the six-line view of one hexagram

use crate::cli::Context;
use crate::core::config::OutputFormat;
use crate::core::view::ViewBuilder;
use crate::ui::output;
use crate::ui::render::render_view;
use anyhow::{Context as _, Result};

/// Print a hexagram view as text or JSON.
///
/// `--json` overrides the configured output format.
pub fn show(ctx: &Context, id: u32, json: bool) -> Result<()> {
    let view = ViewBuilder::new(ctx.catalog)
        .with_policy(ctx.policy)
        .build(id)?;

    output::debug(
        format!("catalogue fingerprint {}", ctx.catalog.fingerprint().short()),
        ctx.verbosity,
    );

    let format = if json { OutputFormat::Json } else { ctx.format };
    match format {
        OutputFormat::Json => {
            let text =
                serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
            println!("{}", text);
        }
        OutputFormat::Text => println!("{}", render_view(&view).trim_end()),
    }

    Ok(())
}
