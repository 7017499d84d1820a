//! verify command - Check the catalogue against the na-jia rules

use crate::cli::Context;
use crate::core::verify::verify_catalog;
use crate::ui::output;
use anyhow::{bail, Result};

/// Verify the active catalogue; fails if there are findings.
pub fn verify(ctx: &Context) -> Result<()> {
    let result = verify_catalog(ctx.catalog);
    let fingerprint = ctx.catalog.fingerprint();

    if result.ok {
        output::print(
            format!(
                "ok: {} hexagrams verified (fingerprint {})",
                ctx.catalog.len(),
                fingerprint.short()
            ),
            ctx.verbosity,
        );
        return Ok(());
    }

    for error in &result.errors {
        output::error(error);
    }
    bail!(
        "{} integrity finding(s) in catalogue {}",
        result.errors.len(),
        fingerprint.short()
    )
}
