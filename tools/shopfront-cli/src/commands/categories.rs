//! Category listing command.

use anyhow::Result;

use crate::context::Context;

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let options = catalog.category_options();

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Categories");
    for option in &options {
        ctx.output.list_item(option);
    }

    Ok(())
}
