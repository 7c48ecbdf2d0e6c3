//! Cart commands.

use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use shopfront_commerce::cart::CartChange;

use super::{CartArgs, CartCommand};
use crate::context::{Cart, Context};

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    let change = match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {
            show(&cart, ctx);
            return Ok(());
        }
        CartCommand::Add { id } => {
            let catalog = ctx.open_catalog()?;
            let product = catalog
                .get(id)
                .cloned()
                .ok_or_else(|| anyhow!("No product with id {id} in the catalog"))?;
            cart.add_item(product)
        }
        CartCommand::Remove { id } => cart.remove_item(id),
        CartCommand::Set { id, quantity } => cart.update_quantity(id, quantity),
        CartCommand::Clear { yes } => {
            if !yes && !ctx.output.is_json() && !cart.state().is_empty() {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Remove all {} item(s) from the cart?",
                        cart.state().total_quantity()
                    ))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Clear cancelled");
                    return Ok(());
                }
            }
            cart.clear_cart()
        }
        CartCommand::Dispatch { action } => cart.dispatch_json(&action)?,
    };

    report(&cart, &change, ctx);
    Ok(())
}

fn show(cart: &Cart, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(cart.state());
        return;
    }
    ctx.output.header("Cart");
    ctx.output.cart(cart.state());
}

fn report(cart: &Cart, change: &CartChange, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(cart.state());
        return;
    }

    if let Some(message) = unchanged_message(change) {
        ctx.output.info(message);
    }
    if !cart.is_persisted() {
        ctx.output.warn("The cart was updated but could not be saved.");
    }
    ctx.output.kv("items", &cart.state().total_quantity().to_string());
    ctx.output.kv("total", &cart.state().total_price().display());
}

/// Feedback for an action that matched nothing; the store stays silent then.
fn unchanged_message(change: &CartChange) -> Option<&'static str> {
    match change {
        CartChange::Unchanged => Some("That product is not in the cart; nothing changed."),
        CartChange::Cleared { lines: 0 } => Some("The cart was already empty."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::ProductId;

    #[test]
    fn test_unchanged_message() {
        assert!(unchanged_message(&CartChange::Unchanged).is_some());
        assert!(unchanged_message(&CartChange::Cleared { lines: 0 }).is_some());
        assert!(unchanged_message(&CartChange::Cleared { lines: 3 }).is_none());
        assert!(unchanged_message(&CartChange::Removed {
            id: ProductId::new(1)
        })
        .is_none());
    }
}
