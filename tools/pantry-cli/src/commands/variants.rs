//! Multi-variant picker.

use anyhow::{bail, Context as _, Result};
use pantry_commerce::cart::VariantSelection;

use super::VariantsArgs;
use crate::context::Context;

/// Run the variants command.
///
/// Each `<weight>=<quantity>` is the total wanted for that weight. Weights not
/// mentioned, or given as 0, keep what the cart already holds.
pub fn run(args: VariantsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(&args.product)?;
    if !product.has_variants() {
        bail!(
            "{} has no weight variants; use `pantry cart inc` instead",
            product.name
        );
    }

    let mut store = ctx.cart()?;
    let mut selection = VariantSelection::from_cart(product, &store);

    for entry in &args.quantities {
        let (weight, quantity) = parse_entry(entry)?;
        selection.set(weight, quantity)?;
    }

    let subtotal = selection.subtotal()?;
    let label = selection.button_label();

    if !ctx.output.is_json() {
        ctx.output.header(&product.name);
        for option in selection.options() {
            ctx.output.kv(
                &format!("{} ({})", option.variant.weight, option.variant.price),
                &option.quantity.to_string(),
            );
        }
        ctx.output.kv("Subtotal", &subtotal.to_string());
    }

    let units = selection.commit(&mut store)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product.name,
            "units": units,
            "subtotal": subtotal,
            "total_items": store.total_item_count(),
        }));
    } else if let Some(label) = label {
        ctx.output.success(&format!("{} ({} units in cart)", label, store.total_item_count()));
    } else {
        ctx.output.warn("Please select at least one item");
    }

    Ok(())
}

fn parse_entry(entry: &str) -> Result<(&str, i64)> {
    let (weight, quantity) = entry
        .split_once('=')
        .with_context(|| format!("Expected <weight>=<quantity>, got '{}'", entry))?;
    let quantity = quantity
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in '{}'", entry))?;
    Ok((weight.trim(), quantity))
}
