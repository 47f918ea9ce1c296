//! Cart commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use pantry_cache::{FileStore, KvStore};
use pantry_commerce::cart::{CartStore, CartView, LineItem, QuantityChange};
use pantry_commerce::catalog::{Catalog, Product};
use pantry_commerce::LineItemId;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::{cart_badge, minimum_note};

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add {
            product,
            weight,
            quantity,
        } => {
            let catalog = ctx.catalog()?;
            let item = pick(&catalog, &product, weight.as_deref())?.with_quantity(quantity);
            store.add(item.clone())?;
            ctx.output.success(&format!(
                "Added {} x {} ({})",
                quantity, item.name, item.weight
            ));
        }
        CartCommand::Set {
            product,
            quantity,
            weight,
        } => {
            let id = line_id(ctx, &product, weight.as_deref())?;
            let present = store.get(&id).is_some();
            match set_line(&mut store, &id, quantity)? {
                0 if present => ctx.output.success(&format!("Removed {}", id)),
                0 => ctx.output.info(&format!("{} is not in the cart", id)),
                now => ctx.output.success(&format!("{} now x {}", id, now)),
            }
        }
        CartCommand::Remove { product, weight } => {
            let id = line_id(ctx, &product, weight.as_deref())?;
            store.remove(&id)?;
            ctx.output.success(&format!("Removed {}", id));
        }
        CartCommand::Inc { product } => {
            let template = single(ctx, &product)?;
            let change = store.increase(&template)?;
            report(ctx, &store, &template, &change);
        }
        CartCommand::Dec { product } => {
            let template = single(ctx, &product)?;
            match store.decrease(&template.id)? {
                Some(change) => report(ctx, &store, &template, &change),
                None => ctx.output.info(&format!("{} is not in the cart", template.name)),
            }
        }
        CartCommand::Input { product, quantity } => {
            let template = single(ctx, &product)?;
            let change = store.set_single_quantity(&template, quantity)?;
            report(ctx, &store, &template, &change);
        }
        CartCommand::Clear { yes } => {
            if store.is_empty() {
                ctx.output.info("Cart is already empty");
                return Ok(());
            }
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt("Are you sure you want to clear your cart?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Cart left as is");
                    return Ok(());
                }
            }
            store.clear()?;
            ctx.output.success("Cart cleared");
        }
    }

    show(ctx, &store)
}

/// Print the cart listing and summary.
pub fn show(ctx: &Context, store: &CartStore<FileStore>) -> Result<()> {
    let view = CartView::of(store.cart())?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&format!("Your Cart {}", cart_badge(view.total_items)));

    if view.is_empty() {
        ctx.output.info("Your cart is empty");
        ctx.output.info("Add some delicious items to get started!");
        return Ok(());
    }

    for line in &view.lines {
        let each = format!("{} each", line.unit_price);
        let quantity = format!("x {}", line.quantity);
        let total = line.line_total.to_string();
        ctx.output.table_row(
            &[
                line.name.as_str(),
                line.weight.as_str(),
                each.as_str(),
                quantity.as_str(),
                total.as_str(),
            ],
            &[24, 8, 12, 6, 8],
        );
    }

    ctx.output.info("");
    ctx.output.kv("Total items", &view.total_items.to_string());
    ctx.output.kv("Subtotal", &view.subtotal.to_string());
    ctx.output.kv("Delivery", "Free");
    ctx.output.kv("Total", &view.subtotal.to_string());

    Ok(())
}

fn report(ctx: &Context, store: &CartStore<FileStore>, template: &LineItem, change: &QuantityChange) {
    if change.minimum_applied {
        if let Some(minimum) = store.minimum_for(&template.product_type) {
            ctx.output
                .warn(&minimum_note(template.product_type.as_str(), minimum));
        }
    }
    if change.removed() {
        ctx.output.success(&format!("Removed {}", template.name));
    } else {
        ctx.output
            .success(&format!("{} now x {}", template.name, change.quantity));
    }
}

/// Line item for a catalog product, by weight for variant products.
fn pick(catalog: &Catalog, name: &str, weight: Option<&str>) -> Result<LineItem> {
    let product = catalog.require(name)?;
    match weight {
        Some(weight) => Ok(product.variant_item(weight, 1)?),
        None => single_of(product),
    }
}

fn single(ctx: &Context, name: &str) -> Result<LineItem> {
    let catalog = ctx.catalog()?;
    single_of(catalog.require(name)?)
}

fn single_of(product: &Product) -> Result<LineItem> {
    product.single_item().with_context(|| {
        let weights: Vec<&str> = product.variants.iter().map(|v| v.weight.as_str()).collect();
        format!(
            "{} is sold by weight; pass --weight ({})",
            product.name,
            weights.join(", ")
        )
    })
}

/// Id of a cart line, using the catalog's spelling of the name when known.
fn line_id(ctx: &Context, name: &str, weight: Option<&str>) -> Result<LineItemId> {
    let catalog = ctx.catalog()?;
    let name = catalog.find(name).map_or(name, |p| p.name.as_str());
    Ok(match weight {
        Some(weight) => LineItemId::for_variant(name, weight),
        None => LineItemId::single(name),
    })
}

/// Overwrite a line's quantity, returning what it holds afterwards.
///
/// Unknown lines are left alone and report 0.
fn set_line<S: KvStore>(store: &mut CartStore<S>, id: &LineItemId, quantity: i64) -> Result<u32> {
    store.set_quantity(id, quantity)?;
    Ok(store.quantity_of(id))
}
