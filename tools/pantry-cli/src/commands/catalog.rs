//! Product listing.

use anyhow::Result;
use pantry_commerce::catalog::{Category, CategoryFilter};
use pantry_commerce::LineItemId;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let filter: CategoryFilter = args.category.parse()?;
    let catalog = ctx.catalog()?;
    let store = ctx.cart()?;
    let products = catalog.filter(&filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&filter.page_title());
    ctx.output.info(&filter.page_subtitle());

    if filter == CategoryFilter::All {
        for category in Category::all() {
            ctx.output
                .list_item(&format!("{} - {}", category.title(), category.description));
        }
    }

    for product in products {
        ctx.output.info("");
        ctx.output.info(&product.name);
        if let Some(item) = product.single_item() {
            ctx.output.kv(
                &format!("{} {}", item.weight, item.price),
                &format!("in cart: {}", store.quantity_of(&item.id)),
            );
        }
        for variant in &product.variants {
            let id = LineItemId::for_variant(&product.name, &variant.weight);
            ctx.output.kv(
                &format!("{} {}", variant.weight, variant.price),
                &format!("in cart: {}", store.quantity_of(&id)),
            );
        }
    }

    Ok(())
}
