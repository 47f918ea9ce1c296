//! Catalog module.
//!
//! Contains product categories, products with their variants, and the
//! category filter used by the shop front.

mod category;
mod product;

pub use category::{Category, CategoryFilter, ProductType};
pub use product::{Catalog, Product, Variant};
