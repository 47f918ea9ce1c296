//! Shopping cart module.
//!
//! Contains line items, the in-memory cart, the persisted cart store, the
//! pending variant selection of multi-variant pickers and the render view.

mod cart;
mod line_item;
mod selection;
mod store;
mod view;

pub use cart::{Cart, QuantityChange};
pub use line_item::LineItem;
pub use selection::{PendingVariant, VariantSelection};
pub use store::{CartStore, CART_SCHEMA_VERSION};
pub use view::{CartLineView, CartView};
