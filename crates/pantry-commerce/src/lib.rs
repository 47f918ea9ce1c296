//! Storefront domain types and logic for Pantry.
//!
//! - **Catalog**: Products, weight variants, categories and filtering
//! - **Cart**: Line items, quantity rules, the persisted cart store
//! - **Controls**: Idempotent binding of quantity controls to cart operations
//! - **Checkout**: Form validation, the order message and its handoff
//! - **Theme**: The persisted light/dark preference
//!
//! # Example
//!
//! ```rust
//! use pantry_cache::MemoryStore;
//! use pantry_commerce::prelude::*;
//!
//! let mut cart = CartStore::open(MemoryStore::new(), CartSettings::default());
//! cart.add(LineItem::new(
//!     "Mango Pickle",
//!     ProductType::Pickle,
//!     "250gm",
//!     Money::new(150),
//!     2,
//! ))
//! .unwrap();
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price().unwrap(), Money::new(300));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod settings;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod controls;
pub mod theme;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::settings::{CartSettings, CheckoutSettings, MinimumOrder, ThemeSettings};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product, ProductType, Variant};

    // Cart
    pub use crate::cart::{
        Cart, CartLineView, CartStore, CartView, LineItem, QuantityChange, VariantSelection,
    };

    // Controls
    pub use crate::controls::{Control, ControlEvent, ControlOutcome, ControlRegistry};

    // Checkout
    pub use crate::checkout::{
        Checkout, CheckoutError, CustomerDetails, DeepLink, DeliveryTiming, OrderHandoff,
        OrderMessage, OrderReceipt, OrderSummary,
    };

    // Theme
    pub use crate::theme::{Theme, ThemeStore};
}
