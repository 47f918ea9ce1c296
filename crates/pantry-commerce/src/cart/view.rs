//! Read-only snapshot of the cart for rendering.

use serde::Serialize;

use crate::cart::Cart;
use crate::ids::LineItemId;
use crate::money::Money;
use crate::CommerceError;

/// One row of the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub id: LineItemId,
    pub name: String,
    pub weight: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Everything the badge, cart page and summary panel display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_items: u64,
    pub subtotal: Money,
}

impl CartView {
    pub fn of(cart: &Cart) -> Result<Self, CommerceError> {
        let lines = cart
            .items()
            .iter()
            .map(|item| {
                Ok(CartLineView {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    weight: item.weight.clone(),
                    unit_price: item.price,
                    quantity: item.quantity,
                    line_total: item.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(Self {
            lines,
            total_items: cart.total_item_count(),
            subtotal: cart.total_price()?,
        })
    }

    /// Text of the cart badge.
    pub fn badge(&self) -> String {
        self.total_items.to_string()
    }

    /// Whether the empty-cart message replaces the listing.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
