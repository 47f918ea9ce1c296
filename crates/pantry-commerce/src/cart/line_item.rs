//! Line item type.

use crate::catalog::ProductType;
use crate::ids::LineItemId;
use crate::money::Money;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// A purchasable quantity of one product variant.
///
/// Field names and order match the persisted cart record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Merge key, `<name>_<weight>` or `<name>_single`.
    pub id: LineItemId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Category tag.
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Variant label (e.g. "250gm", "1kg", "1pc").
    pub weight: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item for a weight variant.
    pub fn new(
        name: &str,
        product_type: ProductType,
        weight: &str,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id: LineItemId::for_variant(name, weight),
            name: name.to_string(),
            product_type,
            weight: weight.to_string(),
            price,
            quantity,
        }
    }

    /// Create a line item for a product sold without variants.
    pub fn single(name: &str, product_type: ProductType, price: Money, quantity: u32) -> Self {
        Self {
            id: LineItemId::single(name),
            name: name.to_string(),
            weight: product_type.single_unit().to_string(),
            product_type,
            price,
            quantity,
        }
    }

    /// Same item with a different quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}
