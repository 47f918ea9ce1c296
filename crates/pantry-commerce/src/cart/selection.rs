//! Pending quantities of a multi-variant product picker.
//!
//! The picker collects a quantity per weight before anything reaches the
//! cart. Committing hands the *total intended quantity* of each weight to
//! [`CartStore::replace_variants`]; no minimum-order rule is applied here.

use pantry_cache::KvStore;
use serde::Serialize;
use tracing::debug;

use crate::cart::{CartStore, LineItem};
use crate::catalog::{Product, ProductType, Variant};
use crate::money::Money;
use crate::CommerceError;

/// One weight option and its pending quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingVariant {
    pub variant: Variant,
    pub quantity: u32,
}

/// Local picker state for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSelection {
    product_name: String,
    product_type: ProductType,
    options: Vec<PendingVariant>,
    max_quantity: u32,
}

impl VariantSelection {
    /// Start an empty selection over a product's variants.
    pub fn new(product: &Product, max_quantity: u32) -> Self {
        Self {
            product_name: product.name.clone(),
            product_type: product.product_type.clone(),
            options: product
                .variants
                .iter()
                .map(|variant| PendingVariant {
                    variant: variant.clone(),
                    quantity: 0,
                })
                .collect(),
            max_quantity,
        }
    }

    /// Start a selection pre-filled with what the cart already holds.
    pub fn from_cart<S: KvStore>(product: &Product, store: &CartStore<S>) -> Self {
        let mut selection = Self::new(product, store.settings().max_quantity);
        for option in &mut selection.options {
            let item = option.variant.line_item(&product.name, product.product_type.clone(), 0);
            option.quantity = store.quantity_of(&item.id);
        }
        selection
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn options(&self) -> &[PendingVariant] {
        &self.options
    }

    /// Pending quantity for a weight, 0 for unknown weights.
    pub fn quantity(&self, weight: &str) -> u32 {
        self.options
            .iter()
            .find(|o| o.variant.weight == weight)
            .map(|o| o.quantity)
            .unwrap_or(0)
    }

    /// Add one unit of a weight.
    pub fn increment(&mut self, weight: &str) -> Result<u32, CommerceError> {
        let max = self.max_quantity;
        let option = self.option_mut(weight)?;
        option.quantity = option.quantity.saturating_add(1).min(max);
        Ok(option.quantity)
    }

    /// Take one unit of a weight away, stopping at zero.
    pub fn decrement(&mut self, weight: &str) -> Result<u32, CommerceError> {
        let option = self.option_mut(weight)?;
        option.quantity = option.quantity.saturating_sub(1);
        Ok(option.quantity)
    }

    /// Set a typed quantity, clamped to `0..=max`.
    pub fn set(&mut self, weight: &str, raw: i64) -> Result<u32, CommerceError> {
        let max = self.max_quantity;
        let option = self.option_mut(weight)?;
        option.quantity = u32::try_from(raw.clamp(0, i64::from(max))).unwrap_or(0);
        Ok(option.quantity)
    }

    /// Sum of pending quantities over all weights.
    pub fn total_quantity(&self) -> u32 {
        self.options
            .iter()
            .fold(0u32, |acc, o| acc.saturating_add(o.quantity))
    }

    /// Running subtotal of the pending quantities.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let totals = self
            .options
            .iter()
            .map(|o| o.variant.price.try_multiply(o.quantity))
            .collect::<Option<Vec<_>>>()
            .ok_or(CommerceError::Overflow)?;
        Money::try_sum(&totals).ok_or(CommerceError::Overflow)
    }

    pub fn has_items(&self) -> bool {
        self.total_quantity() > 0
    }

    /// Label of the commit button, `None` while nothing is selected.
    pub fn button_label(&self) -> Option<String> {
        let total = self.total_quantity();
        (total > 0).then(|| format!("Add {} to Cart", total))
    }

    /// Line items for every weight with a pending quantity.
    pub fn pending_items(&self) -> Vec<LineItem> {
        self.options
            .iter()
            .filter(|o| o.quantity > 0)
            .map(|o| {
                o.variant
                    .line_item(&self.product_name, self.product_type.clone(), o.quantity)
            })
            .collect()
    }

    /// Write the pending quantities to the cart and reset the picker.
    ///
    /// Returns the number of units committed; nothing is written when it is 0.
    pub fn commit<S: KvStore>(&mut self, store: &mut CartStore<S>) -> Result<u32, CommerceError> {
        let added = self.total_quantity();
        if added == 0 {
            return Ok(0);
        }

        store.replace_variants(self.pending_items())?;
        debug!(product = %self.product_name, units = added, "variant selection committed");
        self.reset();
        Ok(added)
    }

    /// Zero every pending quantity.
    pub fn reset(&mut self) {
        for option in &mut self.options {
            option.quantity = 0;
        }
    }

    fn option_mut(&mut self, weight: &str) -> Result<&mut PendingVariant, CommerceError> {
        let product = &self.product_name;
        self.options
            .iter_mut()
            .find(|o| o.variant.weight == weight)
            .ok_or_else(|| CommerceError::VariantNotFound {
                product: product.clone(),
                weight: weight.to_string(),
            })
    }
}
