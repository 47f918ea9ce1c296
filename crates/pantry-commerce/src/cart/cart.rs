//! In-memory cart.
//!
//! `Cart` holds the rules; it performs no I/O. [`CartStore`](super::CartStore)
//! wraps it with persistence.

use crate::cart::LineItem;
use crate::ids::LineItemId;
use crate::money::Money;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Insertion-ordered line items with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

/// Result of a single-quantity control operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityChange {
    /// Item the operation targeted.
    pub id: LineItemId,
    /// Quantity afterwards, 0 when the item left the cart.
    pub quantity: u32,
    /// The category minimum raised or removed the item.
    pub minimum_applied: bool,
}

impl QuantityChange {
    pub fn removed(&self) -> bool {
        self.quantity == 0
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw items, merging duplicate ids and dropping
    /// zero-quantity entries.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    /// Add an item, merging quantities when the id is already present.
    ///
    /// A zero-quantity item is ignored.
    pub fn add(&mut self, item: LineItem) {
        if item.quantity == 0 {
            return;
        }

        if let Some(existing) = self.find_mut(&item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    /// Overwrite an item's quantity.
    ///
    /// A quantity of 0 or less removes the item. Unknown ids are ignored.
    /// Returns whether the cart changed.
    pub fn set_quantity(&mut self, id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.find_mut(id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove an item. Returns whether it was present.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Put an item in the cart wholesale, replacing any entry with its id.
    ///
    /// Unlike [`add`](Self::add) nothing is merged: price, weight and
    /// quantity all come from `item`. A zero-quantity item removes the entry.
    pub fn replace_variant(&mut self, item: LineItem) {
        if item.quantity == 0 {
            self.remove(&item.id);
            return;
        }

        if let Some(existing) = self.find_mut(&item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Step the quantity of a single-unit product up by one.
    ///
    /// With a `minimum`, a result below it is raised to exactly the minimum.
    pub fn increase(&mut self, template: &LineItem, minimum: Option<u32>) -> QuantityChange {
        let current = self.quantity_of(&template.id);
        let mut quantity = current.saturating_add(1);
        let mut minimum_applied = false;

        if let Some(min) = minimum {
            if quantity < min {
                quantity = min;
                minimum_applied = true;
            }
        }

        self.upsert(template, quantity);
        QuantityChange {
            id: template.id.clone(),
            quantity,
            minimum_applied,
        }
    }

    /// Step the quantity of a single-unit product down by one.
    ///
    /// With a `minimum`, an item at or below it leaves the cart entirely
    /// instead of dropping under the minimum. Returns `None` for unknown ids.
    pub fn decrease(&mut self, id: &LineItemId, minimum: Option<u32>) -> Option<QuantityChange> {
        let current = self.quantity_of(id);
        if current == 0 {
            return None;
        }

        let at_minimum = minimum.is_some_and(|min| current <= min);
        let quantity = if at_minimum || current <= 1 {
            self.remove(id);
            0
        } else {
            let next = current - 1;
            self.set_quantity(id, i64::from(next));
            next
        };

        Some(QuantityChange {
            id: id.clone(),
            quantity,
            minimum_applied: at_minimum,
        })
    }

    /// Apply a typed quantity from a single-unit product input.
    ///
    /// The value is clamped to `0..=max`; a non-zero value under `minimum` is
    /// raised to it. Zero removes the item, anything else creates or
    /// overwrites it.
    pub fn set_single_quantity(
        &mut self,
        template: &LineItem,
        raw: i64,
        max: u32,
        minimum: Option<u32>,
    ) -> QuantityChange {
        let mut quantity = u32::try_from(raw.clamp(0, i64::from(max))).unwrap_or(0);
        let mut minimum_applied = false;

        if let Some(min) = minimum {
            if quantity > 0 && quantity < min {
                quantity = min;
                minimum_applied = true;
            }
        }

        if quantity == 0 {
            self.remove(&template.id);
        } else {
            self.upsert(template, quantity);
        }

        QuantityChange {
            id: template.id.clone(),
            quantity,
            minimum_applied,
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over all items.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let totals = self
            .items
            .iter()
            .map(LineItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(&totals).ok_or(CommerceError::Overflow)
    }

    /// Quantity of an item, 0 when absent.
    pub fn quantity_of(&self, id: &LineItemId) -> u32 {
        self.get(id).map(|i| i.quantity).unwrap_or(0)
    }

    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &LineItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| &i.id == id)
    }

    fn upsert(&mut self, template: &LineItem, quantity: u32) {
        if let Some(existing) = self.find_mut(&template.id) {
            existing.quantity = quantity;
        } else {
            self.items.push(template.clone().with_quantity(quantity));
        }
    }
}
