//! Event routing for storefront quantity controls.
//!
//! Every on-page control is bound once to a [`ControlId`]. Binding an id a
//! second time is refused, so one click can never be handled twice no matter
//! how often a page is re-rendered.

use std::collections::HashMap;

use pantry_cache::KvStore;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cart::{CartStore, LineItem, QuantityChange, VariantSelection};
use crate::catalog::Product;
use crate::ids::{ControlId, LineItemId};
use crate::CommerceError;

/// What a bound control acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// `-` / input / `+` of a product sold as a single unit.
    SingleQuantity { item: LineItem },
    /// One weight row of a multi-variant picker.
    VariantOption { product: String, weight: String },
    /// "Add N to Cart" button of a multi-variant picker.
    VariantCommit { product: String },
    /// Line controls on the cart page.
    CartLine { id: LineItemId },
    /// The clear-cart button.
    ClearCart,
}

/// A user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Increment,
    Decrement,
    Input(i64),
    Click,
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ControlOutcome {
    Unchanged,
    Quantity(QuantityChange),
    Pending { product: String, total_quantity: u32 },
    Committed { product: String, units: u32 },
    Removed { id: LineItemId },
    Cleared,
}

/// Bound controls and the pending picker state behind them.
#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: HashMap<ControlId, Control>,
    selections: HashMap<String, VariantSelection>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a control. Returns `false`, keeping the first binding, when the
    /// id is already bound.
    pub fn bind(&mut self, id: impl Into<ControlId>, control: Control) -> bool {
        let id = id.into();
        if self.controls.contains_key(&id) {
            debug!(%id, "control already bound");
            return false;
        }
        self.controls.insert(id, control);
        true
    }

    /// Register the picker state for a multi-variant product.
    ///
    /// Existing pending quantities are kept if the picker is registered again.
    pub fn register_picker(&mut self, product: &Product, max_quantity: u32) {
        self.selections
            .entry(product.name.clone())
            .or_insert_with(|| VariantSelection::new(product, max_quantity));
    }

    pub fn is_bound(&self, id: &ControlId) -> bool {
        self.controls.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Pending picker state of a product.
    pub fn selection(&self, product: &str) -> Option<&VariantSelection> {
        self.selections.get(product)
    }

    /// Route an event to the control bound under `id`.
    pub fn handle<S: KvStore>(
        &mut self,
        id: &ControlId,
        event: ControlEvent,
        store: &mut CartStore<S>,
    ) -> Result<ControlOutcome, CommerceError> {
        let Some(control) = self.controls.get(id) else {
            warn!(%id, "event for unbound control");
            return Ok(ControlOutcome::Unchanged);
        };

        match control {
            Control::SingleQuantity { item } => Self::single(item, event, store),
            Control::VariantOption { product, weight } => {
                let selection = self
                    .selections
                    .get_mut(product)
                    .ok_or_else(|| CommerceError::ProductNotFound(product.clone()))?;
                match event {
                    ControlEvent::Increment => selection.increment(weight)?,
                    ControlEvent::Decrement => selection.decrement(weight)?,
                    ControlEvent::Input(raw) => selection.set(weight, raw)?,
                    ControlEvent::Click => return Ok(ControlOutcome::Unchanged),
                };
                Ok(ControlOutcome::Pending {
                    product: product.clone(),
                    total_quantity: selection.total_quantity(),
                })
            }
            Control::VariantCommit { product } => {
                if event != ControlEvent::Click {
                    return Ok(ControlOutcome::Unchanged);
                }
                let selection = self
                    .selections
                    .get_mut(product)
                    .ok_or_else(|| CommerceError::ProductNotFound(product.clone()))?;
                match selection.commit(store)? {
                    0 => Ok(ControlOutcome::Unchanged),
                    units => Ok(ControlOutcome::Committed {
                        product: product.clone(),
                        units,
                    }),
                }
            }
            Control::CartLine { id } => Self::cart_line(id, event, store),
            Control::ClearCart => {
                if event != ControlEvent::Click {
                    return Ok(ControlOutcome::Unchanged);
                }
                store.clear()?;
                Ok(ControlOutcome::Cleared)
            }
        }
    }

    fn single<S: KvStore>(
        item: &LineItem,
        event: ControlEvent,
        store: &mut CartStore<S>,
    ) -> Result<ControlOutcome, CommerceError> {
        let change = match event {
            ControlEvent::Increment => Some(store.increase(item)?),
            ControlEvent::Decrement => store.decrease(&item.id)?,
            ControlEvent::Input(raw) => Some(store.set_single_quantity(item, raw)?),
            ControlEvent::Click => None,
        };
        Ok(change.map_or(ControlOutcome::Unchanged, ControlOutcome::Quantity))
    }

    // Cart-page lines edit quantities directly; the minimum rule does not apply.
    fn cart_line<S: KvStore>(
        id: &LineItemId,
        event: ControlEvent,
        store: &mut CartStore<S>,
    ) -> Result<ControlOutcome, CommerceError> {
        let current = i64::from(store.quantity_of(id));
        if current == 0 {
            return Ok(ControlOutcome::Unchanged);
        }

        let target = match event {
            ControlEvent::Increment => current + 1,
            ControlEvent::Decrement => current - 1,
            ControlEvent::Input(raw) => raw,
            ControlEvent::Click => 0,
        };
        let target = target.min(i64::from(store.settings().max_quantity));
        store.set_quantity(id, target)?;

        let quantity = store.quantity_of(id);
        if quantity == 0 {
            Ok(ControlOutcome::Removed { id: id.clone() })
        } else {
            Ok(ControlOutcome::Quantity(QuantityChange {
                id: id.clone(),
                quantity,
                minimum_applied: false,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductType, Variant};
    use crate::money::Money;
    use crate::settings::CartSettings;
    use pantry_cache::MemoryStore;

    fn store() -> CartStore<MemoryStore> {
        CartStore::open(MemoryStore::new(), CartSettings::default())
    }

    fn chapathi() -> LineItem {
        LineItem::single("Plain Chapathi", ProductType::Chapathi, Money::new(10), 1)
    }

    fn mango() -> Product {
        Product {
            name: "Mango Pickle".to_string(),
            product_type: ProductType::Pickle,
            price: None,
            variants: vec![
                Variant::new("250gm", Money::new(150)),
                Variant::new("500gm", Money::new(280)),
            ],
        }
    }

    #[test]
    fn test_bind_is_idempotent() {
        let mut registry = ControlRegistry::new();
        assert!(registry.bind("plus-1", Control::SingleQuantity { item: chapathi() }));
        assert!(!registry.bind("plus-1", Control::ClearCart));
        assert_eq!(registry.len(), 1);

        let mut store = store();
        let outcome = registry
            .handle(&"plus-1".into(), ControlEvent::Increment, &mut store)
            .unwrap();
        assert!(matches!(outcome, ControlOutcome::Quantity(ref c) if c.quantity == 5));
        assert_eq!(store.total_item_count(), 5);
    }

    #[test]
    fn test_unbound_control_is_ignored() {
        let mut registry = ControlRegistry::new();
        let mut store = store();
        let outcome = registry
            .handle(&"nope".into(), ControlEvent::Click, &mut store)
            .unwrap();
        assert_eq!(outcome, ControlOutcome::Unchanged);
    }

    #[test]
    fn test_variant_picker_commit() {
        let mut registry = ControlRegistry::new();
        let mut store = store();
        let product = mango();
        registry.register_picker(&product, 999);
        registry.bind(
            "mango-250",
            Control::VariantOption {
                product: product.name.clone(),
                weight: "250gm".to_string(),
            },
        );
        registry.bind(
            "mango-add",
            Control::VariantCommit {
                product: product.name.clone(),
            },
        );

        registry
            .handle(&"mango-250".into(), ControlEvent::Increment, &mut store)
            .unwrap();
        let pending = registry
            .handle(&"mango-250".into(), ControlEvent::Increment, &mut store)
            .unwrap();
        assert_eq!(
            pending,
            ControlOutcome::Pending {
                product: product.name.clone(),
                total_quantity: 2
            }
        );
        assert!(store.is_empty());

        let committed = registry
            .handle(&"mango-add".into(), ControlEvent::Click, &mut store)
            .unwrap();
        assert_eq!(
            committed,
            ControlOutcome::Committed {
                product: product.name.clone(),
                units: 2
            }
        );
        assert_eq!(store.quantity_of(&LineItemId::for_variant("Mango Pickle", "250gm")), 2);
        assert_eq!(registry.selection("Mango Pickle").unwrap().total_quantity(), 0);

        let again = registry
            .handle(&"mango-add".into(), ControlEvent::Click, &mut store)
            .unwrap();
        assert_eq!(again, ControlOutcome::Unchanged);
    }

    #[test]
    fn test_cart_line_skips_minimum() {
        let mut registry = ControlRegistry::new();
        let mut store = store();
        store.add(chapathi().with_quantity(5)).unwrap();
        let id = chapathi().id;
        registry.bind("line-minus", Control::CartLine { id: id.clone() });

        let outcome = registry
            .handle(&"line-minus".into(), ControlEvent::Decrement, &mut store)
            .unwrap();
        assert!(matches!(outcome, ControlOutcome::Quantity(ref c) if c.quantity == 4));

        let removed = registry
            .handle(&"line-minus".into(), ControlEvent::Input(0), &mut store)
            .unwrap();
        assert_eq!(removed, ControlOutcome::Removed { id });
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_cart_button() {
        let mut registry = ControlRegistry::new();
        let mut store = store();
        store.add(chapathi()).unwrap();
        registry.bind("clear", Control::ClearCart);

        let outcome = registry
            .handle(&"clear".into(), ControlEvent::Click, &mut store)
            .unwrap();
        assert_eq!(outcome, ControlOutcome::Cleared);
        assert!(store.is_empty());
    }
}
