//! Persisted cart store.

use pantry_cache::{Cache, KvStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cart::{Cart, LineItem, QuantityChange};
use crate::catalog::ProductType;
use crate::ids::LineItemId;
use crate::money::Money;
use crate::settings::CartSettings;
use crate::CommerceError;

/// Version written into every persisted cart record.
pub const CART_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct CartRecord<'a> {
    version: u32,
    items: &'a [LineItem],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Versioned { version: u32, items: Vec<LineItem> },
    Legacy(Vec<LineItem>),
}

/// The single source of truth for cart contents.
///
/// Construct one per session and pass it by reference to every consumer.
/// Each mutation is applied to a copy, written to storage in full, and only
/// then becomes visible, so the in-memory cart and the stored record never
/// disagree after a call returns.
#[derive(Debug)]
pub struct CartStore<S> {
    cache: Cache<S>,
    settings: CartSettings,
    cart: Cart,
}

impl<S: KvStore> CartStore<S> {
    /// Open the cart held in `store`.
    ///
    /// Absent, unparseable or unknown-version data yields an empty cart.
    pub fn open(store: S, settings: CartSettings) -> Self {
        let cache = Cache::new(store);
        let cart = load(&cache, &settings.storage_key);
        debug!(items = cart.len(), key = %settings.storage_key, "cart loaded");
        Self {
            cache,
            settings,
            cart,
        }
    }

    /// Re-read the stored cart, discarding the in-memory copy.
    pub fn reload(&mut self) {
        self.cart = load(&self.cache, &self.settings.storage_key);
    }

    /// Add an item, merging quantities with an existing entry of the same id.
    pub fn add(&mut self, item: LineItem) -> Result<(), CommerceError> {
        debug!(id = %item.id, quantity = item.quantity, "cart add");
        self.mutate(|cart| cart.add(item))
    }

    /// Overwrite an item's quantity; 0 or less removes it, unknown ids are
    /// ignored.
    pub fn set_quantity(&mut self, id: &LineItemId, quantity: i64) -> Result<(), CommerceError> {
        debug!(%id, quantity, "cart set quantity");
        self.mutate(|cart| {
            cart.set_quantity(id, quantity);
        })
    }

    /// Remove an item if present.
    pub fn remove(&mut self, id: &LineItemId) -> Result<(), CommerceError> {
        debug!(%id, "cart remove");
        self.mutate(|cart| {
            cart.remove(id);
        })
    }

    /// Put a variant in the cart wholesale, replacing any entry with its id.
    pub fn replace_variant(&mut self, item: LineItem) -> Result<(), CommerceError> {
        self.replace_variants(std::iter::once(item))
    }

    /// Replace several variants with a single write.
    pub fn replace_variants(
        &mut self,
        items: impl IntoIterator<Item = LineItem>,
    ) -> Result<(), CommerceError> {
        self.mutate(|cart| {
            for item in items {
                debug!(id = %item.id, quantity = item.quantity, "cart replace variant");
                cart.replace_variant(item);
            }
        })
    }

    /// Single-quantity "+" control, with the category minimum applied.
    pub fn increase(&mut self, template: &LineItem) -> Result<QuantityChange, CommerceError> {
        let minimum = self.minimum_for(&template.product_type);
        let change = self.mutate(|cart| cart.increase(template, minimum))?;
        debug!(id = %change.id, quantity = change.quantity, minimum_applied = change.minimum_applied, "cart increase");
        Ok(change)
    }

    /// Single-quantity "-" control, with the category minimum applied.
    ///
    /// Returns `None` without writing when the item is not in the cart.
    pub fn decrease(&mut self, id: &LineItemId) -> Result<Option<QuantityChange>, CommerceError> {
        let Some(item) = self.cart.get(id) else {
            return Ok(None);
        };
        let minimum = self.minimum_for(&item.product_type);
        let change = self.mutate(|cart| cart.decrease(id, minimum))?;
        if let Some(ref change) = change {
            debug!(id = %change.id, quantity = change.quantity, minimum_applied = change.minimum_applied, "cart decrease");
        }
        Ok(change)
    }

    /// Single-quantity typed input, clamped to the configured maximum and
    /// the category minimum.
    pub fn set_single_quantity(
        &mut self,
        template: &LineItem,
        raw: i64,
    ) -> Result<QuantityChange, CommerceError> {
        let minimum = self.minimum_for(&template.product_type);
        let max = self.settings.max_quantity;
        let change = self.mutate(|cart| cart.set_single_quantity(template, raw, max, minimum))?;
        debug!(id = %change.id, raw, quantity = change.quantity, "cart input quantity");
        Ok(change)
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        debug!(items = self.cart.len(), "cart clear");
        self.mutate(Cart::clear)
    }

    /// Sum of all quantities, shown on the cart badge.
    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    /// Sum of price times quantity.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.cart.total_price()
    }

    pub fn quantity_of(&self, id: &LineItemId) -> u32 {
        self.cart.quantity_of(id)
    }

    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.cart.get(id)
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn settings(&self) -> &CartSettings {
        &self.settings
    }

    /// Minimum order quantity configured for a category.
    pub fn minimum_for(&self, product_type: &ProductType) -> Option<u32> {
        self.settings.minimum_for(product_type)
    }

    fn mutate<R>(&mut self, f: impl FnOnce(&mut Cart) -> R) -> Result<R, CommerceError> {
        let mut next = self.cart.clone();
        let result = f(&mut next);
        self.persist(&next)?;
        self.cart = next;
        Ok(result)
    }

    fn persist(&self, cart: &Cart) -> Result<(), CommerceError> {
        let record = CartRecord {
            version: CART_SCHEMA_VERSION,
            items: cart.items(),
        };
        self.cache.set(&self.settings.storage_key, &record)?;
        Ok(())
    }
}

fn load<S: KvStore>(cache: &Cache<S>, key: &str) -> Cart {
    let stored = match cache.get::<StoredCart>(key) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Cart::new(),
        Err(e) => {
            warn!(key, error = %e, "discarding unreadable stored cart");
            return Cart::new();
        }
    };

    match stored {
        StoredCart::Versioned { version, items } if version == CART_SCHEMA_VERSION => {
            Cart::from_items(items)
        }
        StoredCart::Versioned { version, .. } => {
            warn!(key, version, "discarding stored cart with unknown schema version");
            Cart::new()
        }
        StoredCart::Legacy(items) => {
            debug!(key, items = items.len(), "loaded unversioned cart");
            Cart::from_items(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_cache::MemoryStore;

    fn store_with(raw: &str) -> CartStore<MemoryStore> {
        let kv = MemoryStore::with_entries([("brahmin_cart", raw)]);
        CartStore::open(kv, CartSettings::default())
    }

    fn powder(quantity: u32) -> LineItem {
        LineItem::single("Idli Podi", ProductType::Powder, Money::new(400), quantity)
    }

    #[test]
    fn test_open_absent_is_empty() {
        let store = CartStore::open(MemoryStore::new(), CartSettings::default());
        assert!(store.is_empty());
        assert_eq!(store.total_item_count(), 0);
    }

    #[test]
    fn test_open_malformed_is_empty() {
        assert!(store_with("{not json").is_empty());
        assert!(store_with(r#"{"items": 3}"#).is_empty());
        assert!(store_with("null").is_empty());
    }

    #[test]
    fn test_open_unknown_version_is_empty() {
        let store = store_with(r#"{"version": 99, "items": []}"#);
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_legacy_list() {
        let store = store_with(
            r#"[{"id":"Idli Podi_single","name":"Idli Podi","type":"powder","weight":"1kg","price":400,"quantity":2}]"#,
        );
        assert_eq!(store.total_item_count(), 2);
        assert_eq!(store.total_price().unwrap(), Money::new(800));
    }

    #[test]
    fn test_mutation_writes_versioned_record() {
        let kv = MemoryStore::new();
        let mut store = CartStore::open(kv.clone(), CartSettings::default());
        store.add(powder(1)).unwrap();

        let raw = kv.get("brahmin_cart").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["items"][0]["id"], "Idli Podi_single");
        assert_eq!(value["items"][0]["quantity"], 1);
    }

    #[test]
    fn test_reopen_sees_persisted_state() {
        let kv = MemoryStore::new();
        let mut store = CartStore::open(kv.clone(), CartSettings::default());
        store.add(powder(2)).unwrap();
        store.set_quantity(&powder(1).id, 4).unwrap();

        let reopened = CartStore::open(kv, CartSettings::default());
        assert_eq!(reopened.cart(), store.cart());
        assert_eq!(reopened.quantity_of(&powder(1).id), 4);
    }

    #[test]
    fn test_reload_picks_up_external_write() {
        let kv = MemoryStore::new();
        let mut first = CartStore::open(kv.clone(), CartSettings::default());
        let mut second = CartStore::open(kv, CartSettings::default());

        second.add(powder(3)).unwrap();
        assert!(first.is_empty());
        first.reload();
        assert_eq!(first.total_item_count(), 3);
    }

    #[test]
    fn test_custom_storage_key() {
        let kv = MemoryStore::new();
        let settings = CartSettings {
            storage_key: "other_cart".to_string(),
            ..CartSettings::default()
        };
        let mut store = CartStore::open(kv.clone(), settings);
        store.add(powder(1)).unwrap();

        assert!(kv.exists("other_cart").unwrap());
        assert!(!kv.exists("brahmin_cart").unwrap());
    }

    #[test]
    fn test_decrease_missing_item_does_not_write() {
        let kv = MemoryStore::new();
        let mut store = CartStore::open(kv.clone(), CartSettings::default());
        assert!(store.decrease(&powder(1).id).unwrap().is_none());
        assert!(kv.is_empty());
    }

    #[test]
    fn test_clear_persists_empty_record() {
        let kv = MemoryStore::new();
        let mut store = CartStore::open(kv.clone(), CartSettings::default());
        store.add(powder(1)).unwrap();
        store.clear().unwrap();

        let reopened = CartStore::open(kv, CartSettings::default());
        assert!(reopened.is_empty());
    }
}
