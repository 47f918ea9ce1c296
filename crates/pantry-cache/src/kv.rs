//! Typed key-value access with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, KvStore};

/// Type-safe cache over a [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a raw store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and
    /// [`CacheError::SerializeError`] if the stored text does not parse as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let items: Option<Vec<LineItem>> = cache.get("brahmin_cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(text) => {
                let value: T = serde_json::from_str(&text)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get the raw stored text without parsing it.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.store.get(key)
    }

    /// Set a value in the cache, replacing any previous value.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("brahmin_cart", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let text = serde_json::to_string(value)?;
        self.store.set(key, &text)
    }

    /// Set a raw text value.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.store.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_set_and_get_typed() {
        let cache = Cache::new(MemoryStore::new());
        let entries = vec![Entry {
            id: "Mango_250gm".to_string(),
            quantity: 2,
        }];

        cache.set("cart", &entries).unwrap();
        let loaded: Option<Vec<Entry>> = cache.get("cart").unwrap();
        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn test_get_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Entry>> = cache.get("cart").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_get_malformed_value() {
        let cache = Cache::new(MemoryStore::with_entries([("cart", "{oops")]));
        let result: Result<Option<Vec<Entry>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_raw_values() {
        let cache = Cache::new(MemoryStore::new());
        cache.set_raw("theme", "light").unwrap();
        assert_eq!(cache.get_raw("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(cache.get_raw("cart").unwrap(), None);
    }
}
