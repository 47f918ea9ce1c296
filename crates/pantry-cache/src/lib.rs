//! Key-value persistence layer for the Pantry storefront.
//!
//! A browser keeps the cart and the theme preference in local storage: a flat
//! map of string keys to string values. This crate provides that map as the
//! [`KvStore`] trait with an in-memory and a file-backed implementation, and a
//! [`Cache`] wrapper that adds JSON (de)serialization on top.
//!
//! # Example
//!
//! ```rust
//! use pantry_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Counter {
//!     hits: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("counter", &Counter { hits: 3 }).unwrap();
//!
//! let counter: Option<Counter> = cache.get("counter").unwrap();
//! assert_eq!(counter, Some(Counter { hits: 3 }));
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
