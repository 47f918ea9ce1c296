//! Newtype IDs for type-safe identifiers.
//!
//! A line item's id is derived from the product name and the variant label,
//! so adding the same variant twice always lands on the same entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant label used for products sold as a single unit.
pub const SINGLE_VARIANT: &str = "single";

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(LineItemId);
define_id!(ControlId);

impl LineItemId {
    /// Id of one weight/size variant of a product: `<name>_<weight>`.
    pub fn for_variant(product_name: &str, weight: &str) -> Self {
        Self(format!("{}_{}", product_name, weight))
    }

    /// Id of a product sold without variants: `<name>_single`.
    pub fn single(product_name: &str) -> Self {
        Self::for_variant(product_name, SINGLE_VARIANT)
    }
}
