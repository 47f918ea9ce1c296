//! Commerce error types.

use thiserror::Error;

use crate::checkout::CheckoutError;

/// Errors that can occur in cart, theme and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout details failed validation.
    #[error("{0}")]
    Validation(#[from] CheckoutError),

    /// The external messaging handoff failed.
    #[error("Order handoff failed: {0}")]
    Handoff(String),

    /// Unrecognised theme name.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Unrecognised category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Variant not offered by a product.
    #[error("Variant not found: {product} {weight}")]
    VariantNotFound { product: String, weight: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<pantry_cache::CacheError> for CommerceError {
    fn from(e: pantry_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
