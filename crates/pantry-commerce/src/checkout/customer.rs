//! Customer contact details and delivery timing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an order form is rejected. The messages are shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Please fill in all required fields (Name, Phone, Address)")]
    MissingContactFields,

    #[error("Please select a delivery timing")]
    MissingTiming,

    #[error("Please specify your preferred delivery time")]
    MissingCustomTime,
}

/// When the customer wants the order delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum DeliveryTiming {
    /// One of the shop's preset slots.
    Slot(String),
    /// Free-text time given by the customer.
    Custom(String),
}

impl DeliveryTiming {
    /// Build from the timing select value and the custom-time field.
    ///
    /// Selecting `"Custom"` (any case) uses the custom-time text.
    pub fn from_form(selected: &str, custom_time: &str) -> Self {
        if selected.trim().eq_ignore_ascii_case("custom") {
            DeliveryTiming::Custom(custom_time.trim().to_string())
        } else {
            DeliveryTiming::Slot(selected.trim().to_string())
        }
    }

    /// Text printed in the order message.
    pub fn describe(&self) -> &str {
        match self {
            DeliveryTiming::Slot(slot) => slot,
            DeliveryTiming::Custom(time) => time,
        }
    }
}

/// Contact fields entered on the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub timing: DeliveryTiming,
}

impl CustomerDetails {
    /// Create details with every field trimmed.
    pub fn new(
        name: impl AsRef<str>,
        phone: impl AsRef<str>,
        address: impl AsRef<str>,
        timing: DeliveryTiming,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            phone: phone.as_ref().trim().to_string(),
            address: address.as_ref().trim().to_string(),
            timing,
        }
    }

    /// Check required fields, contact fields first.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        fn blank(s: &str) -> bool {
            s.trim().is_empty()
        }

        if blank(&self.name) || blank(&self.phone) || blank(&self.address) {
            return Err(CheckoutError::MissingContactFields);
        }

        match &self.timing {
            DeliveryTiming::Custom(time) if blank(time) => Err(CheckoutError::MissingCustomTime),
            DeliveryTiming::Slot(slot) if blank(slot) => Err(CheckoutError::MissingTiming),
            _ => Ok(()),
        }
    }
}
