//! Storefront settings.
//!
//! Every field has a default matching the live shop, so an empty or partial
//! config file is always valid.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductType;
use crate::theme::Theme;

/// Cart storage and quantity rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartSettings {
    /// Storage key holding the serialized cart.
    pub storage_key: String,
    /// Largest quantity a quantity input accepts.
    pub max_quantity: u32,
    /// Per-category minimum order quantities.
    pub minimum_orders: Vec<MinimumOrder>,
}

impl CartSettings {
    /// Minimum order quantity for a product type, if one applies.
    pub fn minimum_for(&self, product_type: &ProductType) -> Option<u32> {
        self.minimum_orders
            .iter()
            .find(|rule| &rule.product_type == product_type)
            .map(|rule| rule.quantity)
    }
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: "brahmin_cart".to_string(),
            max_quantity: 999,
            minimum_orders: vec![MinimumOrder {
                product_type: ProductType::Chapathi,
                quantity: 5,
            }],
        }
    }
}

/// A category that cannot be ordered below a fixed quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumOrder {
    /// Category the rule applies to.
    pub product_type: ProductType,
    /// Smallest non-zero quantity allowed.
    pub quantity: u32,
}

/// Theme preference storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Storage key holding the theme name.
    pub storage_key: String,
    /// Theme used when nothing valid is stored.
    pub default_theme: Theme,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default_theme: Theme::Dark,
        }
    }
}

/// Order handoff settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSettings {
    /// Shop name printed in the order message.
    pub shop_name: String,
    /// Tagline printed under the shop name on the receipt.
    pub tagline: String,
    /// WhatsApp number (with country code, digits only) receiving orders.
    pub whatsapp_number: String,
    /// Minutes within which the shop promises to confirm.
    pub confirm_within_minutes: u32,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            shop_name: "Brahmins Pickles & Powders".to_string(),
            tagline: "Authentic Indian Delicacies".to_string(),
            whatsapp_number: "919182002644".to_string(),
            confirm_within_minutes: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_minimum_for_chapathi() {
        let settings = CartSettings::default();
        assert_eq!(settings.minimum_for(&ProductType::Chapathi), Some(5));
        assert_eq!(settings.minimum_for(&ProductType::Pickle), None);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: CartSettings = serde_json::from_str(r#"{"max_quantity": 50}"#).unwrap();
        assert_eq!(settings.max_quantity, 50);
        assert_eq!(settings.storage_key, "brahmin_cart");
        assert_eq!(settings.minimum_orders.len(), 1);
    }

    #[test]
    fn test_minimum_order_parses_type_tag() {
        let rule: MinimumOrder =
            serde_json::from_str(r#"{"product_type": "powder", "quantity": 2}"#).unwrap();
        assert_eq!(rule.product_type, ProductType::Powder);
    }
}
