//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pantry_commerce::settings::{CartSettings, CheckoutSettings, ThemeSettings};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["pantry.toml", ".pantry.toml", "pantry.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PantryConfig {
    /// Where the storefront keeps its data.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Cart storage key and quantity rules.
    #[serde(default)]
    pub cart: CartSettings,

    /// Theme preference.
    #[serde(default)]
    pub theme: ThemeSettings,

    /// Order message and handoff.
    #[serde(default)]
    pub checkout: CheckoutSettings,
}

impl PantryConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Problems that make the config unusable, then ones worth a warning.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.cart.storage_key.trim().is_empty() {
            errors.push("cart.storage_key must not be empty".to_string());
        }
        if self.theme.storage_key.trim().is_empty() {
            errors.push("theme.storage_key must not be empty".to_string());
        }
        if self.cart.storage_key == self.theme.storage_key {
            errors.push("cart.storage_key and theme.storage_key must differ".to_string());
        }
        if self.cart.max_quantity == 0 {
            errors.push("cart.max_quantity must be at least 1".to_string());
        }

        for (i, rule) in self.cart.minimum_orders.iter().enumerate() {
            if rule.quantity == 0 {
                warnings.push(format!("cart.minimum_orders[{}].quantity of 0 has no effect", i));
            } else if rule.quantity > self.cart.max_quantity {
                errors.push(format!(
                    "cart.minimum_orders[{}].quantity exceeds cart.max_quantity",
                    i
                ));
            }
        }

        let number = &self.checkout.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            errors.push("checkout.whatsapp_number must be digits only, with country code".to_string());
        } else if number.len() < 10 {
            warnings.push("checkout.whatsapp_number looks too short".to_string());
        }

        if let Some(ref catalog) = self.storage.catalog {
            if !catalog.exists() {
                warnings.push(format!("storage.catalog '{}' does not exist", catalog.display()));
            }
        }

        (errors, warnings)
    }
}

/// Storage locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding cart and theme entries.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Product catalog; the bundled catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(".pantry").join("storage.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            catalog: None,
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default pantry.toml config file.
pub fn generate_default_config(shop_name: &str) -> String {
    format!(
        r#"# Pantry storefront configuration

[storage]
data_file = ".pantry/storage.json"
# catalog = "catalog.json"

[cart]
storage_key = "brahmin_cart"
max_quantity = 999

[[cart.minimum_orders]]
product_type = "chapathi"
quantity = 5

[theme]
storage_key = "theme"
default_theme = "dark"

[checkout]
shop_name = "{shop_name}"
tagline = "Authentic Indian Delicacies"
whatsapp_number = "919182002644"
confirm_within_minutes = 15
"#,
        shop_name = shop_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_commerce::catalog::ProductType;

    #[test]
    fn test_default_config_parses() {
        let config: PantryConfig =
            toml::from_str(&generate_default_config("Brahmins Pickles & Powders")).unwrap();
        assert_eq!(config.cart.minimum_for(&ProductType::Chapathi), Some(5));
        assert_eq!(config.checkout.whatsapp_number, "919182002644");
        assert_eq!(config.storage.data_file, default_data_file());
        let (errors, warnings) = config.check();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PantryConfig = toml::from_str("").unwrap();
        assert_eq!(config.cart, CartSettings::default());
        assert!(config.storage.catalog.is_none());
    }

    #[test]
    fn test_check_rejects_bad_number() {
        let mut config = PantryConfig::default();
        config.checkout.whatsapp_number = "+91 918".to_string();
        let (errors, _) = config.check();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantry.json");

        let mut config = PantryConfig::default();
        config.checkout.confirm_within_minutes = 30;
        config.save(&path).unwrap();

        let loaded = PantryConfig::load(&path).unwrap();
        assert_eq!(loaded.checkout.confirm_within_minutes, 30);
    }
}
