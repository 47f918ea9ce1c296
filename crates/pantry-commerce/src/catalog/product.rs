//! Product and variant types.

use crate::cart::LineItem;
use crate::catalog::{CategoryFilter, ProductType};
use crate::money::Money;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// A product on the shop front.
///
/// Chapathis and some powders are sold as single units with one price;
/// pickles and most powders come in weight variants, each priced separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name, also the prefix of every line item id.
    pub name: String,
    /// Category tag.
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Unit price for single-unit products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    /// Weight variants for multi-variant products.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Check if the product is picked per weight variant.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Find a variant by weight label.
    pub fn variant(&self, weight: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.weight == weight)
    }

    /// Template line item for the single-quantity control.
    ///
    /// Quantity is 1; cart operations decide the real quantity. Returns
    /// `None` for variant-only products.
    pub fn single_item(&self) -> Option<LineItem> {
        let price = self.price?;
        Some(LineItem::single(
            &self.name,
            self.product_type.clone(),
            price,
            1,
        ))
    }

    /// Line item for one weight variant at the given quantity.
    pub fn variant_item(&self, weight: &str, quantity: u32) -> Result<LineItem, CommerceError> {
        let variant = self
            .variant(weight)
            .ok_or_else(|| CommerceError::VariantNotFound {
                product: self.name.clone(),
                weight: weight.to_string(),
            })?;
        Ok(variant.line_item(&self.name, self.product_type.clone(), quantity))
    }

    /// Lowest price on offer, for "from ₹N" labels.
    pub fn starting_price(&self) -> Option<Money> {
        self.variants
            .iter()
            .map(|v| v.price)
            .min()
            .or(self.price)
    }
}

/// One weight/size option of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Display label, e.g. "250gm".
    pub weight: String,
    /// Unit price of this variant.
    pub price: Money,
}

impl Variant {
    pub fn new(weight: impl Into<String>, price: Money) -> Self {
        Self {
            weight: weight.into(),
            price,
        }
    }

    /// Build the line item for this variant.
    pub fn line_item(&self, product_name: &str, product_type: ProductType, quantity: u32) -> LineItem {
        LineItem::new(product_name, product_type, &self.weight, self.price, quantity)
    }
}

/// The full product list, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Products passing the filter, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(&p.product_type))
            .collect()
    }

    /// Find a product by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Find a product by name or fail.
    pub fn require(&self, name: &str) -> Result<&Product, CommerceError> {
        self.find(name)
            .ok_or_else(|| CommerceError::ProductNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
