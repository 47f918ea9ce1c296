//! Product categories and the category filter.

use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category tag carried by every line item.
///
/// The three built-in categories drive business rules; any other tag is kept
/// verbatim so carts written by a newer catalog still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    Chapathi,
    Pickle,
    Powder,
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::Chapathi => "chapathi",
            ProductType::Pickle => "pickle",
            ProductType::Powder => "powder",
            ProductType::Other(tag) => tag,
        }
    }

    /// Unit label for products of this type sold without variants.
    pub fn single_unit(&self) -> &'static str {
        match self {
            ProductType::Powder => "1kg",
            _ => "1pc",
        }
    }

    /// Built-in display metadata, if this is a known category.
    pub fn category(&self) -> Option<Category> {
        match self {
            ProductType::Chapathi => Some(Category {
                product_type: ProductType::Chapathi,
                name: "Fresh Chapathis",
                icon: "\u{1fad3}",
                description: "Soft, fresh chapathis made daily with premium ingredients",
            }),
            ProductType::Pickle => Some(Category {
                product_type: ProductType::Pickle,
                name: "Premium Pickles",
                icon: "\u{1f952}",
                description: "Authentic traditional pickles with bold flavors and spices",
            }),
            ProductType::Powder => Some(Category {
                product_type: ProductType::Powder,
                name: "Aromatic Spice Powders",
                icon: "\u{1f336}\u{fe0f}",
                description: "Fresh ground spices and powder blends for authentic taste",
            }),
            ProductType::Other(_) => None,
        }
    }
}

impl From<String> for ProductType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "chapathi" => ProductType::Chapathi,
            "pickle" => ProductType::Pickle,
            "powder" => ProductType::Powder,
            _ => ProductType::Other(tag),
        }
    }
}

impl From<&str> for ProductType {
    fn from(tag: &str) -> Self {
        ProductType::from(tag.to_string())
    }
}

impl From<ProductType> for String {
    fn from(product_type: ProductType) -> Self {
        match product_type {
            ProductType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a built-in category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub product_type: ProductType,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

impl Category {
    /// All built-in categories in shop order.
    pub fn all() -> Vec<Category> {
        [ProductType::Chapathi, ProductType::Pickle, ProductType::Powder]
            .iter()
            .filter_map(ProductType::category)
            .collect()
    }

    /// Heading shown when this category is selected.
    pub fn title(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// Which products the shop front is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductType),
}

impl CategoryFilter {
    /// Check if a product type passes the filter.
    pub fn matches(&self, product_type: &ProductType) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == product_type,
        }
    }

    pub fn page_title(&self) -> String {
        match self {
            CategoryFilter::All => "Our Product Categories".to_string(),
            CategoryFilter::Only(product_type) => product_type
                .category()
                .map(|c| c.title())
                .unwrap_or_else(|| product_type.to_string()),
        }
    }

    pub fn page_subtitle(&self) -> String {
        match self {
            CategoryFilter::All => "Choose Your Favorite Category".to_string(),
            CategoryFilter::Only(product_type) => product_type
                .category()
                .map(|c| c.description.to_string())
                .unwrap_or_default(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    /// Parse `"all"` or one of the built-in category tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(CategoryFilter::All),
            tag => match ProductType::from(tag) {
                ProductType::Other(_) => Err(CommerceError::UnknownCategory(s.to_string())),
                known => Ok(CategoryFilter::Only(known)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_roundtrip_tags() {
        assert_eq!(ProductType::from("chapathi"), ProductType::Chapathi);
        assert_eq!(
            ProductType::from("sweets"),
            ProductType::Other("sweets".to_string())
        );
        assert_eq!(String::from(ProductType::Powder), "powder");
    }

    #[test]
    fn test_product_type_serde() {
        let json = serde_json::to_string(&ProductType::Pickle).unwrap();
        assert_eq!(json, r#""pickle""#);
        let parsed: ProductType = serde_json::from_str(r#""snacks""#).unwrap();
        assert_eq!(parsed, ProductType::Other("snacks".to_string()));
    }

    #[test]
    fn test_single_unit() {
        assert_eq!(ProductType::Powder.single_unit(), "1kg");
        assert_eq!(ProductType::Chapathi.single_unit(), "1pc");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Pickle".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ProductType::Pickle)
        );
        assert!("sweets".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_titles() {
        let all = CategoryFilter::All;
        assert_eq!(all.page_title(), "Our Product Categories");
        assert_eq!(all.page_subtitle(), "Choose Your Favorite Category");

        let pickles = CategoryFilter::Only(ProductType::Pickle);
        assert!(pickles.page_title().ends_with("Premium Pickles"));
        assert!(pickles.matches(&ProductType::Pickle));
        assert!(!pickles.matches(&ProductType::Powder));
    }

    #[test]
    fn test_all_categories() {
        let names: Vec<_> = Category::all().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Fresh Chapathis", "Premium Pickles", "Aromatic Spice Powders"]
        );
    }
}
