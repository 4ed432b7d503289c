//! Product and product summary types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::review::{average_rating, Review};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// A selectable color (e.g., Navy / #0a192f).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ColorOption {
    /// Display name, unique within a product.
    pub name: String,
    /// CSS color value.
    pub value: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A product as shown on its detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Merchandising badge (e.g., "New Arrival").
    #[serde(default)]
    pub badge: Option<String>,
    /// Category trail for the breadcrumb (e.g., ["Clothing", "T-Shirts"]).
    #[serde(default)]
    pub category_path: Vec<String>,
    /// Short description shown next to the gallery.
    pub description: String,
    /// Long-form paragraphs for the details tab.
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Image URLs in gallery order. Never empty.
    pub images: Vec<String>,
    /// Color options in display order. Never empty.
    pub colors: Vec<ColorOption>,
    /// Size labels in display order. Never empty.
    pub sizes: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Related products for the "You May Also Like" row.
    #[serde(default)]
    pub related: Vec<ProductSummary>,
}

impl Product {
    /// Create a product with one image, one color and one size.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            badge: None,
            category_path: Vec::new(),
            description: String::new(),
            details: Vec::new(),
            features: Vec::new(),
            images: vec!["/placeholder.svg".to_string()],
            colors: vec![ColorOption::new("Default", "#000000")],
            sizes: vec!["One Size".to_string()],
            reviews: Vec::new(),
            related: Vec::new(),
        }
    }

    /// Check the invariants the detail page relies on.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidProduct {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.images.is_empty() {
            return Err(invalid("no images"));
        }
        if self.colors.is_empty() {
            return Err(invalid("no colors"));
        }
        if self.sizes.is_empty() {
            return Err(invalid("no sizes"));
        }

        // Option names travel through the `color:<name>` intent text, which
        // trims whitespace.
        let untrimmed = |label: &str| label.is_empty() || label.trim() != label;
        if let Some(color) = self.colors.iter().find(|c| untrimmed(&c.name)) {
            return Err(invalid(&format!("color name {:?} is blank or padded", color.name)));
        }
        if let Some(size) = self.sizes.iter().find(|s| untrimmed(s)) {
            return Err(invalid(&format!("size {:?} is blank or padded", size)));
        }

        let mut seen = HashSet::new();
        for color in &self.colors {
            if !seen.insert(color.name.as_str()) {
                return Err(invalid(&format!("duplicate color {}", color.name)));
            }
        }

        Ok(())
    }

    /// Look up a color option by name.
    pub fn color(&self, name: &str) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Check if a size label is offered.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Mean review rating, `0.0` without reviews.
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.reviews)
    }

    /// Card-sized view of this product.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.images.first().cloned().unwrap_or_default(),
            rating: (self.average_rating() * 10.0).round() / 10.0,
        }
    }
}

/// Product card data for listings and related-product rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    /// Card image URL.
    pub image: String,
    /// Rating shown on the card, already rounded.
    pub rating: f64,
}

impl ProductSummary {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            rating,
        }
    }

    /// Link to the product's detail page.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        let mut product = Product::new("1", "Premium Cotton T-Shirt", Money::usd(2999));
        product.colors = vec![
            ColorOption::new("Black", "#000000"),
            ColorOption::new("White", "#ffffff"),
        ];
        product.sizes = vec!["S".into(), "M".into(), "L".into()];
        product
    }

    #[test]
    fn test_product_validates() {
        assert!(shirt().validate().is_ok());
    }

    #[test]
    fn test_product_without_images_is_invalid() {
        let mut product = shirt();
        product.images.clear();
        let err = product.validate().unwrap_err();
        assert!(err.to_string().contains("no images"));
    }

    #[test]
    fn test_product_without_sizes_is_invalid() {
        let mut product = shirt();
        product.sizes.clear();
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_duplicate_color_names_are_invalid() {
        let mut product = shirt();
        product.colors.push(ColorOption::new("Black", "#111111"));
        let err = product.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate color Black"));
    }

    #[test]
    fn test_padded_option_names_are_invalid() {
        let mut product = shirt();
        product.colors.push(ColorOption::new(" Navy", "#1e3a8a"));
        let err = product.validate().unwrap_err();
        assert!(err.to_string().contains("\" Navy\" is blank or padded"));

        let mut product = shirt();
        product.sizes.push("XL ".into());
        assert!(product.validate().is_err());

        let mut product = shirt();
        product.sizes.push(String::new());
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_color_and_size_lookup() {
        let product = shirt();
        assert_eq!(product.color("White").unwrap().value, "#ffffff");
        assert!(product.color("Teal").is_none());
        assert!(product.has_size("M"));
        assert!(!product.has_size("XXL"));
    }

    #[test]
    fn test_summary() {
        let summary = shirt().summary();
        assert_eq!(summary.name, "Premium Cotton T-Shirt");
        assert_eq!(summary.image, "/placeholder.svg");
        assert_eq!(summary.rating, 0.0);
        assert_eq!(summary.href(), "/product/1");
    }
}
