//! Product data provider boundary and the in-memory demo catalog.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::product::{ColorOption, Product, ProductSummary};
use crate::catalog::review::{Rating, Review};
use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};
use crate::money::Money;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Source of product data for the storefront pages.
///
/// Pages only read through this trait, so the mock catalog can be swapped
/// for a real catalog service without touching the selection state.
pub trait ProductProvider {
    /// Fetch a product by ID.
    fn product(&self, id: &ProductId) -> Result<Product, CommerceError>;

    /// Products featured on the landing page.
    fn featured(&self) -> Vec<ProductSummary>;

    /// All known product IDs, in ID order.
    fn product_ids(&self) -> Vec<ProductId>;
}

/// Serialized form of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub featured: Vec<ProductSummary>,
}

/// In-memory catalog backed by literal data.
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    products: BTreeMap<ProductId, Product>,
    featured: Vec<ProductSummary>,
}

impl MockCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product after checking its invariants.
    pub fn insert(&mut self, product: Product) -> Result<(), CommerceError> {
        product.validate()?;
        self.products.insert(product.id.clone(), product);
        Ok(())
    }

    /// Set the featured product cards.
    pub fn with_featured(mut self, featured: Vec<ProductSummary>) -> Self {
        self.featured = featured;
        self
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Build a catalog from a parsed document.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CommerceError> {
        let mut catalog = Self::new().with_featured(doc.featured);
        for product in doc.products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// Export the catalog as a document.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            products: self.products.values().cloned().collect(),
            featured: self.featured.clone(),
        }
    }

    /// The demo storefront catalog.
    pub fn demo() -> Self {
        let shirt = demo_shirt();
        let mut products = vec![shirt.clone()];
        products.extend(shirt.related.iter().map(|summary| companion_product(summary, &shirt)));

        let featured = vec![
            ProductSummary::new("1", "Premium Cotton T-Shirt", Money::usd(2999), PLACEHOLDER_IMAGE, 4.8),
            ProductSummary::new("2", "Slim Fit Jeans", Money::usd(4999), PLACEHOLDER_IMAGE, 4.5),
            ProductSummary::new("3", "Casual Hoodie", Money::usd(3999), PLACEHOLDER_IMAGE, 4.7),
            ProductSummary::new("4", "Canvas Sneakers", Money::usd(5999), PLACEHOLDER_IMAGE, 4.3),
        ];

        Self {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
            featured,
        }
    }
}

impl ProductProvider for MockCatalog {
    fn product(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.products
            .get(id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    fn featured(&self) -> Vec<ProductSummary> {
        self.featured.clone()
    }

    fn product_ids(&self) -> Vec<ProductId> {
        self.products.keys().cloned().collect()
    }
}

fn demo_shirt() -> Product {
    Product {
        id: ProductId::new("1"),
        name: "Premium Cotton T-Shirt".to_string(),
        price: Money::usd(2999),
        badge: Some("New Arrival".to_string()),
        category_path: vec!["Clothing".to_string(), "T-Shirts".to_string()],
        description: "Our premium cotton t-shirt is made from 100% organic cotton, providing \
            exceptional comfort and durability. Perfect for everyday wear, this versatile piece \
            features a classic fit and is available in multiple colors and sizes."
            .to_string(),
        details: vec![
            "Our premium cotton t-shirt is designed for maximum comfort and durability. Made \
             from 100% organic cotton, it's soft against the skin and breathable for all-day \
             wear. The classic fit is versatile enough for any occasion, whether you're dressing \
             up or keeping it casual."
                .to_string(),
            "Each shirt is pre-shrunk to ensure a consistent fit wash after wash, and features \
             reinforced stitching at the seams for added durability. Available in multiple \
             colors and sizes, this t-shirt is a wardrobe essential that combines quality, \
             comfort, and style."
                .to_string(),
        ],
        features: [
            "100% organic cotton",
            "Classic fit",
            "Pre-shrunk fabric",
            "Reinforced stitching",
            "Machine washable",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        images: vec![PLACEHOLDER_IMAGE.to_string(); 4],
        colors: vec![
            ColorOption::new("Black", "#000000"),
            ColorOption::new("White", "#ffffff"),
            ColorOption::new("Navy", "#0a192f"),
            ColorOption::new("Red", "#e11d48"),
        ],
        sizes: ["XS", "S", "M", "L", "XL", "XXL"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        reviews: vec![
            demo_review(
                "1",
                "Alex Johnson",
                5,
                "Excellent quality and fits perfectly. Will definitely buy more!",
                (2023, 10, 15),
            ),
            demo_review(
                "2",
                "Sam Smith",
                4,
                "Great shirt, very comfortable. Slightly larger than expected.",
                (2023, 9, 28),
            ),
            demo_review(
                "3",
                "Taylor Wilson",
                5,
                "Love the material and the color is exactly as shown.",
                (2023, 9, 10),
            ),
        ],
        related: vec![
            ProductSummary::new("2", "Slim Fit Jeans", Money::usd(4999), PLACEHOLDER_IMAGE, 4.5),
            ProductSummary::new("3", "Casual Hoodie", Money::usd(3999), PLACEHOLDER_IMAGE, 4.7),
            ProductSummary::new("4", "Canvas Sneakers", Money::usd(5999), PLACEHOLDER_IMAGE, 4.3),
            ProductSummary::new("5", "Denim Jacket", Money::usd(6999), PLACEHOLDER_IMAGE, 4.8),
        ],
    }
}

fn demo_review(id: &str, author: &str, stars: i64, comment: &str, ymd: (i32, u32, u32)) -> Review {
    Review {
        id: ReviewId::new(id),
        author: author.to_string(),
        rating: Rating::clamped(stars),
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap_or_default(),
    }
}

/// Minimal product behind a related-product card, so every card link resolves.
fn companion_product(summary: &ProductSummary, shirt: &Product) -> Product {
    let mut product = Product::new(summary.id.clone(), summary.name.clone(), summary.price);
    product.category_path = vec!["Clothing".to_string()];
    product.description = format!("{} from our latest collection.", summary.name);
    product.images = vec![summary.image.clone()];
    product.colors = shirt.colors.iter().take(2).cloned().collect();
    product.sizes = shirt.sizes.clone();
    product.related = shirt
        .related
        .iter()
        .filter(|r| r.id != summary.id)
        .cloned()
        .collect();
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_product() {
        let catalog = MockCatalog::demo();
        let product = catalog.product(&ProductId::new("1")).unwrap();

        assert_eq!(product.name, "Premium Cotton T-Shirt");
        assert_eq!(product.price.display(), "$29.99");
        assert_eq!(product.images.len(), 4);
        assert_eq!(product.colors[0].name, "Black");
        assert_eq!(product.sizes[2], "M");
        assert_eq!(product.reviews.len(), 3);
        assert_eq!(product.related.len(), 4);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_demo_related_products_resolve() {
        let catalog = MockCatalog::demo();
        let shirt = catalog.product(&ProductId::new("1")).unwrap();
        for related in &shirt.related {
            let product = catalog.product(&related.id).unwrap();
            assert_eq!(product.name, related.name);
            assert!(product.validate().is_ok());
        }
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_featured() {
        let featured = MockCatalog::demo().featured();
        assert_eq!(featured.len(), 4);
        assert_eq!(featured[0].rating, 4.8);
        assert_eq!(featured[3].name, "Canvas Sneakers");
    }

    #[test]
    fn test_missing_product() {
        let err = MockCatalog::demo()
            .product(&ProductId::new("99"))
            .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("99".to_string()));
    }

    #[test]
    fn test_json_round_trip_preserves_products() {
        let demo = MockCatalog::demo();
        let json = serde_json::to_string(&demo.to_document()).unwrap();
        let loaded = MockCatalog::from_json(&json).unwrap();

        assert_eq!(loaded.product_ids(), demo.product_ids());
        assert_eq!(
            loaded.product(&ProductId::new("1")).unwrap(),
            demo.product(&ProductId::new("1")).unwrap()
        );
    }

    #[test]
    fn test_from_json_rejects_invalid_product() {
        let json = r##"{
            "products": [{
                "id": "7",
                "name": "Scarf",
                "price": {"amount_cents": 1999},
                "description": "Warm",
                "images": [],
                "colors": [{"name": "Grey", "value": "#888888"}],
                "sizes": ["One Size"]
            }]
        }"##;
        let err = MockCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidProduct { .. }));
    }

    #[test]
    fn test_from_json_rejects_bad_rating() {
        let json = r##"{
            "products": [{
                "id": "7",
                "name": "Scarf",
                "price": {"amount_cents": 1999},
                "description": "Warm",
                "images": ["/scarf.svg"],
                "colors": [{"name": "Grey", "value": "#888888"}],
                "sizes": ["One Size"],
                "reviews": [{
                    "id": "r1", "author": "Jo", "rating": 9,
                    "comment": "?", "date": "2024-01-01"
                }]
            }]
        }"##;
        let err = MockCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
