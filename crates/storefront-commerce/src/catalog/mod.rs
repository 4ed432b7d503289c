//! Product catalog module.
//!
//! Contains products, color options, reviews, product summaries and the
//! provider boundary pages use to look products up.

mod product;
mod provider;
mod review;

pub use product::{ColorOption, Product, ProductSummary};
pub use provider::{CatalogDocument, MockCatalog, ProductProvider};
pub use review::{
    average_rating, filled_stars, format_rating, Rating, RatingDistribution, Review, MAX_STARS,
};
