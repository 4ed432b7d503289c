//! Catalog types and product-page selection state for the storefront.
//!
//! This crate provides the domain layer shared by the storefront pages:
//!
//! - **Catalog**: Products, color options, reviews, product summaries and
//!   the `ProductProvider` boundary with an in-memory `MockCatalog`
//! - **Selection**: `ProductDetailState`, the per-view state machine behind
//!   the product detail page (image carousel, color, size, quantity)
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = MockCatalog::demo();
//! let product = catalog.product(&ProductId::new("1")).unwrap();
//!
//! let mut state = ProductDetailState::new(product);
//! state.select_next_image();
//! state.select_size("L").unwrap();
//! state.increment_quantity();
//!
//! assert_eq!(state.selection().selected_image_index, 1);
//! assert_eq!(state.selection().quantity, 2);
//! assert_eq!(format_rating(state.average_rating()), "4.7");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod selection;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        average_rating, filled_stars, format_rating, ColorOption, MockCatalog, Product,
        ProductProvider, ProductSummary, Rating, RatingDistribution, Review,
    };

    // Selection
    pub use crate::selection::{
        ProductDetailState, ProductIntent, SelectionState, DEFAULT_SIZE_INDEX,
    };
}
