//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and selection operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Image index outside the product's gallery.
    #[error("Image index {index} out of range for {count} images")]
    ImageIndexOutOfRange { index: usize, count: usize },

    /// Color not offered for the product.
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Size not offered for the product.
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// Review rating outside 1..=5.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(i64),

    /// Intent text that could not be parsed.
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    /// Product data violating catalog invariants.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
