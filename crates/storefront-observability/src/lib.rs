//! Structured logging and render metrics for storefront pages.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging scoped to one page view
//! - `RenderMetrics` - Per-section render timings and sizes

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export SessionId from storefront-commerce for convenience
pub use storefront_commerce::SessionId;
