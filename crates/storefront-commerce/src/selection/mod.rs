//! Product detail page selection state.
//!
//! `ProductDetailState` owns the per-view choices (carousel image, color,
//! size, quantity) for one product and moves between them only through the
//! transition methods or a `ProductIntent`.

mod intent;
mod state;

pub use intent::ProductIntent;
pub use state::{ProductDetailState, SelectionState, DEFAULT_SIZE_INDEX};
