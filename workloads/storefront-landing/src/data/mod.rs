//! Landing page content models.

mod content;

pub use content::*;
