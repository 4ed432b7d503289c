//! Section renderers for the product detail page.

mod breadcrumb;
mod gallery;
mod info;
mod options;
mod purchase;
mod related;
mod tabs;

pub use breadcrumb::*;
pub use gallery::*;
pub use info::*;
pub use options::*;
pub use purchase::*;
pub use related::*;
pub use tabs::*;
