//! HTML shell and shell-first page writer for storefront pages.
//!
//! This crate enforces the shell-first page structure:
//! - `Shell` / `HeadContent` - Document skeleton around the sections
//! - `PageWriter` - Writes shell, named sections and closing in order
//! - `escape_html` - Escaping for interpolated text

mod error;
mod escape;
mod shell;
mod writer;

pub use error::*;
pub use escape::*;
pub use shell::*;
pub use writer::*;
