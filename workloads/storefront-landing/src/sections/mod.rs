//! Landing page section renderers.

mod featured;
mod hero;
mod newsletter;
mod value_props;

pub use featured::render_featured;
pub use hero::render_hero;
pub use newsletter::render_newsletter;
pub use value_props::render_value_props;
