//! Breadcrumb trail.

use storefront_commerce::catalog::Product;
use storefront_render::escape_html;

/// Render `Home / <categories> / <product name>`.
pub fn render_breadcrumb(product: &Product) -> String {
    let mut crumbs = vec![r#"<a href="/">Home</a>"#.to_string()];
    crumbs.extend(product.category_path.iter().map(|c| escape_html(c)));
    crumbs.push(format!(
        r#"<span class="breadcrumb-current">{}</span>"#,
        escape_html(&product.name)
    ));

    format!(
        r#"<nav class="breadcrumb" data-section="breadcrumb">{}</nav>"#,
        crumbs.join(" / ")
    )
}
