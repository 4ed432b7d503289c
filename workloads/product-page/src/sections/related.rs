//! "You May Also Like" row.

use storefront_commerce::catalog::{format_rating, ProductSummary};
use storefront_render::escape_html;

/// Render related product cards. Empty input renders nothing.
///
/// The carousel arrows and "Quick Add" buttons are presentational.
pub fn render_related(products: &[ProductSummary]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let cards: String = products.iter().map(render_related_card).collect();

    format!(
        r#"<section class="related-products" data-section="related">
    <div class="related-header">
        <h2>You May Also Like</h2>
        <div class="related-nav">
            <button type="button" class="related-nav-button" aria-label="Previous products">&#8249;</button>
            <button type="button" class="related-nav-button" aria-label="Next products">&#8250;</button>
        </div>
    </div>
    <div class="related-grid">
        {cards}
    </div>
</section>"#,
        cards = cards
    )
}

fn render_related_card(product: &ProductSummary) -> String {
    format!(
        r#"<article class="related-card">
        <div class="related-media">
            <a href="{href}"><img src="{image}" alt="{name}" class="related-image"></a>
            <div class="related-overlay">
                <button type="button" class="quick-add">Quick Add</button>
            </div>
        </div>
        <a href="{href}" class="related-link">
            <div class="related-info">
                <h3 class="related-name">{name}</h3>
                <p class="related-price">{price}</p>
                <p class="related-rating">★ {rating}</p>
            </div>
        </a>
    </article>"#,
        href = escape_html(&product.href()),
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        price = escape_html(&product.price.display()),
        rating = format_rating(product.rating)
    )
}
