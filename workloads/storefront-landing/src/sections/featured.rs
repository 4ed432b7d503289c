//! Featured products grid.

use storefront_commerce::catalog::{format_rating, ProductSummary};
use storefront_render::escape_html;

use crate::data::FeaturedContent;

/// Render the featured products grid.
pub fn render_featured(content: &FeaturedContent, products: &[ProductSummary]) -> String {
    let cards: String = if products.is_empty() {
        r#"<p class="featured-empty">No featured products right now.</p>"#.to_string()
    } else {
        products.iter().map(render_product_card).collect()
    };

    format!(
        r#"<section class="featured" data-section="featured">
    <h2 class="section-title">{title}</h2>
    <div class="product-grid">
        {cards}
    </div>
    <div class="featured-footer">
        <a href="{url}" class="btn-outline">{view_all}</a>
    </div>
</section>"#,
        title = escape_html(&content.section_title),
        cards = cards,
        url = escape_html(&content.view_all_url),
        view_all = escape_html(&content.view_all_text)
    )
}

fn render_product_card(product: &ProductSummary) -> String {
    format!(
        r#"<article class="product-card">
        <a href="{href}" class="product-card-link">
            <div class="product-card-image"><img src="{image}" alt="{name}"></div>
            <div class="product-card-body">
                <h3 class="product-card-name">{name}</h3>
                <div class="product-card-meta">
                    <span class="product-card-price">{price}</span>
                    <span class="product-card-rating">★ {rating}</span>
                </div>
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
