//! Product title, rating and price block.

use storefront_commerce::catalog::{filled_stars, format_rating};
use storefront_commerce::selection::ProductDetailState;
use storefront_render::escape_html;

/// Render the product info header.
pub fn render_info(state: &ProductDetailState) -> String {
    let product = state.product();
    let average = state.average_rating();

    let badge = product
        .badge
        .as_ref()
        .map(|b| format!(r#"<span class="product-badge">{}</span>"#, escape_html(b)))
        .unwrap_or_default();

    format!(
        r#"<div class="product-info" data-section="info">
        {badge}
        <h1 class="product-name">{name}</h1>
        <div class="product-rating">
            <span class="rating-stars" aria-label="{rating} out of 5">{stars}</span>
            <span class="rating-summary">{rating} ({count} reviews)</span>
        </div>
        <div class="product-price">{price}</div>
        <p class="product-description">{description}</p>
    </div>"#,
        badge = badge,
        name = escape_html(&product.name),
        stars = render_star_rating(average),
        rating = format_rating(average),
        count = product.reviews.len(),
        price = escape_html(&product.price.display()),
        description = escape_html(&product.description)
    )
}

/// Five stars, filled up to the rounded-down average.
pub fn render_star_rating(average: f64) -> String {
    let filled = filled_stars(average);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
