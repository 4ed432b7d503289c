//! Details, features and reviews tabs.

use storefront_commerce::catalog::{
    format_rating, Product, RatingDistribution, Review, MAX_STARS,
};
use storefront_render::escape_html;

use super::info::render_star_rating;

/// Render the tab strip and all three panels.
///
/// Every panel is rendered; the first one is active.
pub fn render_tabs(product: &Product) -> String {
    format!(
        r#"<section class="product-tabs" data-section="tabs">
    <div class="tab-list" role="tablist">
        <button class="tab active" role="tab" data-tab="details">Details</button>
        <button class="tab" role="tab" data-tab="features">Features</button>
        <button class="tab" role="tab" data-tab="reviews">Reviews ({count})</button>
    </div>
    {details}
    {features}
    {reviews}
</section>"#,
        count = product.reviews.len(),
        details = render_details_panel(product),
        features = render_features_panel(product),
        reviews = render_reviews_panel(product)
    )
}

fn render_details_panel(product: &Product) -> String {
    let paragraphs: String = product
        .details
        .iter()
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect();

    format!(
        r#"<div class="tab-panel active" role="tabpanel" data-panel="details">{}</div>"#,
        paragraphs
    )
}

fn render_features_panel(product: &Product) -> String {
    let items: String = product
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect();

    format!(
        r#"<div class="tab-panel" role="tabpanel" data-panel="features"><ul class="feature-list">{}</ul></div>"#,
        items
    )
}

fn render_reviews_panel(product: &Product) -> String {
    let average = product.average_rating();
    let distribution = RatingDistribution::from_reviews(&product.reviews);

    let bars: String = (1..=MAX_STARS)
        .rev()
        .map(|stars| {
            let pct = distribution.percentage(stars);
            format!(
                r#"<div class="rating-bar">
                <span class="rating-label">{stars} star</span>
                <div class="rating-bar-track"><div class="rating-bar-fill" style="width: {pct:.0}%"></div></div>
                <span class="rating-count">{count}</span>
            </div>"#,
                stars = stars,
                pct = pct,
                count = distribution.count(stars)
            )
        })
        .collect();

    let reviews: String = if product.reviews.is_empty() {
        r#"<p class="reviews-empty">No reviews yet.</p>"#.to_string()
    } else {
        product.reviews.iter().map(render_single_review).collect()
    };

    format!(
        r#"<div class="tab-panel" role="tabpanel" data-panel="reviews">
        <div class="reviews-summary">
            <span class="rating-number">{rating}</span>
            <span class="rating-stars">{stars}</span>
            <div class="rating-distribution">{bars}</div>
        </div>
        <button class="btn-write-review">Write a Review</button>
        <div class="reviews-list">{reviews}</div>
    </div>"#,
        rating = format_rating(average),
        stars = render_star_rating(average),
        bars = bars,
        reviews = reviews
    )
}

fn render_single_review(review: &Review) -> String {
    format!(
        r#"<article class="review">
            <header class="review-header">
                <span class="review-author">{author}</span>
                <span class="review-date">{date}</span>
            </header>
            <span class="review-stars" aria-label="{rating} out of 5">{stars}</span>
            <p class="review-body">{comment}</p>
        </article>"#,
        author = escape_html(&review.author),
        date = review.date.format("%Y-%m-%d"),
        rating = review.rating.stars(),
        stars = review.render_stars(),
        comment = escape_html(&review.comment)
    )
}
