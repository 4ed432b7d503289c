//! Hero banner.

use storefront_render::escape_html;

use crate::data::HeroContent;

/// Render the hero banner.
pub fn render_hero(content: &HeroContent) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <h1 class="hero-headline">{}</h1>
        <p class="hero-subheadline">{}</p>
        <div class="hero-actions">
            <a href="{}" class="btn-primary">{}</a>
            <button class="btn-outline">{}</button>
        </div>
    </div>
</section>"#,
        escape_html(&content.headline),
        escape_html(&content.subheadline),
        escape_html(&content.primary_cta_url),
        escape_html(&content.primary_cta_text),
        escape_html(&content.secondary_cta_text)
    )
}
