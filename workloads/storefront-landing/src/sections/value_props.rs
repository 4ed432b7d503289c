//! "Why Shop With Us" value propositions.

use storefront_render::escape_html;

use crate::data::ValuePropsContent;

pub fn render_value_props(content: &ValuePropsContent) -> String {
    let cards: String = content
        .props
        .iter()
        .map(|p| {
            format!(
                r#"<div class="value-card">
            <div class="value-icon">{}</div>
            <h3 class="value-title">{}</h3>
            <p class="value-description">{}</p>
        </div>"#,
                p.icon.svg(),
                escape_html(&p.title),
                escape_html(&p.description)
            )
        })
        .collect();

    format!(
        r#"<section class="value-props" data-section="value-props">
    <h2 class="section-title">{}</h2>
    <div class="value-grid">
        {}
    </div>
</section>"#,
        escape_html(&content.section_title),
        cards
    )
}
