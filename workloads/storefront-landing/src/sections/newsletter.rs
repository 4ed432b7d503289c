//! Newsletter signup section.

use storefront_render::escape_html;

use crate::data::NewsletterContent;

/// Render the newsletter signup form.
///
/// The form has no submission handler; it is markup only.
pub fn render_newsletter(content: &NewsletterContent) -> String {
    format!(
        r#"<section class="newsletter" data-section="newsletter">
    <div class="newsletter-content">
        <h2>{}</h2>
        <p>{}</p>
        <form class="newsletter-form" id="newsletter-form">
            <input type="email" name="email" placeholder="{}" required aria-label="Email address">
            <button type="submit">{}</button>
        </form>
    </div>
</section>"#,
        escape_html(&content.headline),
        escape_html(&content.description),
        escape_html(&content.placeholder),
        escape_html(&content.button_text)
    )
}
