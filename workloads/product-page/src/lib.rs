//! Product detail page.
//!
//! Renders a `ProductDetailState` as a full HTML page through a shell-first
//! `PageWriter`, and drives interactive page views with `ProductPageSession`:
//! every accepted intent mutates the selection and re-renders the page.

mod sections;
mod session;

use std::io::Write;

use anyhow::Context;

use storefront_commerce::catalog::Product;
use storefront_commerce::selection::ProductDetailState;
use storefront_observability::{PageMetrics, RenderMetrics, SessionId};
use storefront_render::{escape_html, HeadContent, PageWriter, Shell};

pub use sections::*;
pub use session::ProductPageSession;

/// Page name used in logs and metrics.
pub const PAGE_NAME: &str = "product-page";

/// Build the page shell for a product.
pub fn product_shell(product: &Product) -> Shell {
    Shell::new(
        HeadContent::new(format!("{} | Storefront", product.name))
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", &product.description)
            .with_style(PDP_STYLES),
    )
    .with_body_start(format!(
        r#"<body>
    <header class="site-header">
        <a href="/" class="site-logo">Storefront</a>
    </header>
    <main class="pdp-container" data-product-id="{}">
"#,
        escape_html(product.id.as_str())
    ))
    .with_body_end(
        r#"
    </main>
    <footer class="site-footer">
        <p>Storefront</p>
    </footer>
</body>
</html>"#
            .to_string(),
    )
}

/// Render the hero row: gallery on one side, info, options and purchase on
/// the other.
pub fn render_hero(state: &ProductDetailState) -> String {
    format!(
        r#"<section class="product-hero" data-section="hero">
    {gallery}
    <div class="product-details">
        {info}
        {options}
        {purchase}
    </div>
</section>"#,
        gallery = render_gallery(state),
        info = render_info(state),
        options = render_options(state),
        purchase = render_purchase(state)
    )
}

/// Write the full page for `state` into `out`, recording per-section metrics.
///
/// Sections are written in page order: breadcrumb, hero, tabs, related.
pub fn render_page<W: Write>(
    state: &ProductDetailState,
    out: W,
    metrics: &mut RenderMetrics,
) -> anyhow::Result<W> {
    let product = state.product();
    let shell = product_shell(product);
    let mut writer = PageWriter::new(out);

    writer
        .write_shell(&shell)
        .context("failed to write page shell")?;
    metrics.record_shell_written();

    let sections: [(&str, fn(&ProductDetailState) -> String); 4] = [
        ("breadcrumb", |s| render_breadcrumb(s.product())),
        ("hero", render_hero),
        ("tabs", |s| render_tabs(s.product())),
        ("related", |s| render_related(&s.product().related)),
    ];

    for (name, render) in sections {
        metrics.record_section_start(name);
        let html = render(state);
        writer
            .write_section(name, &html)
            .with_context(|| format!("failed to write section '{}'", name))?;
        metrics.record_section_rendered(name, html.len());
    }

    writer.finish(&shell).context("failed to close page")?;
    Ok(writer.into_inner())
}

/// Render the page into a string and return it with its metrics.
pub fn render_to_string(
    state: &ProductDetailState,
    session_id: SessionId,
) -> anyhow::Result<(String, PageMetrics)> {
    let mut metrics = RenderMetrics::new(session_id);
    metrics.set_page(PAGE_NAME);

    let bytes = render_page(state, Vec::new(), &mut metrics)?;
    let html = String::from_utf8(bytes).context("rendered page is not valid UTF-8")?;
    Ok((html, metrics.finalize()))
}

/// CSS styles for the product page.
const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #fafafa; color: #111; }
.site-header { background: #111; color: white; padding: 1rem 2rem; }
.site-logo { color: white; font-weight: bold; text-decoration: none; }
.site-footer { background: #111; color: white; padding: 2rem; text-align: center; margin-top: 2rem; }
.pdp-container { max-width: 1200px; margin: 0 auto; padding: 2rem; }

/* Breadcrumb */
.breadcrumb { font-size: 0.875rem; color: #666; margin-bottom: 1.5rem; }
.breadcrumb a { color: #666; }
.breadcrumb-current { color: #111; }

/* Hero */
.product-hero { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; margin-bottom: 2rem; }
.gallery-main { position: relative; background: #f0f0f0; border-radius: 8px; overflow: hidden; }
.gallery-image { width: 100%; aspect-ratio: 1; object-fit: cover; }
.gallery-nav { position: absolute; top: 50%; transform: translateY(-50%); background: rgba(255,255,255,0.8); border: none; border-radius: 50%; width: 2.5rem; height: 2.5rem; cursor: pointer; }
.gallery-prev { left: 1rem; }
.gallery-next { right: 1rem; }
.gallery-thumbnails { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.5rem; margin-top: 1rem; }
.gallery-thumbnail { border: 2px solid transparent; border-radius: 4px; padding: 0; background: none; cursor: pointer; }
.gallery-thumbnail.selected { border-color: #111; }
.gallery-thumbnail img { width: 100%; aspect-ratio: 1; object-fit: cover; }
.product-badge { background: #111; color: white; font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 4px; }
.product-name { font-size: 2rem; margin: 0.5rem 0; }
.rating-stars { color: #f5a623; }
.rating-summary { color: #666; margin-left: 0.5rem; font-size: 0.875rem; }
.product-price { font-size: 1.5rem; font-weight: bold; margin: 1rem 0; }
.product-description { color: #555; line-height: 1.6; }

/* Options */
.option-group { margin: 1.5rem 0; }
.option-header { display: flex; justify-content: space-between; align-items: center; }
.option-label { font-size: 0.875rem; font-weight: 600; }
.color-swatches, .size-buttons { display: flex; gap: 0.5rem; flex-wrap: wrap; }
.color-swatch { width: 2rem; height: 2rem; border-radius: 50%; border: 2px solid #ddd; cursor: pointer; }
.color-swatch.selected { outline: 2px solid #111; outline-offset: 2px; }
.size-button { min-width: 3rem; padding: 0.5rem; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; }
.size-button.selected { background: #111; color: white; border-color: #111; }
.size-guide { font-size: 0.875rem; color: #666; }

/* Purchase */
.product-purchase { display: flex; gap: 1rem; align-items: center; }
.quantity-stepper { display: flex; align-items: center; border: 1px solid #ddd; border-radius: 4px; }
.quantity-stepper button { width: 2.5rem; height: 2.5rem; border: none; background: none; cursor: pointer; }
.quantity-stepper button:disabled { opacity: 0.4; cursor: not-allowed; }
.quantity-value { min-width: 2rem; text-align: center; }
.btn-add-to-cart { flex: 1; background: #111; color: white; border: none; padding: 0.75rem 2rem; font-size: 1rem; border-radius: 4px; cursor: pointer; }
.btn-wishlist { width: 2.75rem; height: 2.75rem; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; }

/* Tabs */
.product-tabs { background: white; padding: 2rem; border-radius: 8px; margin-bottom: 2rem; }
.tab-list { display: flex; gap: 1rem; border-bottom: 1px solid #eee; margin-bottom: 1rem; }
.tab { background: none; border: none; padding: 0.75rem 0; cursor: pointer; color: #666; }
.tab.active { color: #111; border-bottom: 2px solid #111; }
.tab-panel { display: none; line-height: 1.6; }
.tab-panel.active { display: block; }
.reviews-summary { display: flex; gap: 2rem; align-items: center; margin-bottom: 1rem; }
.rating-number { font-size: 2.5rem; font-weight: bold; }
.rating-distribution { flex: 1; }
.rating-bar { display: flex; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }
.rating-bar-track { flex: 1; height: 8px; background: #eee; border-radius: 4px; }
.rating-bar-fill { height: 100%; background: #f5a623; border-radius: 4px; }
.btn-write-review { border: 1px solid #111; background: white; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer; }
.review { border-bottom: 1px solid #eee; padding: 1rem 0; }
.review-header { display: flex; justify-content: space-between; }
.review-author { font-weight: 600; }
.review-date { color: #888; font-size: 0.875rem; }
.review-stars { color: #f5a623; }
.review-body { color: #555; }

/* Related */
.related-header { display: flex; justify-content: space-between; align-items: center; }
.related-nav-button { width: 2rem; height: 2rem; border: 1px solid #ddd; background: white; border-radius: 6px; cursor: pointer; margin-left: 0.5rem; }
.related-media { position: relative; }
.related-overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.4); opacity: 0; transition: opacity 0.2s; display: flex; align-items: center; justify-content: center; }
.related-card:hover .related-overlay { opacity: 1; }
.quick-add { background: white; border: none; padding: 0.5rem 1rem; border-radius: 6px; cursor: pointer; }
.related-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-top: 1rem; }
.related-card { background: white; border-radius: 8px; overflow: hidden; }
.related-link { text-decoration: none; color: inherit; }
.related-image { width: 100%; aspect-ratio: 1; object-fit: cover; }
.related-info { padding: 1rem; }
.related-name { font-size: 0.9rem; margin: 0 0 0.5rem 0; }
.related-price { font-weight: bold; margin: 0; }
.related-rating { font-size: 0.875rem; color: #666; margin: 0.25rem 0 0 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::prelude::*;

    fn demo_state() -> ProductDetailState {
        let product = MockCatalog::demo()
            .product(&ProductId::new("1"))
            .unwrap();
        ProductDetailState::new(product)
    }

    #[test]
    fn test_render_page_section_order() {
        let state = demo_state();
        let (html, metrics) = render_to_string(&state, SessionId::new("test")).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));

        let positions: Vec<usize> = ["breadcrumb", "hero", "tabs", "related"]
            .iter()
            .map(|name| html.find(&format!("data-section=\"{}\"", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(metrics.sections.len(), 4);
        assert_eq!(metrics.page.as_deref(), Some(PAGE_NAME));
        assert!(metrics.time_to_shell_us.is_some());
    }

    #[test]
    fn test_shell_title_uses_product_name() {
        let state = demo_state();
        let opening = product_shell(state.product()).render_opening();
        assert!(opening.contains("<title>Premium Cotton T-Shirt | Storefront</title>"));
    }

    #[test]
    fn test_hero_contains_interactive_sections() {
        let hero = render_hero(&demo_state());
        for section in ["gallery", "info", "options", "purchase"] {
            assert!(hero.contains(&format!("data-section=\"{}\"", section)));
        }
    }
}
