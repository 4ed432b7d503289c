//! Storefront landing page.
//!
//! Sections, in page order:
//! - Hero banner with the "Shop Now" entry into the product page
//! - Featured products from the catalog
//! - Value propositions
//! - Newsletter signup

mod data;
mod sections;

use std::io::Write;

use anyhow::Context;

use storefront_commerce::catalog::ProductProvider;
use storefront_observability::{PageMetrics, RenderMetrics, StructuredLogger};
use storefront_render::{HeadContent, PageWriter, Shell};

pub use data::*;
pub use sections::{render_featured, render_hero, render_newsletter, render_value_props};

/// Page name used in logs and metrics.
pub const PAGE_NAME: &str = "landing";

/// Create the landing page shell.
pub fn landing_shell() -> Shell {
    let head = HeadContent::new("Modern Fashion for Everyone | Storefront")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "High-quality clothing and accessories designed for comfort and style.",
        )
        .with_style(LANDING_STYLES);

    Shell::new(head)
        .with_body_start(
            r#"<body>
<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">Storefront</a>
        <div class="nav-links">
            <a href="/products">Products</a>
            <a href="/product/1">New Arrivals</a>
        </div>
    </nav>
</header>
<main>
"#,
        )
        .with_body_end(
            r#"
</main>
<footer class="site-footer">
    <p>&copy; Storefront. All rights reserved.</p>
</footer>
</body>
</html>"#
                .to_string(),
        )
}

/// Write the landing page into `out`.
pub fn render_landing<P, W>(
    provider: &P,
    content: &LandingPageContent,
    out: W,
    metrics: &mut RenderMetrics,
    logger: &StructuredLogger,
) -> anyhow::Result<W>
where
    P: ProductProvider + ?Sized,
    W: Write,
{
    let shell = landing_shell();
    let mut writer = PageWriter::new(out);

    writer
        .write_shell(&shell)
        .context("failed to write landing shell")?;
    metrics.record_shell_written();
    logger.debug("Shell written");

    let featured = provider.featured();
    logger
        .debug_builder("Featured products loaded")
        .field_i64("count", featured.len() as i64)
        .emit();

    let hero = || render_hero(&content.hero);
    let featured_grid = || render_featured(&content.featured, &featured);
    let value_props = || render_value_props(&content.value_props);
    let newsletter = || render_newsletter(&content.newsletter);
    let sections: [Section<'_>; 4] = [
        ("hero", &hero),
        ("featured", &featured_grid),
        ("value-props", &value_props),
        ("newsletter", &newsletter),
    ];
    write_sections(&mut writer, &sections, metrics)?;

    writer.finish(&shell).context("failed to close landing page")?;
    logger
        .info_builder("Landing page rendered")
        .field_i64("bytes", writer.bytes_written() as i64)
        .emit();

    Ok(writer.into_inner())
}

/// A named section and the function that renders it.
type Section<'a> = (&'a str, &'a dyn Fn() -> String);

/// Render each section between its start and end marks so that its
/// recorded duration covers the render as well as the write.
fn write_sections<W: Write>(
    writer: &mut PageWriter<W>,
    sections: &[Section<'_>],
    metrics: &mut RenderMetrics,
) -> anyhow::Result<()> {
    for &(name, render) in sections {
        metrics.record_section_start(name);
        let html = render();
        writer
            .write_section(name, &html)
            .with_context(|| format!("failed to write section '{}'", name))?;
        metrics.record_section_rendered(name, html.len());
    }
    Ok(())
}

/// Render the landing page with default content into a string.
pub fn render_landing_to_string<P>(
    provider: &P,
    logger: &StructuredLogger,
) -> anyhow::Result<(String, PageMetrics)>
where
    P: ProductProvider + ?Sized,
{
    let mut metrics = RenderMetrics::new(logger.session_id().clone());
    metrics.set_page(PAGE_NAME);

    let content = LandingPageContent::default();
    let bytes = render_landing(provider, &content, Vec::new(), &mut metrics, logger)?;
    let html = String::from_utf8(bytes).context("rendered landing page is not valid UTF-8")?;
    Ok((html, metrics.finalize()))
}

const LANDING_STYLES: &str = r##"
:root {
    --primary: #111827;
    --bg: #ffffff;
    --bg-muted: #f4f4f5;
    --text: #111827;
    --text-muted: #6b7280;
    --border: #e5e7eb;
    --star: #facc15;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}

.site-header { border-bottom: 1px solid var(--border); }
.nav-container { max-width: 1200px; margin: 0 auto; padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: center; }
.logo { font-weight: 700; font-size: 1.25rem; color: var(--text); text-decoration: none; }
.nav-links a { margin-left: 1.5rem; color: var(--text-muted); text-decoration: none; }

.btn-primary { display: inline-block; background: var(--primary); color: white; padding: 0.75rem 2rem; border-radius: 6px; text-decoration: none; }
.btn-outline { display: inline-block; background: transparent; color: var(--text); border: 1px solid var(--border); padding: 0.75rem 2rem; border-radius: 6px; text-decoration: none; cursor: pointer; font-size: 1rem; }

.hero { background: var(--bg-muted); padding: 6rem 2rem; text-align: center; }
.hero-headline { font-size: 3rem; margin-bottom: 1.5rem; }
.hero-subheadline { font-size: 1.25rem; color: var(--text-muted); max-width: 42rem; margin: 0 auto 2rem; }
.hero-actions { display: flex; justify-content: center; gap: 1rem; }

.section-title { font-size: 2rem; text-align: center; margin-bottom: 2rem; }

.featured { max-width: 1200px; margin: 0 auto; padding: 4rem 2rem; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.product-card { border: 1px solid var(--border); border-radius: 8px; overflow: hidden; }
.product-card-link { color: inherit; text-decoration: none; display: block; }
.product-card-image img { width: 100%; aspect-ratio: 1; object-fit: cover; transition: transform 0.2s; }
.product-card:hover .product-card-image img { transform: scale(1.05); }
.product-card-body { padding: 1rem; }
.product-card-name { font-size: 1rem; font-weight: 500; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.product-card-meta { display: flex; justify-content: space-between; margin-top: 0.25rem; }
.product-card-price { font-weight: 700; }
.product-card-rating::first-letter { color: var(--star); }
.featured-footer { text-align: center; margin-top: 2.5rem; }

.value-props { background: var(--bg-muted); padding: 4rem 2rem; }
.value-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
.value-card { text-align: center; padding: 1.5rem; }
.value-icon { width: 4rem; height: 4rem; border-radius: 50%; background: rgba(17, 24, 39, 0.1); display: flex; align-items: center; justify-content: center; margin: 0 auto 1rem; }
.value-title { font-size: 1.25rem; margin-bottom: 0.5rem; }
.value-description { color: var(--text-muted); }

.newsletter { padding: 4rem 2rem; text-align: center; }
.newsletter h2 { font-size: 2rem; margin-bottom: 1rem; }
.newsletter p { color: var(--text-muted); max-width: 36rem; margin: 0 auto 2rem; }
.newsletter-form { display: flex; gap: 0.5rem; max-width: 28rem; margin: 0 auto; }
.newsletter-form input { flex: 1; height: 2.5rem; padding: 0 0.75rem; border: 1px solid var(--border); border-radius: 6px; }
.newsletter-form button { background: var(--primary); color: white; border: none; padding: 0 1.5rem; border-radius: 6px; cursor: pointer; }

.site-footer { border-top: 1px solid var(--border); padding: 2rem; text-align: center; color: var(--text-muted); }

@media (max-width: 768px) {
    .hero-headline { font-size: 2.25rem; }
    .value-grid { grid-template-columns: 1fr; }
    .newsletter-form { flex-direction: column; }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use storefront_commerce::SessionId;

    #[test]
    fn test_section_duration_includes_render() {
        let shell = landing_shell();
        let mut writer = PageWriter::new(Vec::new());
        writer.write_shell(&shell).unwrap();
        let mut metrics = RenderMetrics::new(SessionId::new("slow"));

        let slow = || {
            std::thread::sleep(Duration::from_millis(5));
            "<section>slow</section>".to_string()
        };
        let fast = || "<section>fast</section>".to_string();
        write_sections(&mut writer, &[("slow", &slow), ("fast", &fast)], &mut metrics).unwrap();

        let page = metrics.finalize();
        assert!(page.sections["slow"].duration_us >= 5_000);
        assert_eq!(page.sections["fast"].bytes, "<section>fast</section>".len());
    }
}
