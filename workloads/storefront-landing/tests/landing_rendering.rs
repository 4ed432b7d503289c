use storefront_commerce::prelude::*;
use storefront_landing::{
    render_featured, render_hero, render_landing_to_string, FeaturedContent, HeroContent,
    PAGE_NAME,
};
use storefront_observability::{LogLevel, StructuredLogger};

#[test]
fn test_landing_section_order() {
    let (logger, capture) = StructuredLogger::captured(SessionId::new("landing"));
    let (html, metrics) = render_landing_to_string(&MockCatalog::demo(), &logger).unwrap();

    let positions: Vec<usize> = ["hero", "featured", "value-props", "newsletter"]
        .iter()
        .map(|name| html.find(&format!("data-section=\"{}\"", name)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(metrics.page.as_deref(), Some(PAGE_NAME));
    assert_eq!(metrics.sections.len(), 4);
    assert_eq!(capture.at_level(LogLevel::Info).len(), 1);
}

#[test]
fn test_landing_copy() {
    let logger = StructuredLogger::captured(SessionId::new("copy")).0;
    let (html, _) = render_landing_to_string(&MockCatalog::demo(), &logger).unwrap();

    for text in [
        "Modern Fashion for Everyone",
        "Shop Now",
        "View Collections",
        "Featured Products",
        "View All Products",
        "Premium Quality",
        "Secure Shopping",
        "Fast Delivery",
        "Stay Updated",
        "Subscribe",
    ] {
        assert!(html.contains(text), "missing {:?}", text);
    }
}

#[test]
fn test_hero_links_to_first_product() {
    let html = render_hero(&HeroContent::default());
    assert!(html.contains(r#"href="/product/1""#));
}

#[test]
fn test_featured_cards() {
    let featured = MockCatalog::demo().featured();
    let html = render_featured(&FeaturedContent::default(), &featured);

    assert_eq!(html.matches(r#"<article class="product-card">"#).count(), 4);
    assert!(html.contains(r#"href="/product/4""#));
    assert!(html.contains("$59.99"));
    assert!(html.contains("★ 4.8"));
}

#[test]
fn test_featured_empty() {
    let html = render_featured(&FeaturedContent::default(), &[]);
    assert!(html.contains("No featured products right now."));
}

#[test]
fn test_featured_links_resolve() {
    let catalog = MockCatalog::demo();
    for summary in catalog.featured() {
        assert!(catalog.product(&summary.id).is_ok());
    }
}
