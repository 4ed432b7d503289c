//! Static landing page copy.

use serde::{Deserialize, Serialize};

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta_text: String,
    pub primary_cta_url: String,
    /// Secondary button label. The button has no destination.
    pub secondary_cta_text: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Modern Fashion for Everyone".to_string(),
            subheadline: "Discover our latest collection of high-quality clothing and accessories designed for comfort and style.".to_string(),
            primary_cta_text: "Shop Now".to_string(),
            primary_cta_url: "/product/1".to_string(),
            secondary_cta_text: "View Collections".to_string(),
        }
    }
}

/// Featured products grid heading and footer link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedContent {
    pub section_title: String,
    pub view_all_text: String,
    pub view_all_url: String,
}

impl Default for FeaturedContent {
    fn default() -> Self {
        Self {
            section_title: "Featured Products".to_string(),
            view_all_text: "View All Products".to_string(),
            view_all_url: "/products".to_string(),
        }
    }
}

/// Icon shown above a value proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueIcon {
    Quality,
    Shield,
    Delivery,
}

impl ValueIcon {
    /// Inline SVG for the icon.
    pub fn svg(&self) -> &'static str {
        match self {
            Self::Quality => {
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M5 12h14"></path><path d="M12 5v14"></path></svg>"#
            }
            Self::Shield => {
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"></path></svg>"#
            }
            Self::Delivery => {
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="2" y="4" width="20" height="16" rx="2"></rect><path d="M7 15h0"></path><path d="M2 9.5h20"></path></svg>"#
            }
        }
    }
}

/// One value proposition card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueProp {
    pub icon: ValueIcon,
    pub title: String,
    pub description: String,
}

impl ValueProp {
    pub fn new(icon: ValueIcon, title: &str, description: &str) -> Self {
        Self {
            icon,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// "Why Shop With Us" section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuePropsContent {
    pub section_title: String,
    pub props: Vec<ValueProp>,
}

impl Default for ValuePropsContent {
    fn default() -> Self {
        Self {
            section_title: "Why Shop With Us".to_string(),
            props: vec![
                ValueProp::new(
                    ValueIcon::Quality,
                    "Premium Quality",
                    "All our products are made with the highest quality materials for durability and comfort.",
                ),
                ValueProp::new(
                    ValueIcon::Shield,
                    "Secure Shopping",
                    "Your data is protected with industry-leading security measures for peace of mind.",
                ),
                ValueProp::new(
                    ValueIcon::Delivery,
                    "Fast Delivery",
                    "Get your orders delivered quickly with our efficient shipping partners worldwide.",
                ),
            ],
        }
    }
}

/// Newsletter signup copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterContent {
    pub headline: String,
    pub description: String,
    pub placeholder: String,
    pub button_text: String,
}

impl Default for NewsletterContent {
    fn default() -> Self {
        Self {
            headline: "Stay Updated".to_string(),
            description: "Subscribe to our newsletter to receive updates on new arrivals, special offers, and exclusive discounts.".to_string(),
            placeholder: "Enter your email".to_string(),
            button_text: "Subscribe".to_string(),
        }
    }
}

/// Complete landing page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandingPageContent {
    pub hero: HeroContent,
    pub featured: FeaturedContent,
    pub value_props: ValuePropsContent,
    pub newsletter: NewsletterContent,
}

impl LandingPageContent {
    /// Load content from JSON. Missing sections are an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
