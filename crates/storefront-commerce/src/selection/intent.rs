//! User intents on the product detail page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A discrete user action on the product page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum ProductIntent {
    /// Carousel "previous" arrow.
    PreviousImage,
    /// Carousel "next" arrow.
    NextImage,
    /// Thumbnail click.
    SelectImage(usize),
    /// Color swatch click, by color name.
    SelectColor(String),
    /// Size button click, by size label.
    SelectSize(String),
    IncrementQuantity,
    DecrementQuantity,
}

impl ProductIntent {
    /// Short name for logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreviousImage => "previous_image",
            Self::NextImage => "next_image",
            Self::SelectImage(_) => "select_image",
            Self::SelectColor(_) => "select_color",
            Self::SelectSize(_) => "select_size",
            Self::IncrementQuantity => "increment_quantity",
            Self::DecrementQuantity => "decrement_quantity",
        }
    }
}

/// Parses the compact form: `prev`, `next`, `image:<n>`, `color:<name>`,
/// `size:<label>`, `inc` / `+`, `dec` / `-`.
impl FromStr for ProductIntent {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CommerceError::InvalidIntent(s.to_string());

        if let Some((kind, value)) = s.split_once(':') {
            let value = value.trim();
            if value.is_empty() {
                return Err(invalid());
            }
            return match kind.trim().to_lowercase().as_str() {
                "image" | "img" => value
                    .parse()
                    .map(Self::SelectImage)
                    .map_err(|_| invalid()),
                "color" | "colour" => Ok(Self::SelectColor(value.to_string())),
                "size" => Ok(Self::SelectSize(value.to_string())),
                _ => Err(invalid()),
            };
        }

        match s.to_lowercase().as_str() {
            "prev" | "previous" => Ok(Self::PreviousImage),
            "next" => Ok(Self::NextImage),
            "inc" | "+" => Ok(Self::IncrementQuantity),
            "dec" | "-" => Ok(Self::DecrementQuantity),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ProductIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreviousImage => write!(f, "prev"),
            Self::NextImage => write!(f, "next"),
            Self::SelectImage(index) => write!(f, "image:{}", index),
            Self::SelectColor(name) => write!(f, "color:{}", name),
            Self::SelectSize(size) => write!(f, "size:{}", size),
            Self::IncrementQuantity => write!(f, "inc"),
            Self::DecrementQuantity => write!(f, "dec"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_intents() {
        assert_eq!("prev".parse::<ProductIntent>().unwrap(), ProductIntent::PreviousImage);
        assert_eq!("Next".parse::<ProductIntent>().unwrap(), ProductIntent::NextImage);
        assert_eq!("+".parse::<ProductIntent>().unwrap(), ProductIntent::IncrementQuantity);
        assert_eq!(" dec ".parse::<ProductIntent>().unwrap(), ProductIntent::DecrementQuantity);
    }

    #[test]
    fn test_parse_valued_intents() {
        assert_eq!(
            "image:2".parse::<ProductIntent>().unwrap(),
            ProductIntent::SelectImage(2)
        );
        assert_eq!(
            "color:Navy".parse::<ProductIntent>().unwrap(),
            ProductIntent::SelectColor("Navy".to_string())
        );
        assert_eq!(
            "size: XL".parse::<ProductIntent>().unwrap(),
            ProductIntent::SelectSize("XL".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "jump", "image:-1", "image:x", "color:", "shade:Red"] {
            let err = input.parse::<ProductIntent>().unwrap_err();
            assert!(matches!(err, CommerceError::InvalidIntent(_)), "{input}");
        }
    }

    #[test]
    fn test_display_parses_back() {
        let intent = ProductIntent::SelectColor("Red".to_string());
        assert_eq!(intent.to_string().parse::<ProductIntent>().unwrap(), intent);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&ProductIntent::SelectSize("L".into())).unwrap();
        assert_eq!(json, r#"{"intent":"select_size","value":"L"}"#);
    }
}
