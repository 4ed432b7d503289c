//! Selection state and transitions for one product page view.

use serde::{Deserialize, Serialize};

use crate::catalog::{ColorOption, Product};
use crate::error::CommerceError;
use crate::selection::ProductIntent;

/// Position in `Product::sizes` selected when a page opens ("M" in the
/// demo catalog). Products with fewer sizes start on their last size.
pub const DEFAULT_SIZE_INDEX: usize = 2;

/// The user's current choices on a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Index into `Product::images`.
    pub selected_image_index: usize,
    pub selected_color: ColorOption,
    pub selected_size: String,
    /// Always at least 1.
    pub quantity: u32,
}

/// Selection state bound to the product it selects from.
///
/// Every transition keeps the selection inside the product's options: the
/// image index stays within the gallery, the color and size are always ones
/// the product offers and the quantity never drops below 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailState {
    product: Product,
    selection: SelectionState,
}

impl ProductDetailState {
    /// Open a page view on the first image, first color, default size and
    /// a quantity of 1.
    ///
    /// The product must satisfy `Product::validate`; use
    /// [`ProductDetailState::try_new`] when it comes from an untrusted source.
    ///
    /// # Panics
    ///
    /// In debug builds, if the product fails validation.
    pub fn new(product: Product) -> Self {
        debug_assert!(
            product.validate().is_ok(),
            "product {} has no valid default selection",
            product.id
        );
        let default_size = product
            .sizes
            .get(DEFAULT_SIZE_INDEX)
            .or_else(|| product.sizes.last())
            .cloned()
            .unwrap_or_default();
        let first_color = product
            .colors
            .first()
            .cloned()
            .unwrap_or_else(|| ColorOption::new("", ""));

        Self {
            selection: SelectionState {
                selected_image_index: 0,
                selected_color: first_color,
                selected_size: default_size,
                quantity: 1,
            },
            product,
        }
    }

    /// Validate the product, then open a page view on it.
    pub fn try_new(product: Product) -> Result<Self, CommerceError> {
        product.validate()?;
        Ok(Self::new(product))
    }

    /// Start on a preferred size instead of the default, when the product
    /// offers it.
    pub fn with_preferred_size(mut self, size: &str) -> Self {
        if self.product.has_size(size) {
            self.selection.selected_size = size.to_string();
        }
        self
    }

    /// The product being viewed.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Number of images in the carousel.
    pub fn image_count(&self) -> usize {
        self.product.images.len()
    }

    /// URL of the currently selected image.
    pub fn selected_image(&self) -> Option<&str> {
        self.product
            .images
            .get(self.selection.selected_image_index)
            .map(String::as_str)
    }

    /// Step the carousel back one image, wrapping from the first to the last.
    pub fn select_previous_image(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        let index = self.selection.selected_image_index;
        self.selection.selected_image_index = if index == 0 { count - 1 } else { index - 1 };
    }

    /// Step the carousel forward one image, wrapping from the last to the first.
    pub fn select_next_image(&mut self) {
        let count = self.image_count();
        if count == 0 {
            return;
        }
        let index = self.selection.selected_image_index;
        self.selection.selected_image_index = if index + 1 >= count { 0 } else { index + 1 };
    }

    /// Jump to a thumbnail.
    pub fn select_image(&mut self, index: usize) -> Result<(), CommerceError> {
        let count = self.image_count();
        if index >= count {
            return Err(CommerceError::ImageIndexOutOfRange { index, count });
        }
        self.selection.selected_image_index = index;
        Ok(())
    }

    /// Select a color by its display name.
    pub fn select_color(&mut self, name: &str) -> Result<(), CommerceError> {
        let color = self
            .product
            .color(name)
            .cloned()
            .ok_or_else(|| CommerceError::UnknownColor(name.to_string()))?;
        self.selection.selected_color = color;
        Ok(())
    }

    /// Select a size by its label.
    pub fn select_size(&mut self, size: &str) -> Result<(), CommerceError> {
        if !self.product.has_size(size) {
            return Err(CommerceError::UnknownSize(size.to_string()));
        }
        self.selection.selected_size = size.to_string();
        Ok(())
    }

    /// Add one to the quantity.
    pub fn increment_quantity(&mut self) {
        self.selection.quantity = self.selection.quantity.saturating_add(1);
    }

    /// Remove one from the quantity, stopping at 1.
    pub fn decrement_quantity(&mut self) {
        self.selection.quantity = self.selection.quantity.saturating_sub(1).max(1);
    }

    /// Whether decrementing would change the quantity.
    pub fn can_decrement(&self) -> bool {
        self.selection.quantity > 1
    }

    /// Mean review rating of the product, `0.0` without reviews.
    pub fn average_rating(&self) -> f64 {
        self.product.average_rating()
    }

    /// Apply a user intent.
    ///
    /// A rejected intent leaves the state untouched.
    pub fn apply(&mut self, intent: &ProductIntent) -> Result<(), CommerceError> {
        match intent {
            ProductIntent::PreviousImage => self.select_previous_image(),
            ProductIntent::NextImage => self.select_next_image(),
            ProductIntent::SelectImage(index) => self.select_image(*index)?,
            ProductIntent::SelectColor(name) => self.select_color(name)?,
            ProductIntent::SelectSize(size) => self.select_size(size)?,
            ProductIntent::IncrementQuantity => self.increment_quantity(),
            ProductIntent::DecrementQuantity => self.decrement_quantity(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MockCatalog, ProductProvider};
    use crate::ids::ProductId;
    use crate::money::Money;

    fn shirt_state() -> ProductDetailState {
        let product = MockCatalog::demo().product(&ProductId::new("1")).unwrap();
        ProductDetailState::new(product)
    }

    #[test]
    fn test_initial_state() {
        let state = shirt_state();
        let selection = state.selection();
        assert_eq!(selection.selected_image_index, 0);
        assert_eq!(selection.selected_color.name, "Black");
        assert_eq!(selection.selected_size, "M");
        assert_eq!(selection.quantity, 1);
        assert!(!state.can_decrement());
    }

    #[test]
    fn test_default_size_with_few_sizes() {
        let mut product = Product::new("9", "Cap", Money::usd(1500));
        product.sizes = vec!["S/M".into(), "L/XL".into()];
        let state = ProductDetailState::new(product);
        assert_eq!(state.selection().selected_size, "L/XL");
    }

    #[test]
    fn test_preferred_size() {
        let state = shirt_state().with_preferred_size("XL");
        assert_eq!(state.selection().selected_size, "XL");

        let state = shirt_state().with_preferred_size("XXXL");
        assert_eq!(state.selection().selected_size, "M");
    }

    #[test]
    fn test_try_new_rejects_invalid_product() {
        let mut product = Product::new("9", "Cap", Money::usd(1500));
        product.images.clear();
        assert!(ProductDetailState::try_new(product).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no valid default selection")]
    fn test_new_rejects_product_without_colors() {
        let mut product = Product::new("9", "Cap", Money::usd(1500));
        product.colors.clear();
        let _ = ProductDetailState::new(product);
    }

    #[test]
    fn test_option_intents_survive_text_form() {
        let mut state = shirt_state();
        let product = state.product().clone();

        for color in &product.colors {
            let text = ProductIntent::SelectColor(color.name.clone()).to_string();
            state.apply(&text.parse::<ProductIntent>().unwrap()).unwrap();
            assert_eq!(state.selection().selected_color.name, color.name);
        }
        for size in &product.sizes {
            let text = ProductIntent::SelectSize(size.clone()).to_string();
            state.apply(&text.parse::<ProductIntent>().unwrap()).unwrap();
            assert_eq!(&state.selection().selected_size, size);
        }
    }

    #[test]
    fn test_previous_image_wraps_to_last() {
        let mut state = shirt_state();
        state.select_previous_image();
        assert_eq!(state.selection().selected_image_index, 3);
        state.select_previous_image();
        assert_eq!(state.selection().selected_image_index, 2);
    }

    #[test]
    fn test_next_image_wraps_to_first() {
        let mut state = shirt_state();
        state.select_image(3).unwrap();
        state.select_next_image();
        assert_eq!(state.selection().selected_image_index, 0);
    }

    #[test]
    fn test_single_image_navigation_stays_put() {
        let mut state = ProductDetailState::new(Product::new("9", "Cap", Money::usd(1500)));
        state.select_next_image();
        assert_eq!(state.selection().selected_image_index, 0);
        state.select_previous_image();
        assert_eq!(state.selection().selected_image_index, 0);
    }

    #[test]
    fn test_select_image_out_of_range() {
        let mut state = shirt_state();
        state.select_image(2).unwrap();
        let err = state.select_image(4).unwrap_err();
        assert_eq!(err, CommerceError::ImageIndexOutOfRange { index: 4, count: 4 });
        assert_eq!(state.selection().selected_image_index, 2);
    }

    #[test]
    fn test_select_color() {
        let mut state = shirt_state();
        state.select_color("Navy").unwrap();
        assert_eq!(state.selection().selected_color.value, "#0a192f");

        let err = state.select_color("Teal").unwrap_err();
        assert_eq!(err, CommerceError::UnknownColor("Teal".to_string()));
        assert_eq!(state.selection().selected_color.name, "Navy");
    }

    #[test]
    fn test_select_size() {
        let mut state = shirt_state();
        state.select_size("XXL").unwrap();
        assert_eq!(state.selection().selected_size, "XXL");
        assert!(state.select_size("4XL").is_err());
        assert_eq!(state.selection().selected_size, "XXL");
    }

    #[test]
    fn test_color_and_size_leave_other_fields_alone() {
        let mut state = shirt_state();
        state.select_next_image();
        state.increment_quantity();
        let before = state.selection().clone();

        state.select_color("Red").unwrap();
        state.select_size("S").unwrap();

        let after = state.selection();
        assert_eq!(after.selected_image_index, before.selected_image_index);
        assert_eq!(after.quantity, before.quantity);
        assert_eq!(after.selected_color.name, "Red");
        assert_eq!(after.selected_size, "S");
    }

    #[test]
    fn test_quantity_floor() {
        let mut state = shirt_state();
        for _ in 0..5 {
            state.decrement_quantity();
        }
        assert_eq!(state.selection().quantity, 1);

        state.increment_quantity();
        state.increment_quantity();
        assert_eq!(state.selection().quantity, 3);
        assert!(state.can_decrement());
        state.decrement_quantity();
        assert_eq!(state.selection().quantity, 2);
    }

    #[test]
    fn test_average_rating() {
        let state = shirt_state();
        assert!((state.average_rating() - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let mut state = shirt_state();
        let intents = [
            ProductIntent::NextImage,
            ProductIntent::NextImage,
            ProductIntent::PreviousImage,
            ProductIntent::SelectColor("White".into()),
            ProductIntent::SelectSize("L".into()),
            ProductIntent::IncrementQuantity,
            ProductIntent::IncrementQuantity,
            ProductIntent::DecrementQuantity,
        ];
        for intent in &intents {
            state.apply(intent).unwrap();
        }

        let selection = state.selection();
        assert_eq!(selection.selected_image_index, 1);
        assert_eq!(selection.selected_color.name, "White");
        assert_eq!(selection.selected_size, "L");
        assert_eq!(selection.quantity, 2);
    }

    #[test]
    fn test_apply_rejected_intent_keeps_state() {
        let mut state = shirt_state();
        let before = state.clone();
        assert!(state.apply(&ProductIntent::SelectImage(10)).is_err());
        assert_eq!(state, before);
    }
}
