//! Quantity stepper and purchase buttons.

use storefront_commerce::selection::{ProductDetailState, ProductIntent};

/// Render the quantity stepper with add-to-cart and wishlist buttons.
///
/// The buttons are presentational; there is no cart behind them.
pub fn render_purchase(state: &ProductDetailState) -> String {
    let disabled = if state.can_decrement() { "" } else { " disabled" };

    format!(
        r#"<div class="product-purchase" data-section="purchase">
        <div class="quantity-stepper">
            <button class="quantity-decrement" data-intent="{dec}" aria-label="Decrease quantity"{disabled}>&minus;</button>
            <span class="quantity-value">{quantity}</span>
            <button class="quantity-increment" data-intent="{inc}" aria-label="Increase quantity">+</button>
        </div>
        <button class="btn-add-to-cart">Add to Cart</button>
        <button class="btn-wishlist" aria-label="Add to wishlist">&#9825;</button>
    </div>"#,
        dec = ProductIntent::DecrementQuantity,
        inc = ProductIntent::IncrementQuantity,
        disabled = disabled,
        quantity = state.selection().quantity
    )
}
