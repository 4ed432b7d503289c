//! Color and size pickers.

use storefront_commerce::selection::{ProductDetailState, ProductIntent};
use storefront_render::escape_html;

/// Render the color swatches and size buttons.
pub fn render_options(state: &ProductDetailState) -> String {
    let product = state.product();
    let selection = state.selection();

    let swatches: String = product
        .colors
        .iter()
        .map(|color| {
            let class = if color.name == selection.selected_color.name {
                "color-swatch selected"
            } else {
                "color-swatch"
            };
            format!(
                r#"<button class="{class}" style="background-color: {value}" data-intent="{intent}" aria-label="Select {name} color"></button>"#,
                class = class,
                value = escape_html(&color.value),
                intent = escape_html(&ProductIntent::SelectColor(color.name.clone()).to_string()),
                name = escape_html(&color.name)
            )
        })
        .collect();

    let sizes: String = product
        .sizes
        .iter()
        .map(|size| {
            let class = if *size == selection.selected_size {
                "size-button selected"
            } else {
                "size-button"
            };
            format!(
                r#"<button class="{class}" data-intent="{intent}">{label}</button>"#,
                class = class,
                intent = escape_html(&ProductIntent::SelectSize(size.clone()).to_string()),
                label = escape_html(size)
            )
        })
        .collect();

    format!(
        r#"<div class="product-options" data-section="options">
        <div class="option-group">
            <h3 class="option-label">Color: {color}</h3>
            <div class="color-swatches">{swatches}</div>
        </div>
        <div class="option-group">
            <div class="option-header">
                <h3 class="option-label">Size: {size}</h3>
                <a href="/size-guide" class="size-guide">Size Guide</a>
            </div>
            <div class="size-buttons">{sizes}</div>
        </div>
    </div>"#,
        color = escape_html(&selection.selected_color.name),
        swatches = swatches,
        size = escape_html(&selection.selected_size),
        sizes = sizes
    )
}
