//! Image carousel with thumbnails.

use storefront_commerce::selection::{ProductDetailState, ProductIntent};
use storefront_render::escape_html;

/// Render the gallery for the currently selected image.
pub fn render_gallery(state: &ProductDetailState) -> String {
    let product = state.product();
    let selected = state.selection().selected_image_index;
    let name = escape_html(&product.name);

    let main_image = state
        .selected_image()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}" class="gallery-image" data-index="{}">"#,
                escape_html(url),
                name,
                selected
            )
        })
        .unwrap_or_else(|| {
            r#"<div class="gallery-placeholder">No image available</div>"#.to_string()
        });

    let thumbnails: String = product
        .images
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let class = if index == selected {
                "gallery-thumbnail selected"
            } else {
                "gallery-thumbnail"
            };
            format!(
                r#"<button class="{class}" data-intent="{intent}" aria-current="{current}"><img src="{url}" alt="{name} thumbnail {n}"></button>"#,
                class = class,
                intent = escape_html(&ProductIntent::SelectImage(index).to_string()),
                current = index == selected,
                url = escape_html(url),
                name = name,
                n = index + 1
            )
        })
        .collect();

    format!(
        r#"<div class="product-gallery" data-section="gallery">
        <div class="gallery-main">
            {main_image}
            <button class="gallery-nav gallery-prev" data-intent="{prev}" aria-label="Previous image">&lsaquo;</button>
            <button class="gallery-nav gallery-next" data-intent="{next}" aria-label="Next image">&rsaquo;</button>
        </div>
        <div class="gallery-thumbnails">{thumbnails}</div>
    </div>"#,
        main_image = main_image,
        prev = ProductIntent::PreviousImage,
        next = ProductIntent::NextImage,
        thumbnails = thumbnails
    )
}
