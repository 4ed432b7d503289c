//! Drive a product page view with intents.

use anyhow::{bail, Result};
use dialoguer::Select;

use product_page::ProductPageSession;
use storefront_commerce::catalog::format_rating;
use storefront_commerce::selection::{ProductDetailState, ProductIntent};

use super::{open_session, parse_intents, BrowseArgs};
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let intents = parse_intents(&args.intents)?;
    let mut session = open_session(ctx, &args.id)?;

    show_product(&session, ctx);
    show_selection(&session, None, ctx);

    if args.interactive {
        return browse_interactive(&mut session, ctx);
    }

    for intent in &intents {
        session.dispatch(intent)?;
        show_selection(&session, Some(intent), ctx);
    }

    Ok(())
}

fn browse_interactive(session: &mut ProductPageSession, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("--interactive cannot be combined with --json");
    }

    while let Some(intent) = prompt_intent(session.state())? {
        match session.dispatch(&intent) {
            Ok(()) => show_selection(session, Some(&intent), ctx),
            Err(e) => ctx.output.warn(&format!("{:#}", e)),
        }
    }

    ctx.output.success(&format!(
        "Done after {} render(s)",
        session.render_count()
    ));
    Ok(())
}

const ACTIONS: [&str; 8] = [
    "Next image",
    "Previous image",
    "Pick image",
    "Pick color",
    "Pick size",
    "Increase quantity",
    "Decrease quantity",
    "Done",
];

/// Ask for the next intent. `None` means the user is done.
fn prompt_intent(state: &ProductDetailState) -> Result<Option<ProductIntent>> {
    let action = Select::new()
        .with_prompt("Action")
        .items(&ACTIONS)
        .default(0)
        .interact()?;

    let product = state.product();
    let intent = match action {
        0 => ProductIntent::NextImage,
        1 => ProductIntent::PreviousImage,
        2 => {
            let labels: Vec<String> = (1..=product.images.len())
                .map(|n| format!("Image {}", n))
                .collect();
            let index = Select::new()
                .with_prompt("Image")
                .items(&labels)
                .default(state.selection().selected_image_index)
                .interact()?;
            ProductIntent::SelectImage(index)
        }
        3 => {
            let names: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
            let index = Select::new().with_prompt("Color").items(&names).interact()?;
            ProductIntent::SelectColor(names[index].to_string())
        }
        4 => {
            let index = Select::new()
                .with_prompt("Size")
                .items(&product.sizes)
                .interact()?;
            ProductIntent::SelectSize(product.sizes[index].clone())
        }
        5 => ProductIntent::IncrementQuantity,
        6 => ProductIntent::DecrementQuantity,
        _ => return Ok(None),
    };

    Ok(Some(intent))
}

fn show_product(session: &ProductPageSession, ctx: &Context) {
    let product = session.state().product();
    ctx.output.header(&product.name);
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv(
        "rating",
        &format!(
            "{} ({} reviews)",
            format_rating(session.state().average_rating()),
            product.reviews.len()
        ),
    );
}

fn show_selection(session: &ProductPageSession, intent: Option<&ProductIntent>, ctx: &Context) {
    let selection = session.selection();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "intent": intent.map(|i| i.to_string()),
            "selection": selection,
        }));
        return;
    }

    if let Some(intent) = intent {
        ctx.output.info(&format!("Applied {}", intent));
    }
    let image_count = session.state().image_count();
    ctx.output.kv(
        "image",
        &format!("{} of {}", selection.selected_image_index + 1, image_count),
    );
    ctx.output.kv("color", &selection.selected_color.name);
    ctx.output.kv("size", &selection.selected_size);
    ctx.output.kv("quantity", &selection.quantity.to_string());
}
