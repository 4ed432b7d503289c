//! Catalog inspection.

use anyhow::Result;
use serde::Serialize;

use storefront_commerce::catalog::{format_rating, ProductProvider};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List => list_products(ctx),
    }
}

#[derive(Serialize)]
struct ProductRow {
    id: String,
    name: String,
    price: String,
    rating: String,
    reviews: usize,
    featured: bool,
}

fn list_products(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let featured = catalog.featured();

    let mut rows = Vec::new();
    for id in catalog.product_ids() {
        let product = catalog.product(&id)?;
        rows.push(ProductRow {
            featured: featured.iter().any(|f| f.id == id),
            id: id.into_inner(),
            price: product.price.display(),
            rating: format_rating(product.average_rating()),
            reviews: product.reviews.len(),
            name: product.name,
        });
    }

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", rows.len()));
    let widths = [4, 28, 10, 8, 8, 8];
    ctx.output.table_row(
        &["ID", "NAME", "PRICE", "RATING", "REVIEWS", "FEATURED"],
        &widths,
    );
    for row in &rows {
        let reviews = row.reviews.to_string();
        ctx.output.table_row(
            &[
                row.id.as_str(),
                row.name.as_str(),
                row.price.as_str(),
                row.rating.as_str(),
                reviews.as_str(),
                if row.featured { "yes" } else { "" },
            ],
            &widths,
        );
    }

    Ok(())
}
