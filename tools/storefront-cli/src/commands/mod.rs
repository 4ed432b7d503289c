//! CLI command implementations.

pub mod browse;
pub mod catalog;
pub mod config;
pub mod render;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use product_page::ProductPageSession;
use storefront_commerce::catalog::ProductProvider;
use storefront_commerce::selection::{ProductDetailState, ProductIntent};
use storefront_commerce::ProductId;

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub command: RenderCommand,
}

#[derive(Subcommand)]
pub enum RenderCommand {
    /// Render the landing page.
    Landing {
        /// Output file (default: stdout, or `[output] dir`).
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Render a product page.
    Product {
        /// Product ID.
        id: String,

        /// Intent to apply before rendering (repeatable), e.g. `next`,
        /// `color:Navy`, `size:L`, `inc`.
        #[arg(short, long = "intent")]
        intents: Vec<String>,

        /// Output file (default: stdout, or `[output] dir`).
        #[arg(short, long)]
        out: Option<String>,
    },
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Product ID.
    pub id: String,

    /// Intent to apply (repeatable).
    #[arg(short, long = "intent", conflicts_with = "interactive")]
    pub intents: Vec<String>,

    /// Choose intents from a menu until "Done".
    #[arg(short = 'I', long)]
    pub interactive: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List all products.
    List,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse intents given on the command line.
pub(crate) fn parse_intents(raw: &[String]) -> Result<Vec<ProductIntent>> {
    raw.iter()
        .map(|s| {
            s.parse::<ProductIntent>()
                .with_context(|| format!("Invalid intent: {}", s))
        })
        .collect()
}

/// Open a product page view, preselecting the configured default size.
pub(crate) fn open_session(ctx: &Context, id: &str) -> Result<ProductPageSession> {
    let catalog = ctx.catalog()?;
    let id = ProductId::new(id);
    let product = catalog
        .product(&id)
        .with_context(|| format!("Failed to load product {}", id))?;

    let mut state = ProductDetailState::try_new(product)
        .with_context(|| format!("Product {} cannot be displayed", id))?;
    if let Some(size) = &ctx.config.product_page.default_size {
        state = state.with_preferred_size(size);
    }

    ProductPageSession::new(state, ctx.logger(product_page::PAGE_NAME))
}
