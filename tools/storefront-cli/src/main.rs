//! Storefront CLI - render and browse storefront pages from the terminal.
//!
//! Commands:
//! - `storefront render` - Write the landing or a product page as HTML
//! - `storefront browse` - Drive a product page view with intents
//! - `storefront catalog` - Inspect the product catalog
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CatalogArgs, ConfigArgs, RenderArgs};

/// Storefront CLI - Render and browse storefront pages
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page to HTML
    Render(RenderArgs),

    /// Open a product page view and apply intents
    Browse(BrowseArgs),

    /// Inspect the product catalog
    Catalog(CatalogArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
