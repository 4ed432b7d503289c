//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        config.catalog.path.as_deref().unwrap_or("(built-in demo)"),
    );

    ctx.output.info("[product_page]");
    ctx.output.kv(
        "default_size",
        config
            .product_page
            .default_size
            .as_deref()
            .unwrap_or("(third size)"),
    );

    ctx.output.info("[logging]");
    ctx.output
        .kv("level", &config.logging.level.to_string().to_lowercase());
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    ctx.output.info("[output]");
    ctx.output
        .kv("dir", config.output.dir.as_deref().unwrap_or("(stdout)"));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
