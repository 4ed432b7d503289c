//! Render pages to HTML.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::json;

use storefront_observability::PageMetrics;

use super::{open_session, parse_intents, RenderArgs, RenderCommand};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    match args.command {
        RenderCommand::Landing { out } => render_landing(out.as_deref(), ctx),
        RenderCommand::Product { id, intents, out } => {
            render_product(&id, &intents, out.as_deref(), ctx)
        }
    }
}

fn render_landing(out: Option<&str>, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let logger = ctx.logger(storefront_landing::PAGE_NAME);
    let (html, metrics) = storefront_landing::render_landing_to_string(&catalog, &logger)?;

    emit(&html, &metrics, ctx.output_path(out, "landing.html").as_deref(), ctx)
}

fn render_product(id: &str, raw_intents: &[String], out: Option<&str>, ctx: &Context) -> Result<()> {
    let intents = parse_intents(raw_intents)?;
    let mut session = open_session(ctx, id)?;
    session.dispatch_all(&intents)?;

    let file_name = format!("product-{}.html", id);
    emit(
        session.html(),
        session.metrics(),
        ctx.output_path(out, &file_name).as_deref(),
        ctx,
    )
}

/// Write `html` to `path`, or to stdout when there is no path.
fn emit(html: &str, metrics: &PageMetrics, path: Option<&Path>, ctx: &Context) -> Result<()> {
    let Some(path) = path else {
        print!("{}", html);
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write: {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": path.display().to_string(),
            "metrics": metrics,
        }));
    } else {
        ctx.output.success(&format!(
            "Wrote {} ({})",
            path.display(),
            format_bytes(html.len() as u64)
        ));
        ctx.output.debug(&metrics.to_summary());
    }

    Ok(())
}
