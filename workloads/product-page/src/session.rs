//! Interactive product page views.

use anyhow::Context;

use storefront_commerce::catalog::ProductProvider;
use storefront_commerce::selection::{ProductDetailState, ProductIntent, SelectionState};
use storefront_commerce::ProductId;
use storefront_observability::{PageMetrics, StructuredLogger};

use crate::render_to_string;

/// One product page view: the selection state plus its latest rendering.
///
/// The page is re-rendered after every accepted intent. A rejected intent
/// leaves both the state and the rendered page untouched.
pub struct ProductPageSession {
    state: ProductDetailState,
    logger: StructuredLogger,
    html: String,
    metrics: PageMetrics,
    renders: usize,
}

impl ProductPageSession {
    /// Open a page view for `id` from `provider`.
    pub fn open<P>(provider: &P, id: &ProductId, logger: StructuredLogger) -> anyhow::Result<Self>
    where
        P: ProductProvider + ?Sized,
    {
        let product = provider
            .product(id)
            .with_context(|| format!("failed to load product '{}'", id))?;
        let state = ProductDetailState::try_new(product)
            .with_context(|| format!("product '{}' cannot be displayed", id))?;
        Self::new(state, logger)
    }

    /// Start a page view from an existing state and render it.
    pub fn new(state: ProductDetailState, logger: StructuredLogger) -> anyhow::Result<Self> {
        let (html, metrics) = render_to_string(&state, logger.session_id().clone())?;

        logger
            .info_builder("Product page opened")
            .field("product_id", state.product().id.to_string())
            .field("size", state.selection().selected_size.clone())
            .field_i64("bytes", html.len() as i64)
            .emit();

        Ok(Self {
            state,
            logger,
            html,
            metrics,
            renders: 1,
        })
    }

    /// Apply an intent and re-render the page.
    pub fn dispatch(&mut self, intent: &ProductIntent) -> anyhow::Result<()> {
        if let Err(e) = self.state.apply(intent) {
            self.logger
                .warn_builder("Intent rejected")
                .field("intent", intent.to_string())
                .field("error", e.to_string())
                .emit();
            return Err(e).with_context(|| format!("intent '{}' rejected", intent));
        }

        let (html, metrics) = render_to_string(&self.state, self.logger.session_id().clone())?;
        self.html = html;
        self.metrics = metrics;
        self.renders += 1;

        let selection = self.state.selection();
        self.logger
            .info_builder("Intent applied")
            .field("intent", intent.name())
            .field_i64("image", selection.selected_image_index as i64)
            .field("color", selection.selected_color.name.clone())
            .field("size", selection.selected_size.clone())
            .field_i64("quantity", selection.quantity as i64)
            .emit();
        self.logger
            .debug_builder("Page re-rendered")
            .field_i64("bytes", self.metrics.total_bytes as i64)
            .field_i64("duration_us", self.metrics.total_duration_us as i64)
            .emit();

        Ok(())
    }

    /// Apply intents in order, stopping at the first rejection.
    pub fn dispatch_all<'a, I>(&mut self, intents: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = &'a ProductIntent>,
    {
        for intent in intents {
            self.dispatch(intent)?;
        }
        Ok(())
    }

    pub fn state(&self) -> &ProductDetailState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionState {
        self.state.selection()
    }

    /// HTML of the latest rendering.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Metrics of the latest rendering.
    pub fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }

    /// Number of times the page has been rendered, including the first.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Close the view and return the final state.
    pub fn into_state(self) -> ProductDetailState {
        self.logger
            .info_builder("Product page closed")
            .field_i64("renders", self.renders as i64)
            .emit();
        self.state
    }
}
