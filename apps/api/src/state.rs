use std::sync::Arc;

use crate::config::Config;
use crate::sink::LeadSink;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Downstream recipient of accepted leads. Default: log only; swap via
    /// LEAD_WEBHOOK_URL.
    pub sink: Arc<dyn LeadSink>,
}
