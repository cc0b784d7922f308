use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;

use chime_core::ChimeConfig;
use chime_dispatch::Dispatcher;
use chime_push::BarkSender;
use chime_store::SupabaseStore;

/// Shared state handed to every handler as `Arc<AppState>`.
pub struct AppState {
    pub config: ChimeConfig,
    pub dispatcher: Dispatcher<SupabaseStore, BarkSender>,
}

impl AppState {
    pub fn new(config: ChimeConfig) -> Self {
        let store = SupabaseStore::new(&config.store);
        let push = BarkSender::new(config.push.clone());
        let dispatcher = Dispatcher::new(store, push, config.dispatch.window());
        Self { config, dispatcher }
    }
}

/// Assemble the gateway router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        // `any` so the handler itself can answer non-GET with a JSON 405.
        .route("/cron", any(crate::http::cron::cron_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
