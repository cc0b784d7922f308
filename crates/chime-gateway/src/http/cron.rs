//! Dispatch trigger endpoint — GET /cron.
//!
//! A parameterless, read-style trigger: every GET runs one complete
//! dispatch cycle and returns its summary. Any other method is rejected
//! with a JSON 405. The trigger carries no state, so external schedulers
//! may call it at any cadence, including overlapping invocations.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use crate::app::AppState;
use chime_dispatch::DispatchReport;

/// GET /cron — run one dispatch cycle and report the outcome.
pub async fn cron_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
) -> Result<Json<DispatchReport>, (StatusCode, Json<Value>)> {
    if method != Method::GET {
        return Err((
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({"error": "method not allowed"})),
        ));
    }

    let now = Utc::now().naive_utc();
    match state.dispatcher.run_cycle(now).await {
        Ok(report) => {
            info!(sent = report.sent, "dispatch cycle complete");
            Ok(Json(report))
        }
        Err(e) => {
            error!(error = %e, "dispatch cycle failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "dispatch cycle failed",
                    "detail": e.to_string(),
                })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chime_core::config::{ChimeConfig, StoreConfig};

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(ChimeConfig {
            gateway: Default::default(),
            store: StoreConfig {
                url: "http://127.0.0.1:1".to_string(),
                key: "test-key".to_string(),
            },
            push: Default::default(),
            dispatch: Default::default(),
        }))
    }

    #[tokio::test]
    async fn non_get_methods_are_rejected() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let res = cron_handler(State(state()), method.clone()).await;
            let (status, _) = res.err().expect("expected rejection");
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        }
    }
}
