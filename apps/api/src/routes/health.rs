use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
///
/// Reports a live connectivity probe against the completion service. A
/// missing credential shows up here as `deepseek: false` while the process
/// keeps serving.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let deepseek = match state.completion.as_ref() {
        Some(client) => client.probe().await,
        None => false,
    };

    Json(json!({
        "status": "ok",
        "services": {
            "deepseek": deepseek
        },
        "environment": state.config.environment
    }))
}
