pub mod health;
pub mod improve;

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::models::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Headroom above the file limit for multipart framing, so oversized files
/// reach the handler's size check and get the envelope-shaped error instead
/// of a bare 413. Anything larger is cut off while streaming.
const BODY_LIMIT_SLACK: usize = 2 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/improve-resume", post(improve::improve_resume_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + BODY_LIMIT_SLACK))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

/// Only the configured origins may call the API. Origins that fail to parse
/// as header values are skipped.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}

/// GET /
/// Welcome body listing the available endpoints.
async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Welcome to the Resume Enhancer API",
        "endpoints": {
            "health": "/api/health",
            "improveResume": "/api/improve-resume"
        }
    }))
}

/// Outermost middleware: standard security headers on every response, and
/// preflight responses normalized to 204 No Content.
async fn security_headers(request: Request, next: Next) -> Response {
    let is_preflight = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;

    if is_preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate"),
    );

    response
}
