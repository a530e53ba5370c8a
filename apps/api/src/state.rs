use crate::completion::CompletionClient;
use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
///
/// `completion` is `None` when no credential was configured. The gate lives
/// in the improve handler, once per request, so operators get a clear
/// per-request signal even if the startup warning was missed.
#[derive(Clone)]
pub struct AppState {
    pub completion: Option<CompletionClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion = config.deepseek_api_key.clone().map(CompletionClient::new);
        Self { completion, config }
    }
}
