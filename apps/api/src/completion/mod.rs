//! Completion Client — the single point of entry for all DeepSeek API calls.
//!
//! ARCHITECTURAL RULE: no other module may call the completion service
//! directly. All AI interactions MUST go through this module.
//!
//! The client issues exactly one request per call. There is no automatic
//! retry: the caller has already paid the full deadline once, a second wait
//! must be an explicit user action.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
/// The model used for all completion calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "deepseek-chat";
/// Hard deadline on one completion exchange, connect to parsed body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ERROR_BODY_LIMIT: usize = 300;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion response is missing generated text")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl ChatResponse {
    /// Takes the generated text from the first choice, if any.
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

/// HTTP client for the DeepSeek chat-completions API.
///
/// Base URL and deadline are injectable so tests can point at a local fake
/// upstream with a short deadline.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

// The credential must never appear in logs or error output.
impl fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEEPSEEK_BASE_URL.to_string(), REQUEST_TIMEOUT)
    }

    pub fn with_endpoint(api_key: String, base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            timeout,
        }
    }

    /// Runs the improvement pass over extracted resume text.
    pub async fn improve(&self, resume_text: &str) -> Result<String, CompletionError> {
        let user_turn = prompts::improve_request(resume_text);
        self.chat(vec![
            ChatMessage {
                role: "system",
                content: prompts::IMPROVE_SYSTEM,
            },
            ChatMessage {
                role: "user",
                content: &user_turn,
            },
        ])
        .await
    }

    /// Live connectivity check used by the health endpoint: one minimal
    /// message, success means the service answered at all.
    pub async fn probe(&self) -> bool {
        let result = self
            .chat(vec![ChatMessage {
                role: "user",
                content: "Hello",
            }])
            .await;

        match result {
            Ok(_) => true,
            Err(e) => {
                warn!("completion service probe failed: {e}");
                false
            }
        }
    }

    /// One request, one response, bounded by the configured deadline.
    ///
    /// The deadline wraps the entire exchange as a cancellable future: when
    /// it expires the in-flight future is dropped, which aborts the outbound
    /// connection. Nothing keeps running past the deadline and no retry
    /// fires afterwards.
    async fn chat(&self, messages: Vec<ChatMessage<'_>>) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages,
        };
        let url = format!("{}/v1/chat/completions", self.base_url);

        let exchange = async {
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CompletionError::Api {
                    status: status.as_u16(),
                    message: truncate(&body, ERROR_BODY_LIMIT),
                });
            }

            let parsed: ChatResponse = response.json().await?;
            let text = parsed.into_text().ok_or(CompletionError::EmptyContent)?;

            debug!(chars = text.len(), "completion call succeeded");
            Ok(text)
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(CompletionError::Timeout { after: self.timeout }),
        }
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        text.to_string()
    } else {
        let cut = text
            .char_indices()
            .take_while(|(i, _)| *i <= limit)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        format!("{}…", &text[..cut])
    }
}
