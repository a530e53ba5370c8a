use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::completion::CompletionError;
use crate::extract::ExtractError;
use crate::models::MAX_UPLOAD_BYTES;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error renders as the flat envelope `{"error": ..., "details": ...}`;
/// successful responses never carry an `error` field, so clients only branch
/// on its presence.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no file uploaded")]
    MissingFile,

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("file too large: {size} bytes")]
    FileTooLarge { size: usize },

    #[error("malformed upload: {0}")]
    BadUpload(String),

    #[error("extraction failed: {0}")]
    Extraction(String),

    #[error("document contains no text")]
    EmptyDocument,

    /// The completion credential is missing. Fatal for this request only;
    /// the process keeps serving health checks that report the degraded
    /// capability.
    #[error("completion service not configured")]
    ServiceUnavailable,

    #[error("completion service timed out")]
    UpstreamTimeout,

    #[error("completion service error: {0}")]
    Upstream(String),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Failed(detail) => AppError::Extraction(detail),
            ExtractError::Empty => AppError::EmptyDocument,
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Timeout { .. } => AppError::UpstreamTimeout,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile
            | AppError::UnsupportedMediaType(_)
            | AppError::FileTooLarge { .. }
            | AppError::BadUpload(_)
            | AppError::Extraction(_)
            | AppError::EmptyDocument => StatusCode::BAD_REQUEST,
            AppError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message and optional detail for the response envelope.
    fn envelope_parts(&self) -> (String, Option<String>) {
        match self {
            AppError::MissingFile => (
                "No file uploaded".to_string(),
                Some("Please upload a PDF or DOCX file".to_string()),
            ),
            AppError::UnsupportedMediaType(mime) => (
                "Invalid file type. Please upload a PDF or DOCX file.".to_string(),
                Some(format!("Unsupported media type: {mime}")),
            ),
            AppError::FileTooLarge { size } => (
                "File too large".to_string(),
                Some(format!(
                    "File is {size} bytes; the maximum upload size is {MAX_UPLOAD_BYTES} bytes"
                )),
            ),
            AppError::BadUpload(detail) => ("File upload error".to_string(), Some(detail.clone())),
            AppError::Extraction(detail) => (
                "Failed to extract text from file".to_string(),
                Some(detail.clone()),
            ),
            AppError::EmptyDocument => (
                "No text content found in file".to_string(),
                Some("The uploaded file appears to be empty".to_string()),
            ),
            AppError::ServiceUnavailable => (
                "Service temporarily unavailable".to_string(),
                Some("AI service not properly initialized".to_string()),
            ),
            AppError::UpstreamTimeout => (
                "Request timeout".to_string(),
                Some("The AI service took too long to respond".to_string()),
            ),
            AppError::Upstream(reason) => (
                "Failed to process resume with AI".to_string(),
                Some(format!("AI service error: {reason}")),
            ),
            // No internal detail crosses the boundary: no stack traces, no
            // credentials.
            AppError::Internal(_) => ("An unexpected error occurred".to_string(), None),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(reason) => tracing::error!("upstream error: {reason}"),
            AppError::Internal(e) => tracing::error!("internal error: {e:?}"),
            AppError::UpstreamTimeout => tracing::warn!("completion call hit its deadline"),
            _ => {}
        }

        let (message, details) = self.envelope_parts();
        let mut body = Map::new();
        body.insert("error".to_string(), json!(message));
        if let Some(details) = details {
            body.insert("details".to_string(), json!(details));
        }

        (self.status_code(), Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_expected_status_codes() {
        assert_eq!(AppError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::UnsupportedMediaType("text/plain".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::FileTooLarge { size: 6 * 1024 * 1024 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::EmptyDocument.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ServiceUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::UpstreamTimeout.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::Upstream("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn extraction_errors_convert_per_variant() {
        assert!(matches!(
            AppError::from(ExtractError::Empty),
            AppError::EmptyDocument
        ));
        assert!(matches!(
            AppError::from(ExtractError::Failed("bad xref".into())),
            AppError::Extraction(_)
        ));
    }

    #[test]
    fn internal_errors_carry_no_detail() {
        let err = AppError::Internal(anyhow::anyhow!("secret stack trace"));
        let (message, details) = err.envelope_parts();
        assert_eq!(message, "An unexpected error occurred");
        assert!(details.is_none());
    }
}
