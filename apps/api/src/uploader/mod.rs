//! Upload Widget logic as a client library: validates a file before any
//! network call, refuses concurrent submissions, posts the multipart request,
//! and maps every failure to a single human-readable message.
//!
//! The server enforces the same type/size thresholds and is the authority;
//! the checks here only save the user a round trip.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{ImprovementResult, MediaType, MAX_UPLOAD_BYTES};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please upload a PDF or DOCX file only.")]
    UnsupportedType,

    #[error("File size should be less than 5MB")]
    TooLarge,

    #[error("Another upload is already in progress")]
    Busy,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Server { message: String },

    #[error("Invalid response from server. Please try again.")]
    MalformedResponse,
}

impl UploadError {
    /// The one string surfaced to the user for any failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// The payload handed to the content-extracted collaborator on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUpload {
    pub content: String,
    pub media_type: MediaType,
    pub filename: String,
}

/// Wire shape of every server response: errors always carry `error`,
/// successes never do.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseEnvelope {
    error: Option<String>,
    details: Option<String>,
    original_content: Option<String>,
    improved_content: Option<String>,
    #[serde(default)]
    suggestions: Vec<String>,
}

/// Client-side gatekeeper in front of `/api/improve-resume`.
#[derive(Debug)]
pub struct ResumeUploader {
    http: reqwest::Client,
    endpoint: String,
    processing: AtomicBool,
}

impl ResumeUploader {
    /// `endpoint` is the full URL of the improve endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        ResumeUploader {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            processing: AtomicBool::new(false),
        }
    }

    /// True while a submission is outstanding; re-submission is disabled for
    /// that window.
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::SeqCst)
    }

    /// Validates and submits one file. On success returns both collaborator
    /// payloads: the extracted content and the full improvement result.
    /// Prior results are untouched by failures — no partial value escapes.
    pub async fn submit(
        &self,
        filename: &str,
        mime: &str,
        data: Vec<u8>,
    ) -> Result<(ExtractedUpload, ImprovementResult), UploadError> {
        let media_type = MediaType::from_mime(mime).ok_or(UploadError::UnsupportedType)?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }

        let _guard = ProcessingGuard::acquire(&self.processing)?;

        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let envelope: ResponseEnvelope = response
            .json()
            .await
            .map_err(|_| UploadError::MalformedResponse)?;

        if let Some(error) = envelope.error {
            let message = match envelope.details {
                Some(details) => format!("{error}: {details}"),
                None => error,
            };
            return Err(UploadError::Server { message });
        }
        if !status.is_success() {
            return Err(UploadError::Server {
                message: format!("Server returned {status}"),
            });
        }

        let (original_content, improved_content) =
            match (envelope.original_content, envelope.improved_content) {
                (Some(original), Some(improved)) => (original, improved),
                _ => return Err(UploadError::MalformedResponse),
            };

        let extracted = ExtractedUpload {
            content: original_content.clone(),
            media_type,
            filename: filename.to_string(),
        };
        let result = ImprovementResult {
            original_content,
            improved_content,
            suggestions: envelope.suggestions,
        };

        Ok((extracted, result))
    }
}

/// Flips the processing flag for the lifetime of one submission.
struct ProcessingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ProcessingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, UploadError> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| UploadError::Busy)?;
        Ok(ProcessingGuard { flag })
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
