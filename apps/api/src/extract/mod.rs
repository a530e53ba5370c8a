//! Text extraction for uploaded documents.
//!
//! Dispatches on [`MediaType`] and hands the actual decoding to `pdf-extract`
//! and `docx-rs`. Extraction is never retried: a corrupt document stays
//! corrupt, and the caller is told so.

mod docx;
mod pdf;

use thiserror::Error;

use crate::models::MediaType;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to extract text: {0}")]
    Failed(String),

    /// The document decoded fine but contained no text (or only whitespace).
    /// This is a user error, not a successful empty improvement.
    #[error("document contains no text")]
    Empty,
}

/// Converts raw document bytes into plain text.
///
/// Returns [`ExtractError::Empty`] when the decoded text is empty or
/// whitespace-only.
pub fn extract_text(data: &[u8], media_type: MediaType) -> Result<String, ExtractError> {
    let text = match media_type {
        MediaType::Pdf => pdf::extract(data)?,
        MediaType::Docx => docx::extract(data)?,
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }

    Ok(text)
}
