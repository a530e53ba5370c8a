//! File Exporter — serializes text back into a downloadable PDF or DOCX.

mod docx;
mod pdf;

use thiserror::Error;

use crate::models::MediaType;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export type: {0}")]
    UnsupportedExportType(String),

    #[error("failed to generate {0} file: {1}")]
    Generation(&'static str, String),
}

/// A generated download: final filename, its media type, and the bytes.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub filename: String,
    pub media_type: MediaType,
    pub data: Vec<u8>,
}

/// Serializes `content` into the given format.
pub fn export_document(content: &str, media_type: MediaType) -> Result<Vec<u8>, ExportError> {
    match media_type {
        MediaType::Pdf => pdf::generate(content),
        MediaType::Docx => docx::generate(content),
    }
}

/// Entry point for download requests carrying a declared MIME type: rejects
/// anything outside {PDF, DOCX} and derives the final filename from the base
/// name and format.
pub fn export_named(content: &str, mime: &str, base_name: &str) -> Result<ExportedFile, ExportError> {
    let media_type = MediaType::from_mime(mime)
        .ok_or_else(|| ExportError::UnsupportedExportType(mime.to_string()))?;
    let data = export_document(content, media_type)?;
    Ok(ExportedFile {
        filename: format!("{base_name}.{}", media_type.extension()),
        media_type,
        data,
    })
}
