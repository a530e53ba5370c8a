//! POST /api/improve-resume — the upload-to-improvement pipeline.
//!
//! One linear pass per request: validate the multipart upload, extract text,
//! call the completion service, map the outcome into the response envelope.
//! Nothing is shared across requests and nothing survives the response.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract;
use crate::models::{ImprovementResult, MediaType, UploadedDocument};
use crate::state::AppState;

pub async fn improve_resume_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImprovementResult>, AppError> {
    let request_id = Uuid::new_v4().to_string()[..8].to_string();

    // Credential gate, checked per request rather than per process.
    let Some(completion) = state.completion.as_ref() else {
        tracing::warn!(
            request_id = %request_id,
            "improve request rejected: completion service not configured"
        );
        return Err(AppError::ServiceUnavailable);
    };

    let document = read_upload(multipart).await?;
    info!(
        request_id = %request_id,
        filename = %document.filename,
        size = document.len(),
        media_type = ?document.media_type,
        "processing upload"
    );

    if document.oversized() {
        return Err(AppError::FileTooLarge {
            size: document.len(),
        });
    }

    let original = extract::extract_text(&document.data, document.media_type)?;
    let improved = completion.improve(&original).await?;

    info!(
        request_id = %request_id,
        original_chars = original.len(),
        improved_chars = improved.len(),
        "resume improved"
    );

    Ok(Json(ImprovementResult {
        original_content: original,
        improved_content: improved,
        suggestions: Vec::new(),
    }))
}

/// Pulls the single `file` field out of the multipart body. The media type is
/// checked before the bytes are read, so unsupported uploads never buffer.
async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadUpload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let mime = field.content_type().unwrap_or_default().to_string();
        let media_type =
            MediaType::from_mime(&mime).ok_or(AppError::UnsupportedMediaType(mime))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadUpload(e.to_string()))?;
        if data.is_empty() {
            return Err(AppError::MissingFile);
        }

        return Ok(UploadedDocument {
            data,
            media_type,
            filename,
        });
    }

    Err(AppError::MissingFile)
}
