pub mod document;
pub mod result;

pub use document::{MediaType, UploadedDocument, DOCX_MIME, MAX_UPLOAD_BYTES, PDF_MIME};
pub use result::ImprovementResult;
