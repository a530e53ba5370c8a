use bytes::Bytes;

/// Hard cap on uploaded file size. Enforced on both the client and server
/// paths; the server is the authority.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The two document formats the pipeline accepts and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    /// Parses a declared MIME type. Anything outside {PDF, DOCX} is rejected
    /// here, before extraction is ever attempted.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(MediaType::Pdf),
            DOCX_MIME => Some(MediaType::Docx),
            _ => None,
        }
    }

    pub const fn mime(self) -> &'static str {
        match self {
            MediaType::Pdf => PDF_MIME,
            MediaType::Docx => DOCX_MIME,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Docx => "docx",
        }
    }
}

/// One uploaded file, alive only for the duration of a single request.
/// Nothing here is persisted; the bytes are dropped with the request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub data: Bytes,
    pub media_type: MediaType,
    pub filename: String,
}

impl UploadedDocument {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn oversized(&self) -> bool {
        self.len() > MAX_UPLOAD_BYTES
    }
}
