use super::ExtractError;

/// Extracts plain text from PDF bytes.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Failed(e.to_string()))
}
