use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use super::ExportError;

/// Renders `content` into DOCX bytes, one paragraph per input line,
/// preserving line order.
pub fn generate(content: &str) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new();
    for line in content.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Generation("DOCX", e.to_string()))?;
    Ok(buffer.into_inner())
}
