//! PDF generation: fixed-size US-letter pages, Helvetica at a fixed size,
//! a new page whenever vertical space runs out.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::ExportError;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 50.0;
const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = FONT_SIZE * 1.2;

/// Renders `content` into PDF bytes, one text line per layout line.
pub fn generate(content: &str) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids: Vec<Object> = Vec::new();
    for page_lines in paginate(content) {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
        ];
        for (index, line) in page_lines.iter().enumerate() {
            if index > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-LINE_HEIGHT).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let encoded = Content { operations }
            .encode()
            .map_err(|e| ExportError::Generation("PDF", e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        });
        page_ids.push(page_id.into());
    }

    let page_count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ExportError::Generation("PDF", e.to_string()))?;
    Ok(out)
}

/// Splits lines into pages: the cursor starts one margin below the top edge
/// and a line that would land inside the bottom margin opens a new page.
fn paginate(content: &str) -> Vec<Vec<&str>> {
    let mut pages: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in content.lines() {
        if y < MARGIN {
            pages.push(std::mem::take(&mut current));
            y = PAGE_HEIGHT - MARGIN;
        }
        current.push(line);
        y -= LINE_HEIGHT;
    }
    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    // y starts at 742pt and steps 14.4pt per line; the 50th line would land
    // below the 50pt margin, so a page holds 49 lines.
    const LINES_PER_PAGE: usize = 49;

    #[test]
    fn short_content_fits_on_one_page() {
        let content = vec!["line"; LINES_PER_PAGE].join("\n");
        assert_eq!(paginate(&content).len(), 1);
    }

    #[test]
    fn one_extra_line_starts_a_second_page() {
        let content = vec!["line"; LINES_PER_PAGE + 1].join("\n");
        let pages = paginate(&content);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), LINES_PER_PAGE);
        assert_eq!(pages[1].len(), 1);
    }

    #[test]
    fn empty_content_still_produces_one_page() {
        let pages = paginate("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());

        // And the generated document is still a valid PDF.
        assert!(generate("").unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn line_order_is_preserved_across_pages() {
        let lines: Vec<String> = (0..120).map(|i| format!("line {i}")).collect();
        let content = lines.join("\n");
        let flattened: Vec<&str> = paginate(&content).into_iter().flatten().collect();
        assert_eq!(flattened, lines.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
