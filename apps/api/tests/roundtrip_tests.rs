//! Export → extract round-trips: a document generated by the file exporter
//! must come back out of the text extractor with the same line sequence,
//! modulo pagination whitespace.

use polish_api::export::export_document;
use polish_api::extract::extract_text;
use polish_api::models::MediaType;

fn content_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn docx_round_trip_preserves_lines_exactly() {
    let original = "John Doe\nSoftware Engineer\n5 years of Rust";
    let bytes = export_document(original, MediaType::Docx).unwrap();
    let extracted = extract_text(&bytes, MediaType::Docx).unwrap();

    let expected: Vec<&str> = original.lines().collect();
    let recovered: Vec<&str> = extracted.lines().collect();
    assert_eq!(recovered, expected);
}

#[test]
fn pdf_round_trip_preserves_the_line_sequence() {
    let original = "John Doe\nSoftware Engineer\n5 years of Rust";
    let bytes = export_document(original, MediaType::Pdf).unwrap();
    let extracted = extract_text(&bytes, MediaType::Pdf).unwrap();

    assert_eq!(content_lines(&extracted), content_lines(original));
}

#[test]
fn multi_page_pdf_keeps_lines_in_order() {
    let lines: Vec<String> = (0..120).map(|i| format!("bullet point number {i}")).collect();
    let original = lines.join("\n");

    let bytes = export_document(&original, MediaType::Pdf).unwrap();
    let extracted = extract_text(&bytes, MediaType::Pdf).unwrap();

    assert_eq!(content_lines(&extracted), lines);
}

#[test]
fn docx_round_trip_keeps_blank_lines_as_paragraph_breaks() {
    let original = "Summary\n\nExperience";
    let bytes = export_document(original, MediaType::Docx).unwrap();
    let extracted = extract_text(&bytes, MediaType::Docx).unwrap();

    assert_eq!(content_lines(&extracted), vec!["Summary", "Experience"]);
}
