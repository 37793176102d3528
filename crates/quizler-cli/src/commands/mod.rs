pub mod check;
pub mod extract;

use quizler_core::error::QuizlerError;
use quizler_core::extraction::pdftotext::PdftotextExtractor;
use quizler_core::ParsedDocument;
use std::path::Path;

/// Read a quiz document and run the extraction pipeline.
///
/// PDFs go through the pdftotext backend; anything else is treated as
/// already-extracted plain text.
pub fn load(input_file: &Path) -> Result<ParsedDocument, QuizlerError> {
    let is_pdf = input_file
        .extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        let pdf_bytes = std::fs::read(input_file)?;
        let extractor = PdftotextExtractor::new();
        quizler_core::extract_from_pdf(&pdf_bytes, &extractor)
    } else {
        let text = std::fs::read_to_string(input_file)?;
        Ok(quizler_core::extract_from_text(&text))
    }
}
