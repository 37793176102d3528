pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod review;

use error::QuizlerError;
use extraction::PdfExtractor;
use model::QuestionRecord;
use review::ExtractionIssue;
use serde::{Deserialize, Serialize};

/// Result of one extraction pass: the question records in document order,
/// plus review diagnostics for the layer deciding what to store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub questions: Vec<QuestionRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ExtractionIssue>,
}

/// Main API entry point: extract question records from a PDF.
///
/// Extraction backend failures are the only error path; once text lines
/// exist, parsing always produces a (possibly empty) document.
pub fn extract_from_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ParsedDocument, QuizlerError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let lines = pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()));
    Ok(from_lines(lines))
}

/// Extract question records from text that has already been pulled out of
/// a document.
pub fn extract_from_text(text: &str) -> ParsedDocument {
    from_lines(text.lines())
}

fn from_lines<'a, I>(lines: I) -> ParsedDocument
where
    I: IntoIterator<Item = &'a str>,
{
    let questions = parsing::extract_questions(lines);
    let issues = review::review(&questions);
    ParsedDocument { questions, issues }
}
