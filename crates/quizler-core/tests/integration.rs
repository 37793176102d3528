//! Integration tests for the extract_from_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use quizler_core::error::QuizlerError;
use quizler_core::extraction::{PageContent, PdfExtractor};
use quizler_core::extract_from_pdf;
use quizler_core::review::ExtractionIssue;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuizlerError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuizlerError> {
        Err(QuizlerError::Extraction("corrupt xref table".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Test 1: Single well-formed quiz page
// ---------------------------------------------------------------------------
#[test]
fn single_page_well_formed_quiz() {
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            &[
                "General Knowledge Quiz",
                "",
                "1. What is 2+2?",
                "A) 3",
                "B) 4",
                "C) 5",
                "Answer: B",
                "",
                "2. Capital of France?",
                "A) Paris",
                "B) Lyon",
                "C) Nice",
                "D) Lille",
                "Answer: A",
            ],
        )],
    };

    let doc = extract_from_pdf(&[], &extractor).unwrap();

    assert_eq!(doc.questions.len(), 2);
    assert!(doc.issues.is_empty());

    assert_eq!(doc.questions[0].prompt, "What is 2+2?");
    assert_eq!(doc.questions[0].options, vec!["3", "4", "5"]);
    assert_eq!(doc.questions[0].answer_index, Some(1));

    assert_eq!(doc.questions[1].prompt, "Capital of France?");
    assert_eq!(doc.questions[1].options.len(), 4);
    assert_eq!(doc.questions[1].answer_index, Some(0));
}

// ---------------------------------------------------------------------------
// Test 2: Question spanning a page break is assembled across pages
// ---------------------------------------------------------------------------
#[test]
fn question_spanning_page_break() {
    let extractor = MockExtractor {
        pages: vec![
            page(1, &["1. Which planet is largest?", "A) Earth"]),
            page(2, &["B) Jupiter", "Answer: B"]),
        ],
    };

    let doc = extract_from_pdf(&[], &extractor).unwrap();

    assert_eq!(doc.questions.len(), 1);
    assert_eq!(doc.questions[0].options, vec!["Earth", "Jupiter"]);
    assert_eq!(doc.questions[0].answer_index, Some(1));
    assert!(doc.issues.is_empty());
}

// ---------------------------------------------------------------------------
// Test 3: Degenerate records are emitted and flagged, never dropped
// ---------------------------------------------------------------------------
#[test]
fn degenerate_records_are_flagged_not_dropped() {
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            &[
                "1. No options at all",
                "2. Answer letter never given",
                "A) one",
                "B) two",
                "3. Fine",
                "A) yes",
                "B) no",
                "Answer: A",
            ],
        )],
    };

    let doc = extract_from_pdf(&[], &extractor).unwrap();

    assert_eq!(doc.questions.len(), 3);
    assert_eq!(
        doc.issues,
        vec![
            ExtractionIssue::IncompleteRecord {
                index: 0,
                option_count: 0
            },
            ExtractionIssue::UnresolvedAnswer { index: 0 },
            ExtractionIssue::UnresolvedAnswer { index: 1 },
        ]
    );
}

// ---------------------------------------------------------------------------
// Test 4: Document with no recognizable questions
// ---------------------------------------------------------------------------
#[test]
fn document_without_questions_reports_empty_result() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["Course syllabus", "Week 1: Introduction"])],
    };

    let doc = extract_from_pdf(&[], &extractor).unwrap();

    assert!(doc.questions.is_empty());
    assert_eq!(doc.issues, vec![ExtractionIssue::EmptyResult]);
}

// ---------------------------------------------------------------------------
// Test 5: Extraction backend failure propagates
// ---------------------------------------------------------------------------
#[test]
fn extractor_failure_propagates() {
    let result = extract_from_pdf(&[], &FailingExtractor);
    assert!(matches!(result, Err(QuizlerError::Extraction(_))));
}

// ---------------------------------------------------------------------------
// Test 6: JSON round trip of a parsed document
// ---------------------------------------------------------------------------
#[test]
fn parsed_document_serializes_to_json() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["1. Q?", "A) a", "B) b", "Answer: A"])],
    };

    let doc = extract_from_pdf(&[], &extractor).unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["questions"][0]["prompt"], "Q?");
    assert_eq!(json["questions"][0]["answer_index"], 0);
    assert!(json.get("issues").is_none());
}
