use crate::model::QuestionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum option count the storage layer accepts.
pub const MIN_OPTIONS: usize = 2;

/// A problem with an extraction result that the caller should act on
/// before accepting the records.
///
/// Extraction itself never fails; degenerate records surface here instead.
/// `index` is the zero-based position of the record in the emitted sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionIssue {
    /// No question marker was recognized anywhere in the input.
    EmptyResult,
    /// The record collected fewer options than storage requires.
    IncompleteRecord { index: usize, option_count: usize },
    /// The record's answer index is absent or points past the collected options.
    UnresolvedAnswer { index: usize },
}

impl fmt::Display for ExtractionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionIssue::EmptyResult => {
                write!(f, "no questions were recognized in the document")
            }
            ExtractionIssue::IncompleteRecord {
                index,
                option_count,
            } => write!(
                f,
                "question {} has {} option(s), at least {} required",
                index + 1,
                option_count,
                MIN_OPTIONS
            ),
            ExtractionIssue::UnresolvedAnswer { index } => write!(
                f,
                "question {} has no resolvable correct answer",
                index + 1
            ),
        }
    }
}

/// Check emitted records against the downstream acceptance rules
/// (at least two options, answer index within the collected options).
pub fn review(records: &[QuestionRecord]) -> Vec<ExtractionIssue> {
    if records.is_empty() {
        return vec![ExtractionIssue::EmptyResult];
    }

    let mut issues = Vec::new();
    for (index, record) in records.iter().enumerate() {
        if record.options.len() < MIN_OPTIONS {
            issues.push(ExtractionIssue::IncompleteRecord {
                index,
                option_count: record.options.len(),
            });
        }
        match record.answer_index {
            Some(i) if i < record.options.len() => {}
            _ => issues.push(ExtractionIssue::UnresolvedAnswer { index }),
        }
    }
    issues
}
