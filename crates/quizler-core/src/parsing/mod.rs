pub mod line;

use crate::model::{letter_index, QuestionDraft, QuestionRecord};
use line::{classify, LineTag};

/// Fold an ordered sequence of text lines into question records.
///
/// A single draft is live at a time. A question marker emits the previous
/// draft (when its prompt is non-empty) and opens a fresh one — even when
/// the new marker carries an empty prompt, so that stray options after it
/// do not leak into a later question. Option and answer lines seen before
/// any marker have no draft to land in and are dropped. End of input
/// flushes the live draft under the same non-empty-prompt rule.
///
/// Never fails: malformed lines degrade to no-ops, malformed questions to
/// degenerate records for the review layer to flag.
pub fn extract_questions<I, S>(lines: I) -> Vec<QuestionRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    let mut draft: Option<QuestionDraft> = None;

    for raw in lines {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }

        match classify(raw) {
            LineTag::QuestionStart(prompt) => {
                if let Some(done) = draft.take() {
                    if done.has_prompt() {
                        records.push(finalize(done));
                    }
                }
                draft = Some(QuestionDraft::new(prompt));
            }
            LineTag::Option { letter, text } => {
                if let Some(d) = draft.as_mut() {
                    d.set_option(letter, text);
                }
            }
            LineTag::Answer(letter) => {
                if let Some(d) = draft.as_mut() {
                    d.set_answer(letter);
                }
            }
            LineTag::Unclassified => {}
        }
    }

    if let Some(done) = draft {
        if done.has_prompt() {
            records.push(finalize(done));
        }
    }

    records
}

/// Convert a draft into an immutable record.
///
/// Re-trims all text (upstream trimming is not assumed here) and resolves
/// the answer letter to its fixed-alphabet offset; no answer line means an
/// absent index, never an error.
fn finalize(draft: QuestionDraft) -> QuestionRecord {
    QuestionRecord {
        prompt: draft.prompt.trim().to_string(),
        options: draft
            .options
            .into_iter()
            .map(|(_, text)| text.trim().to_string())
            .collect(),
        answer_index: draft.answer.and_then(letter_index),
    }
}
