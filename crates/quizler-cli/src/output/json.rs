use quizler_core::ParsedDocument;
use serde_json::{json, Value};

/// Build the JSON document consumed by the quiz storage importer. The topic
/// tag rides along with every export; the importer applies it per question.
pub fn document(parsed: &ParsedDocument, topic: &str) -> Value {
    json!({
        "topic": topic,
        "count": parsed.questions.len(),
        "questions": parsed.questions,
        "issues": parsed.issues,
    })
}
