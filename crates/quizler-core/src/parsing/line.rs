use crate::model::is_option_letter;

/// Classified meaning of one line of extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineTag {
    /// Leading ordinal marker like "12."; payload is the remaining prompt text.
    QuestionStart(String),
    /// Option marker like "A) Paris".
    Option { letter: char, text: String },
    /// "Answer: C" line. The letter must belong to the fixed alphabet,
    /// otherwise the line is Unclassified.
    Answer(char),
    /// Anything else. Ignored by the extraction pass, never an error.
    Unclassified,
}

const ANSWER_PREFIX: &str = "Answer:";

/// Classify a single line of text.
///
/// Pure function of the line itself: no lookback or lookahead, so the
/// extraction pass alone owns sequencing. Total — a line that matches no
/// pattern is Unclassified.
pub fn classify(line: &str) -> LineTag {
    let line = line.trim();

    if let Some(prompt) = strip_ordinal_marker(line) {
        return LineTag::QuestionStart(prompt.to_string());
    }

    // Option lines: a fixed-alphabet letter immediately followed by ')'.
    let mut chars = line.chars();
    if let (Some(letter), Some(')')) = (chars.next(), chars.next()) {
        if is_option_letter(letter) {
            return LineTag::Option {
                letter,
                text: line[2..].trim().to_string(),
            };
        }
    }

    // Answer lines: case-sensitive prefix, remainder must be exactly one
    // letter from the fixed alphabet.
    if let Some(rest) = line.strip_prefix(ANSWER_PREFIX) {
        let rest = rest.trim();
        let mut rest_chars = rest.chars();
        if let (Some(letter), None) = (rest_chars.next(), rest_chars.next()) {
            if is_option_letter(letter) {
                return LineTag::Answer(letter);
            }
        }
    }

    LineTag::Unclassified
}

/// Strip a leading "<digits>." question marker plus the whitespace after it.
/// Returns None if the line does not start with one.
fn strip_ordinal_marker(line: &str) -> Option<&str> {
    let dot = line.find('.')?;
    if dot == 0 || !line[..dot].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(line[dot + 1..].trim_start())
}
