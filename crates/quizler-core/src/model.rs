use serde::{Deserialize, Serialize};

/// The closed set of recognized option letters, in answer-index order.
pub const OPTION_ALPHABET: [char; 4] = ['A', 'B', 'C', 'D'];

/// Position of a letter within the fixed alphabet (A -> 0, ..., D -> 3).
pub fn letter_index(letter: char) -> Option<usize> {
    OPTION_ALPHABET.iter().position(|&c| c == letter)
}

pub fn is_option_letter(letter: char) -> bool {
    OPTION_ALPHABET.contains(&letter)
}

/// A finished multiple-choice question as emitted by the extraction pass.
///
/// `answer_index` is the answer letter's offset within the fixed alphabet,
/// not its offset within `options`, so it can point past the collected
/// options when the source skipped a letter. The review layer flags such
/// records before they reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_index: Option<usize>,
}

/// The in-progress accumulator owned by the extraction pass while it walks
/// the lines of one question.
///
/// Options are keyed by letter in first-encounter order; a repeated letter
/// overwrites the text in place rather than appending.
#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<(char, String)>,
    pub answer: Option<char>,
}

impl QuestionDraft {
    pub fn new(prompt: String) -> Self {
        QuestionDraft {
            prompt,
            options: Vec::new(),
            answer: None,
        }
    }

    pub fn set_option(&mut self, letter: char, text: String) {
        match self.options.iter_mut().find(|(l, _)| *l == letter) {
            Some(slot) => slot.1 = text,
            None => self.options.push((letter, text)),
        }
    }

    /// Last answer line wins.
    pub fn set_answer(&mut self, letter: char) {
        self.answer = Some(letter);
    }

    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}
