use quizler_core::model::OPTION_ALPHABET;
use quizler_core::ParsedDocument;
use std::fmt::Write;

pub fn format_parsed(parsed: &ParsedDocument) -> String {
    let mut out = String::new();

    for (i, q) in parsed.questions.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{}. {}", i + 1, q.prompt);

        for (j, option) in q.options.iter().enumerate() {
            let letter = OPTION_ALPHABET.get(j).copied().unwrap_or('?');
            let _ = writeln!(out, "   {letter}) {option}");
        }

        match q.answer_index {
            Some(idx) => {
                let letter = OPTION_ALPHABET.get(idx).copied().unwrap_or('?');
                if idx < q.options.len() {
                    let _ = writeln!(out, "   Answer: {letter}");
                } else {
                    let _ = writeln!(out, "   Answer: {letter} (not among collected options)");
                }
            }
            None => {
                let _ = writeln!(out, "   Answer: (unresolved)");
            }
        }
    }

    if !parsed.issues.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Needs attention:");
        for issue in &parsed.issues {
            let _ = writeln!(out, "  - {issue}");
        }
    }

    out
}
