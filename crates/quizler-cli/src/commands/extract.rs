use quizler_core::error::QuizlerError;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    topic: &str,
) -> Result<(), QuizlerError> {
    let parsed = super::load(&input_file)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&output::json::document(&parsed, topic))?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} question(s), written to {}",
                parsed.questions.len(),
                path.display()
            );
            for issue in &parsed.issues {
                eprintln!("  warning: {issue}");
            }
        }
        None => {
            let output_str = match output_format {
                "json" => serde_json::to_string_pretty(&output::json::document(&parsed, topic))?,
                _ => output::table::format_parsed(&parsed),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
