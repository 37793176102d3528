use quizler_core::error::QuizlerError;
use std::path::PathBuf;

pub fn run(input_file: PathBuf) -> Result<(), QuizlerError> {
    let parsed = super::load(&input_file)?;

    println!("{} question(s) extracted", parsed.questions.len());

    if parsed.issues.is_empty() {
        println!("All records pass the storage checks.");
        return Ok(());
    }

    for issue in &parsed.issues {
        println!("  {issue}");
    }
    std::process::exit(1);
}
