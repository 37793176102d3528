mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quizler",
    version,
    about = "Extract multiple-choice questions from quiz documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract questions from a quiz document (PDF or plain text)
    Extract {
        /// Path to PDF or plain-text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted questions to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Topic tag attached to JSON output
        #[arg(short, long, default_value = "general")]
        topic: String,
    },
    /// Extract and report records that would be rejected by storage
    Check {
        /// Path to PDF or plain-text file
        input_file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            topic,
        } => commands::extract::run(input_file, &output, out, &topic),
        Commands::Check { input_file } => commands::check::run(input_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
