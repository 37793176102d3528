use crate::error::QuizlerError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Runs pdftotext in raw reading order (no `-layout`), which keeps each
/// question marker, option, and answer on its own line the way the line
/// classifier expects.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuizlerError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| QuizlerError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| QuizlerError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    QuizlerError::PdftotextNotFound
                } else {
                    QuizlerError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(QuizlerError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages (form feed \x0c is the page separator).
fn split_pages(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .filter(|p| !p.lines.is_empty() || p.page_number == 1)
        .collect()
}
