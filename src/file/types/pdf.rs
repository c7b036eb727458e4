use crate::error::ExtractionError;
use crate::file::TextSource;
use std::path::Path;

/// PDF file handler
pub struct PdfFile {
    path: std::path::PathBuf,
    extension: Option<String>,
}

impl PdfFile {
    pub fn new(path: std::path::PathBuf, extension: Option<String>) -> Self {
        Self { path, extension }
    }
}

impl TextSource for PdfFile {
    fn to_text_impl(&self) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(&self.path)?;

        let structured = structured_text(&bytes);
        if let Ok(text) = &structured {
            if !text.trim().is_empty() {
                return Ok(text.trim().to_string());
            }
        }

        // Partial recovery from uncompressed content streams
        let scanned = scan_literal_strings(&bytes);
        if !scanned.is_empty() {
            return Ok(scanned);
        }

        structured.and_then(|_| Err(ExtractionError::Pdf("no text found".to_string())))
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Read the document with lopdf, falling back to pdf-extract.
///
/// Both readers can panic on hostile input, so they run under `catch_unwind`.
/// The default panic hook still reports such a panic on stderr; that is accepted.
fn structured_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let bytes = bytes.to_vec();
    std::panic::catch_unwind(move || -> Result<String, ExtractionError> {
        use lopdf::Document;

        let doc = Document::load_mem(&bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        let mut text_content = String::new();
        for page_num in doc.get_pages().keys() {
            if let Ok(page_text) = doc.extract_text(&[*page_num]) {
                text_content.push_str(&page_text);
                text_content.push('\n');
            }
        }

        if text_content.trim().is_empty() {
            pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|e| ExtractionError::Pdf(e.to_string()))
        } else {
            Ok(text_content)
        }
    })
    .unwrap_or_else(|_| Err(ExtractionError::Pdf("PDF reader panicked".to_string())))
}

/// Collect parenthesised literal strings from raw PDF bytes.
///
/// Handles nested parentheses and backslash escapes; bytes are decoded as
/// Latin-1. Runs without any alphanumeric character are dropped.
pub fn scan_literal_strings(bytes: &[u8]) -> String {
    let mut runs: Vec<String> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'(' {
            i += 1;
            continue;
        }

        i += 1;
        let mut depth = 1usize;
        let mut run: Vec<u8> = Vec::new();
        while i < bytes.len() {
            let b = bytes[i];
            i += 1;
            match b {
                b'\\' => {
                    if let Some(&next) = bytes.get(i) {
                        i += 1;
                        run.push(match next {
                            b'n' => b'\n',
                            b'r' => b'\r',
                            b't' => b'\t',
                            other => other,
                        });
                    }
                }
                b'(' => {
                    depth += 1;
                    run.push(b);
                }
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    run.push(b);
                }
                _ => run.push(b),
            }
        }

        let text: String = run.iter().map(|&b| b as char).collect();
        let text = text.trim();
        if text.chars().any(|c| c.is_alphanumeric()) {
            runs.push(text.to_string());
        }
    }

    runs.join(" ")
}
