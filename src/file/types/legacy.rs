use crate::error::ExtractionError;
use crate::file::TextSource;
use std::path::Path;

/// Pre-OOXML binary office documents (`.doc`, `.xls`, `.ppt`, ...).
///
/// Their bodies are not read; the file name and its family token are the
/// only evidence.
pub struct LegacyOfficeFile {
    path: std::path::PathBuf,
    extension: Option<String>,
}

impl LegacyOfficeFile {
    pub fn new(path: std::path::PathBuf, extension: Option<String>) -> Self {
        Self { path, extension }
    }
}

impl TextSource for LegacyOfficeFile {
    fn to_text_impl(&self) -> Result<String, ExtractionError> {
        Err(ExtractionError::Unsupported(
            self.extension.clone().unwrap_or_default(),
        ))
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}
