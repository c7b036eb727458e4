use crate::error::ExtractionError;
use crate::file::TextSource;
use std::path::Path;

/// Plain text and source files, decoded leniently
pub struct TextFile {
    path: std::path::PathBuf,
    extension: Option<String>,
}

impl TextFile {
    pub fn new(path: std::path::PathBuf, extension: Option<String>) -> Self {
        Self { path, extension }
    }
}

impl TextSource for TextFile {
    fn to_text_impl(&self) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(&self.path)?;
        // Undecodable sequences become U+FFFD, which tokenizes as a separator
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}
