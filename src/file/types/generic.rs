use crate::constants::PRINTABLE_THRESHOLD_PERCENT;
use crate::error::ExtractionError;
use crate::file::TextSource;
use crate::utils::printable_percent;
use std::path::Path;

/// Fallback for unknown extensions: decode only when the bytes look like text
pub struct GenericFile {
    path: std::path::PathBuf,
    extension: Option<String>,
}

impl GenericFile {
    pub fn new(path: std::path::PathBuf, extension: Option<String>) -> Self {
        Self { path, extension }
    }
}

impl TextSource for GenericFile {
    fn to_text_impl(&self) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(&self.path)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                let bytes = err.into_bytes();
                if printable_percent(&bytes) >= PRINTABLE_THRESHOLD_PERCENT {
                    Ok(String::from_utf8_lossy(&bytes).into_owned())
                } else {
                    Err(ExtractionError::Binary)
                }
            }
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}
