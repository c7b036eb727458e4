use crate::error::ExtractionError;

/// Trait for pulling plain text out of one kind of file
pub trait TextSource: Send + Sync {
    /// Extract text content from the file (format-specific implementation)
    fn to_text_impl(&self) -> Result<String, ExtractionError>;

    /// Extract text content from the file (public API with size check)
    fn to_text(&self) -> Result<String, ExtractionError> {
        // Empty files never reach a parser
        if let Ok(metadata) = std::fs::metadata(self.path()) {
            if metadata.len() == 0 {
                return Ok(String::new());
            }
        }

        self.to_text_impl()
    }

    /// Get the file path
    fn path(&self) -> &std::path::Path;

    /// Get the file extension
    fn extension(&self) -> Option<&str>;
}
