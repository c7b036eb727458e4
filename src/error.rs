use thiserror::Error;

/// Errors raised while pulling text out of a file.
///
/// These never leave the crate through `file::extract_text`: every failure
/// degrades to empty text and the caller falls back to the file name.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive has no part named {0}")]
    MissingPart(String),
    #[error("XML parse error: {0}")]
    Xml(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("content looks binary")]
    Binary,
    #[error("unsupported format: {0}")]
    Unsupported(String),
}

impl From<quick_xml::Error> for ExtractionError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractionError::Xml(err.to_string())
    }
}

/// Errors surfaced by training and prediction.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("training set contains no files")]
    EmptyTrainingSet,
    #[error("classifier has not been trained")]
    NotTrained,
}

/// Errors surfaced when saving or loading a model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed model payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("unsupported model format {format:?} version {version}")]
    UnsupportedFormat { format: String, version: u32 },
    #[error("model checksum mismatch")]
    ChecksumMismatch,
    #[error("invalid model: {0}")]
    InvalidModel(String),
}
