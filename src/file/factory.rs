use crate::constants::{
    OOXML_PRESENTATION_EXTENSIONS, OOXML_SPREADSHEET_EXTENSIONS, OOXML_WORD_EXTENSIONS,
    PRESENTATION_EXTENSIONS, SPREADSHEET_EXTENSIONS, TEXT_EXTENSIONS, WORD_EXTENSIONS,
};
use crate::file::types::{GenericFile, LegacyOfficeFile, OoxmlFile, OoxmlKind, PdfFile, TextFile};
use crate::file::TextSource;
use crate::utils::get_extension;
use std::path::{Path, PathBuf};

/// Factory for creating TextSource instances based on file extension
pub struct FileFactory;

impl FileFactory {
    /// Create a TextSource for a path, using its own extension
    pub fn for_path(path: &Path) -> Box<dyn TextSource> {
        Self::create(path.to_path_buf(), get_extension(path))
    }

    /// Create a TextSource from path and extension
    pub fn create(path: PathBuf, extension: Option<String>) -> Box<dyn TextSource> {
        let ext_lower = extension.as_ref().map(|s| s.to_lowercase());

        match ext_lower.as_deref() {
            None => Box::new(TextFile::new(path, extension)),
            Some("pdf") => Box::new(PdfFile::new(path, extension)),
            Some(ext) if TEXT_EXTENSIONS.contains(&ext) => Box::new(TextFile::new(path, extension)),
            Some(ext) if OOXML_WORD_EXTENSIONS.contains(&ext) => {
                Box::new(OoxmlFile::new(path, extension, OoxmlKind::Word))
            }
            Some(ext) if OOXML_PRESENTATION_EXTENSIONS.contains(&ext) => {
                Box::new(OoxmlFile::new(path, extension, OoxmlKind::Presentation))
            }
            Some(ext) if OOXML_SPREADSHEET_EXTENSIONS.contains(&ext) => {
                Box::new(OoxmlFile::new(path, extension, OoxmlKind::Spreadsheet))
            }
            Some(ext)
                if WORD_EXTENSIONS.contains(&ext)
                    || SPREADSHEET_EXTENSIONS.contains(&ext)
                    || PRESENTATION_EXTENSIONS.contains(&ext) =>
            {
                Box::new(LegacyOfficeFile::new(path, extension))
            }
            _ => Box::new(GenericFile::new(path, extension)),
        }
    }
}

/// Best-effort text extraction; every failure degrades to empty text
pub fn extract_text(path: &Path) -> String {
    match FileFactory::for_path(path).to_text() {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "content extraction failed, using name only");
            String::new()
        }
    }
}
