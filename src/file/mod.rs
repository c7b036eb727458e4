pub mod factory;
pub mod r#trait;
pub mod types;

pub use factory::{extract_text, FileFactory};
pub use r#trait::TextSource;
pub use types::{GenericFile, LegacyOfficeFile, OoxmlFile, OoxmlKind, PdfFile, TextFile};
