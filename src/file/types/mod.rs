pub mod generic;
pub mod legacy;
pub mod ooxml;
pub mod pdf;
pub mod text;

pub use generic::GenericFile;
pub use legacy::LegacyOfficeFile;
pub use ooxml::{OoxmlFile, OoxmlKind};
pub use pdf::PdfFile;
pub use text::TextFile;
