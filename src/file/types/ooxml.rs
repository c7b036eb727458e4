use crate::constants::{
    MAX_PART_BYTES, SHARED_STRINGS_PART, SLIDE_PART_PREFIX, WORD_DOCUMENT_PART,
    WORKSHEET_PART_PREFIX,
};
use crate::error::ExtractionError;
use crate::file::TextSource;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Which OOXML package layout to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OoxmlKind {
    /// `word/document.xml`
    Word,
    /// `ppt/slides/slideN.xml`
    Presentation,
    /// `xl/sharedStrings.xml` followed by `xl/worksheets/sheetN.xml`
    Spreadsheet,
}

/// Zip-based office document (docx, pptx, xlsx and their macro/template variants)
pub struct OoxmlFile {
    path: std::path::PathBuf,
    extension: Option<String>,
    kind: OoxmlKind,
}

impl OoxmlFile {
    pub fn new(path: std::path::PathBuf, extension: Option<String>, kind: OoxmlKind) -> Self {
        Self {
            path,
            extension,
            kind,
        }
    }

    pub fn kind(&self) -> OoxmlKind {
        self.kind
    }
}

impl TextSource for OoxmlFile {
    fn to_text_impl(&self) -> Result<String, ExtractionError> {
        let file = File::open(&self.path)?;
        let mut archive = ZipArchive::new(file)?;
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();

        let parts = match self.kind {
            OoxmlKind::Word => {
                if !names.iter().any(|n| n == WORD_DOCUMENT_PART) {
                    return Err(ExtractionError::MissingPart(WORD_DOCUMENT_PART.to_string()));
                }
                vec![WORD_DOCUMENT_PART.to_string()]
            }
            OoxmlKind::Presentation => numbered_parts(&names, SLIDE_PART_PREFIX),
            OoxmlKind::Spreadsheet => {
                let mut parts = Vec::new();
                if names.iter().any(|n| n == SHARED_STRINGS_PART) {
                    parts.push(SHARED_STRINGS_PART.to_string());
                }
                parts.extend(numbered_parts(&names, WORKSHEET_PART_PREFIX));
                parts
            }
        };

        let mut chunks = Vec::new();
        for part in &parts {
            let xml = read_part(&mut archive, part)?;
            let text = xml_text(&xml)?;
            if !text.is_empty() {
                chunks.push(text);
            }
        }

        Ok(chunks.join(" "))
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Parts named `<prefix><N>.xml`, ordered by N
fn numbered_parts(names: &[String], prefix: &str) -> Vec<String> {
    let mut numbered: Vec<(u32, &String)> = names
        .iter()
        .filter_map(|name| {
            let index = name.strip_prefix(prefix)?.strip_suffix(".xml")?;
            index.parse::<u32>().ok().map(|n| (n, name))
        })
        .collect();
    numbered.sort_by_key(|(n, _)| *n);
    numbered.into_iter().map(|(_, name)| name.clone()).collect()
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<String, ExtractionError> {
    let part = archive.by_name(name)?;
    let mut bytes = Vec::new();
    part.take(MAX_PART_BYTES).read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Text and CDATA content of every element, in document order, space separated
pub fn xml_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pieces: Vec<String> = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let text = match e.unescape() {
                    Ok(text) => text.into_owned(),
                    // Unknown entities: keep the raw text
                    Err(_) => String::from_utf8_lossy(&e).into_owned(),
                };
                if !text.trim().is_empty() {
                    pieces.push(text);
                }
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                if !text.trim().is_empty() {
                    pieces.push(text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(pieces.join(" "))
}
