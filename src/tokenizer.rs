use crate::constants::{
    PRESENTATION_EXTENSIONS, PRESENTATION_FAMILY_TOKEN, SPREADSHEET_EXTENSIONS,
    SPREADSHEET_FAMILY_TOKEN, WORD_EXTENSIONS, WORD_FAMILY_TOKEN,
};
use crate::utils::extension_of_name;

/// Split text into lowercase alphanumeric tokens; duplicates are kept.
///
/// Text is case-folded and split on every run of characters outside `[a-z0-9]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize a file name, appending the office-family token when one applies.
///
/// The family token lets `.doc` and `.docx` files share signal even when
/// their bodies cannot be read.
pub fn tokenize_name(name: &str) -> Vec<String> {
    let mut tokens = tokenize(name);
    if let Some(family) = extension_of_name(name).and_then(|ext| office_family_token(&ext)) {
        tokens.push(family.to_string());
    }
    tokens
}

/// Canonical token for an office-document extension (lowercase, no dot)
pub fn office_family_token(ext: &str) -> Option<&'static str> {
    let ext = ext.to_lowercase();
    let ext = ext.as_str();
    if WORD_EXTENSIONS.contains(&ext) {
        Some(WORD_FAMILY_TOKEN)
    } else if SPREADSHEET_EXTENSIONS.contains(&ext) {
        Some(SPREADSHEET_FAMILY_TOKEN)
    } else if PRESENTATION_EXTENSIONS.contains(&ext) {
        Some(PRESENTATION_FAMILY_TOKEN)
    } else {
        None
    }
}
