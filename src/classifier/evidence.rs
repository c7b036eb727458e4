use crate::file::extract_text;
use crate::models::FileRef;
use crate::tokenizer::{tokenize, tokenize_name};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a file contributes as evidence, fixed when the classifier is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// File name tokens only
    NameOnly,
    /// File name tokens followed by tokens of the extracted content
    #[default]
    NameAndContent,
}

impl Evidence {
    /// Tokens for one file. Name tokens always come first, so a failed
    /// extraction still leaves the name as evidence.
    pub fn tokens(&self, file: &FileRef) -> Vec<String> {
        let mut tokens = tokenize_name(&file.name);
        if let (Evidence::NameAndContent, Some(path)) = (self, file.path()) {
            tokens.extend(tokenize(&extract_text(path)));
        }
        tokens
    }
}

impl FromStr for Evidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "name-only" | "name_only" => Ok(Evidence::NameOnly),
            "content" | "name+content" | "name_and_content" => Ok(Evidence::NameAndContent),
            other => Err(format!("unknown evidence mode: {other} (expected 'name' or 'content')")),
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evidence::NameOnly => write!(f, "name"),
            Evidence::NameAndContent => write!(f, "content"),
        }
    }
}
