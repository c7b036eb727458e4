use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A file handed to the classifier: always a name, optionally a readable path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRef {
    /// File name used as name evidence
    pub name: String,
    /// Location of the content, if it can be read
    pub path: Option<PathBuf>,
}

impl FileRef {
    /// A bare name with no content behind it
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    /// A file on disk; the name is the final path component
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path: Some(path),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Labelled training examples, grouped by label in first-seen order.
///
/// Order matters only for the tie-break in prediction.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    classes: Vec<(String, Vec<FileRef>)>,
    /// Label -> position in `classes`
    index: HashMap<String, usize>,
}

impl TrainingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a label even if it ends up with no files
    pub fn add_class(&mut self, label: impl Into<String>) {
        self.position(label.into());
    }

    /// Add one file under a label, merging with an earlier occurrence of it
    pub fn add(&mut self, label: impl Into<String>, file: FileRef) {
        let position = self.position(label.into());
        self.classes[position].1.push(file);
    }

    fn position(&mut self, label: String) -> usize {
        if let Some(&position) = self.index.get(&label) {
            return position;
        }
        let position = self.classes.len();
        self.index.insert(label.clone(), position);
        self.classes.push((label, Vec::new()));
        position
    }

    pub fn classes(&self) -> &[(String, Vec<FileRef>)] {
        &self.classes
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|(l, _)| l.as_str())
    }

    pub fn file_count(&self) -> usize {
        self.classes.iter().map(|(_, files)| files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}

impl<L, I> FromIterator<(L, I)> for TrainingSet
where
    L: Into<String>,
    I: IntoIterator<Item = FileRef>,
{
    fn from_iter<T: IntoIterator<Item = (L, I)>>(iter: T) -> Self {
        let mut set = TrainingSet::new();
        for (label, files) in iter {
            let label = label.into();
            set.add_class(label.clone());
            for file in files {
                set.add(label.clone(), file);
            }
        }
        set
    }
}
