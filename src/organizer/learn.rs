use crate::models::{FileRef, TrainingSet};
use crate::utils::{is_hidden_name, is_protected_dir_name};
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// How the training tree is walked
#[derive(Debug, Clone)]
pub struct LearnOptions {
    pub skip_hidden: bool,
    /// Deepest folder level (1 = direct children of the root) whose files are used
    pub max_depth: Option<usize>,
}

impl Default for LearnOptions {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            max_depth: None,
        }
    }
}

/// Build training data from an existing folder tree.
///
/// Every file below `root` is an example of the folder it sits in, labelled
/// by that folder's path relative to `root` (`/`-separated). Files directly
/// in `root` have no label and are skipped.
pub fn learn_structure(root: &Path, options: &LearnOptions) -> Result<TrainingSet> {
    if !root.is_dir() {
        anyhow::bail!("Training root is not a directory: {}", root.display());
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth + 1);
    }

    let skip_hidden = options.skip_hidden;
    let mut data = TrainingSet::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| keep_entry(e, skip_hidden))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(label) = label_for(root, path)? else {
            continue;
        };
        data.add(label, FileRef::from_path(path));
    }

    tracing::info!(
        root = %root.display(),
        classes = data.classes().len(),
        files = data.file_count(),
        "learned folder structure"
    );
    Ok(data)
}

fn keep_entry(entry: &DirEntry, skip_hidden: bool) -> bool {
    // The root itself may live under a dot-directory (e.g. temp dirs)
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() && is_protected_dir_name(&name) {
        return false;
    }
    !(skip_hidden && is_hidden_name(&name))
}

/// Relative folder of `file` under `root`, or None for files in `root` itself
fn label_for(root: &Path, file: &Path) -> Result<Option<String>> {
    let parent = file
        .parent()
        .with_context(|| format!("File has no parent directory: {}", file.display()))?;
    let relative = parent
        .strip_prefix(root)
        .with_context(|| format!("File outside training root: {}", file.display()))?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join("/")))
    }
}

/// Regular files directly inside `dir`, sorted by name.
///
/// Dot-files such as `.DS_Store` are left out when `skip_hidden` is set.
pub fn collect_incoming(dir: &Path, skip_hidden: bool) -> Result<Vec<FileRef>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read incoming directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }
        if skip_hidden && is_hidden_name(&entry.file_name().to_string_lossy()) {
            continue;
        }
        files.push(FileRef::from_path(entry.path()));
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
