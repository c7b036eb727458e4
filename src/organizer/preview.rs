use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Represents a file move operation
#[derive(Debug, Clone)]
pub struct MoveOperation {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Represents a directory creation operation
#[derive(Debug, Clone)]
pub struct CreateDirOperation {
    pub path: PathBuf,
}

/// Collection of operations for preview
#[derive(Debug, Clone, Default)]
pub struct PreviewTree {
    pub directories_to_create: Vec<CreateDirOperation>,
    pub files_to_move: Vec<MoveOperation>,
}

impl PreviewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory to be created (once)
    pub fn add_directory(&mut self, path: PathBuf) {
        if !self.directories_to_create.iter().any(|op| op.path == path) {
            self.directories_to_create.push(CreateDirOperation { path });
        }
    }

    /// Add a file move operation
    pub fn add_move(&mut self, source: PathBuf, destination: PathBuf) {
        self.files_to_move.push(MoveOperation {
            source,
            destination,
        });
    }

    /// Check if there are any operations
    pub fn is_empty(&self) -> bool {
        self.directories_to_create.is_empty() && self.files_to_move.is_empty()
    }
}

impl fmt::Display for PreviewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Proposed changes:")?;

        // Group files by destination directory
        let mut dir_files: BTreeMap<PathBuf, Vec<&MoveOperation>> = BTreeMap::new();
        for op in &self.files_to_move {
            let dir = op
                .destination
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| op.destination.clone());
            dir_files.entry(dir).or_default().push(op);
        }

        for (dir, files) in &dir_files {
            writeln!(f, "📁 {}/", dir.display())?;
            for file_op in files {
                let file_name = file_op
                    .destination
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                writeln!(f, "  📄 {} (from: {})", file_name, file_op.source.display())?;
            }
        }

        write!(
            f,
            "\nCreate {} directories, move {} files",
            self.directories_to_create.len(),
            self.files_to_move.len()
        )
    }
}
