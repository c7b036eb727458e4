use crate::organizer::mapping::Assignment;
use crate::organizer::preview::PreviewTree;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Files classified assignments into folders under a training root
pub struct FileMover {
    base_path: PathBuf,
}

impl FileMover {
    /// Create a new FileMover for the given base directory
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path
            .as_ref()
            .canonicalize()
            .context("Failed to canonicalize base path")?;

        if !base_path.is_dir() {
            anyhow::bail!("Base path is not a directory: {}", base_path.display());
        }

        Ok(Self { base_path })
    }

    /// Turn assignments into directory creations and moves (nothing touched yet).
    ///
    /// Assignments without a source path are resolved against `incoming`.
    pub fn plan_moves(&self, assignments: &[Assignment], incoming: &Path) -> Result<PreviewTree> {
        let mut preview = PreviewTree::new();

        for assignment in assignments {
            let dest_dir = self.folder_path(&assignment.folder)?;
            let source = assignment
                .source
                .clone()
                .unwrap_or_else(|| incoming.join(&assignment.name));
            let destination = dest_dir.join(&assignment.name);

            if destination.exists() {
                anyhow::bail!("Destination already exists: {}", destination.display());
            }
            if preview.files_to_move.iter().any(|op| op.destination == destination) {
                anyhow::bail!("Two files would be moved to {}", destination.display());
            }

            if !dest_dir.is_dir() {
                preview.add_directory(dest_dir);
            }
            preview.add_move(source, destination);
        }

        Ok(preview)
    }

    /// Resolve a `/`-separated folder label below the base path
    fn folder_path(&self, folder: &str) -> Result<PathBuf> {
        let relative = Path::new(folder);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            anyhow::bail!("Folder escapes the base path: {}", folder);
        }
        Ok(self.base_path.join(relative))
    }

    /// Execute file moves after confirmation
    pub fn execute(&self, preview: &PreviewTree, dry_run: bool) -> Result<()> {
        if dry_run {
            println!("DRY RUN - No files will be moved");
            return Ok(());
        }

        // Create directories first
        for dir_op in &preview.directories_to_create {
            fs::create_dir_all(&dir_op.path)
                .with_context(|| format!("Failed to create directory: {}", dir_op.path.display()))?;
        }

        for move_op in &preview.files_to_move {
            if !move_op.destination.starts_with(&self.base_path) {
                anyhow::bail!(
                    "Destination outside base path: {}",
                    move_op.destination.display()
                );
            }

            if let Some(parent) = move_op.destination.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create destination directory: {}", parent.display())
                })?;
            }

            move_file(&move_op.source, &move_op.destination)?;
            tracing::debug!(
                from = %move_op.source.display(),
                to = %move_op.destination.display(),
                "moved file"
            );
        }

        Ok(())
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Rename, falling back to copy + remove across filesystems
fn move_file(source: &Path, destination: &Path) -> Result<()> {
    if fs::rename(source, destination).is_ok() {
        return Ok(());
    }

    fs::copy(source, destination).with_context(|| {
        format!(
            "Failed to move {} to {}",
            source.display(),
            destination.display()
        )
    })?;
    fs::remove_file(source)
        .with_context(|| format!("Failed to remove {} after copying", source.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn assignment(name: &str, folder: &str) -> Assignment {
        Assignment {
            name: name.to_string(),
            source: None,
            folder: folder.to_string(),
            scores: Vec::new(),
        }
    }

    #[test]
    fn test_mover_creation() {
        let temp_dir = TempDir::new().unwrap();
        let mover = FileMover::new(temp_dir.path()).unwrap();
        assert_eq!(mover.base_path(), temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_mover_rejects_missing_base() {
        assert!(FileMover::new("/nonexistent/base").is_err());
    }

    #[test]
    fn test_plan_moves() {
        let root = TempDir::new().unwrap();
        let incoming = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("docs")).unwrap();
        let mover = FileMover::new(root.path()).unwrap();

        let preview = mover
            .plan_moves(
                &[assignment("a.txt", "docs"), assignment("b.txt", "docs/letters"), assignment("c.txt", "docs/letters")],
                incoming.path(),
            )
            .unwrap();

        // "docs" exists already; "docs/letters" is created once
        assert_eq!(preview.directories_to_create.len(), 1);
        assert_eq!(preview.files_to_move.len(), 3);
        assert_eq!(preview.files_to_move[0].source, incoming.path().join("a.txt"));
        assert_eq!(
            preview.files_to_move[1].destination,
            mover.base_path().join("docs/letters/b.txt")
        );
    }

    #[test]
    fn test_plan_moves_rejects_escaping_folder() {
        let root = TempDir::new().unwrap();
        let incoming = TempDir::new().unwrap();
        let mover = FileMover::new(root.path()).unwrap();

        assert!(mover
            .plan_moves(&[assignment("a.txt", "../outside")], incoming.path())
            .is_err());
        assert!(mover
            .plan_moves(&[assignment("a.txt", "/etc")], incoming.path())
            .is_err());
    }

    #[test]
    fn test_plan_moves_rejects_overwrite() {
        let root = TempDir::new().unwrap();
        let incoming = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("docs")).unwrap();
        std::fs::write(root.path().join("docs/a.txt"), "existing").unwrap();
        let mover = FileMover::new(root.path()).unwrap();

        assert!(mover
            .plan_moves(&[assignment("a.txt", "docs")], incoming.path())
            .is_err());
    }

    #[test]
    fn test_mover_execute_dry_run() {
        let root = TempDir::new().unwrap();
        let incoming = TempDir::new().unwrap();
        std::fs::write(incoming.path().join("a.txt"), "content").unwrap();
        let mover = FileMover::new(root.path()).unwrap();

        let preview = mover
            .plan_moves(&[assignment("a.txt", "docs")], incoming.path())
            .unwrap();
        mover.execute(&preview, true).unwrap();

        assert!(!root.path().join("docs").exists());
        assert!(incoming.path().join("a.txt").exists());
    }

    #[test]
    fn test_mover_execute_real() {
        let root = TempDir::new().unwrap();
        let incoming = TempDir::new().unwrap();
        std::fs::write(incoming.path().join("a.txt"), "content").unwrap();
        let mover = FileMover::new(root.path()).unwrap();

        let preview = mover
            .plan_moves(&[assignment("a.txt", "docs/notes")], incoming.path())
            .unwrap();
        mover.execute(&preview, false).unwrap();

        assert!(!incoming.path().join("a.txt").exists());
        let moved = root.path().join("docs/notes/a.txt");
        assert_eq!(std::fs::read_to_string(moved).unwrap(), "content");
    }
}
