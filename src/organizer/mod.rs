pub mod learn;
pub mod mapping;
pub mod mover;
pub mod preview;

pub use learn::{collect_incoming, learn_structure, LearnOptions};
pub use mapping::{classify_files, write_mapping, write_mapping_to, Assignment, MappingFormat};
pub use mover::FileMover;
pub use preview::PreviewTree;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Evidence, NaiveBayesClassifier};
    use std::collections::HashMap;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn build_tree(tmp: &Path) {
        let root = tmp.join("root");
        for file in [
            "docs/a.txt",
            "docs/b.txt",
            "images/x.jpg",
            "images/y.png",
            "code/main.py",
            "code/util.py",
        ] {
            write(&root.join(file), "sample");
        }
        for file in ["notes.txt", "photo.jpg", "script.py"] {
            write(&tmp.join("incoming").join(file), "sample");
        }
    }

    fn classify(tmp: &Path, evidence: Evidence) -> HashMap<String, String> {
        let data = learn_structure(&tmp.join("root"), &LearnOptions::default()).unwrap();
        let mut clf = NaiveBayesClassifier::new(evidence);
        clf.fit(&data).unwrap();

        let files = collect_incoming(&tmp.join("incoming"), true).unwrap();
        classify_files(&clf, &files, None)
            .unwrap()
            .into_iter()
            .map(|a| (a.name, a.folder))
            .collect()
    }

    #[test]
    fn test_classify_incoming_by_name() {
        let tmp = TempDir::new().unwrap();
        build_tree(tmp.path());

        let mapping = classify(tmp.path(), Evidence::NameOnly);
        assert_eq!(mapping["notes.txt"], "docs");
        assert_eq!(mapping["photo.jpg"], "images");
        assert_eq!(mapping["script.py"], "code");
    }

    #[test]
    fn test_classify_incoming_with_content() {
        let tmp = TempDir::new().unwrap();
        build_tree(tmp.path());

        let mapping = classify(tmp.path(), Evidence::NameAndContent);
        assert_eq!(mapping["notes.txt"], "docs");
        assert_eq!(mapping["photo.jpg"], "images");
        assert_eq!(mapping["script.py"], "code");
    }

    #[test]
    fn test_apply_mapping_moves_files() {
        let tmp = TempDir::new().unwrap();
        build_tree(tmp.path());
        let root = tmp.path().join("root");
        let incoming = tmp.path().join("incoming");

        let data = learn_structure(&root, &LearnOptions::default()).unwrap();
        let mut clf = NaiveBayesClassifier::new(Evidence::NameOnly);
        clf.fit(&data).unwrap();
        let assignments = classify_files(&clf, &collect_incoming(&incoming, true).unwrap(), None).unwrap();

        let mapping_file = tmp.path().join("mapping.txt");
        write_mapping(&assignments, &mapping_file, MappingFormat::Text).unwrap();
        let written = std::fs::read_to_string(&mapping_file).unwrap();
        assert_eq!(
            written,
            "notes.txt -> docs\nphoto.jpg -> images\nscript.py -> code\n"
        );

        let mover = FileMover::new(&root).unwrap();
        let preview = mover.plan_moves(&assignments, &incoming).unwrap();
        mover.execute(&preview, false).unwrap();

        assert!(root.join("docs/notes.txt").exists());
        assert!(root.join("images/photo.jpg").exists());
        assert!(root.join("code/script.py").exists());
        assert_eq!(std::fs::read_dir(&incoming).unwrap().count(), 0);
    }
}
