use crate::classifier::NaiveBayesClassifier;
use crate::models::FileRef;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Destination chosen for one incoming file
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub source: Option<PathBuf>,
    pub folder: String,
    /// Log score per folder, in training order
    pub scores: Vec<(String, f64)>,
}

impl Assignment {
    /// The `n` best-scoring folders, highest first
    pub fn top_scores(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(label, score)| (label.as_str(), *score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Output layout of a mapping file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MappingFormat {
    /// `name -> folder` per line
    #[default]
    Text,
    /// `file,folder` CSV with a header row
    Csv,
}

impl FromStr for MappingFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(MappingFormat::Text),
            "csv" => Ok(MappingFormat::Csv),
            other => Err(format!("unknown mapping format: {other}")),
        }
    }
}

/// Predict a folder for every file, in the given order
pub fn classify_files(
    classifier: &NaiveBayesClassifier,
    files: &[FileRef],
    progress: Option<&ProgressBar>,
) -> Result<Vec<Assignment>> {
    let mut assignments = Vec::with_capacity(files.len());
    for file in files {
        let (folder, scores) = classifier
            .predict_scored(file)
            .with_context(|| format!("Failed to classify {}", file.name))?;
        tracing::debug!(file = %file.name, folder = %folder, "classified");
        assignments.push(Assignment {
            name: file.name.clone(),
            source: file.path.clone(),
            folder,
            scores,
        });
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    Ok(assignments)
}

/// Write a mapping to any writer
pub fn write_mapping_to<W: Write>(
    assignments: &[Assignment],
    writer: W,
    format: MappingFormat,
) -> Result<()> {
    match format {
        MappingFormat::Text => {
            let mut writer = writer;
            for assignment in assignments {
                writeln!(writer, "{} -> {}", assignment.name, assignment.folder)
                    .context("Failed to write mapping line")?;
            }
            writer.flush().context("Failed to flush mapping")?;
        }
        MappingFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer
                .write_record(["file", "folder"])
                .context("Failed to write CSV header")?;
            for assignment in assignments {
                csv_writer
                    .write_record([assignment.name.as_str(), assignment.folder.as_str()])
                    .context("Failed to write CSV record")?;
            }
            csv_writer.flush().context("Failed to flush CSV mapping")?;
        }
    }
    Ok(())
}

/// Write a mapping file
pub fn write_mapping(assignments: &[Assignment], path: &Path, format: MappingFormat) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create mapping file: {}", path.display()))?;
    write_mapping_to(assignments, std::io::BufWriter::new(file), format)
        .with_context(|| format!("Failed to write mapping file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Evidence;
    use crate::models::TrainingSet;
    use tempfile::TempDir;

    fn assignments() -> Vec<Assignment> {
        vec![
            Assignment {
                name: "notes.txt".to_string(),
                source: None,
                folder: "docs".to_string(),
                scores: Vec::new(),
            },
            Assignment {
                name: "a, b.jpg".to_string(),
                source: None,
                folder: "images/2024".to_string(),
                scores: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_write_mapping_text() {
        let mut out = Vec::new();
        write_mapping_to(&assignments(), &mut out, MappingFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "notes.txt -> docs\na, b.jpg -> images/2024\n"
        );
    }

    #[test]
    fn test_write_mapping_csv_quotes_fields() {
        let mut out = Vec::new();
        write_mapping_to(&assignments(), &mut out, MappingFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "file,folder\nnotes.txt,docs\n\"a, b.jpg\",images/2024\n"
        );
    }

    #[test]
    fn test_write_mapping_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mapping.txt");
        write_mapping(&assignments(), &path, MappingFormat::Text).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("notes.txt -> docs"));
    }

    #[test]
    fn test_mapping_format_from_str() {
        assert_eq!("CSV".parse::<MappingFormat>().unwrap(), MappingFormat::Csv);
        assert_eq!("text".parse::<MappingFormat>().unwrap(), MappingFormat::Text);
        assert!("xml".parse::<MappingFormat>().is_err());
    }

    #[test]
    fn test_classify_files_keeps_order() {
        let data: TrainingSet = vec![
            ("docs", vec![FileRef::from_name("a.txt")]),
            ("code", vec![FileRef::from_name("main.py")]),
        ]
        .into_iter()
        .collect();
        let mut clf = NaiveBayesClassifier::new(Evidence::NameOnly);
        clf.fit(&data).unwrap();

        let files = vec![FileRef::from_name("run.py"), FileRef::from_name("todo.txt")];
        let result = classify_files(&clf, &files, None).unwrap();
        let folders: Vec<_> = result.iter().map(|a| a.folder.as_str()).collect();
        assert_eq!(folders, vec!["code", "docs"]);
    }

    #[test]
    fn test_classify_files_keeps_scores() {
        let data: TrainingSet = vec![
            ("docs", vec![FileRef::from_name("a.txt")]),
            ("code", vec![FileRef::from_name("main.py")]),
        ]
        .into_iter()
        .collect();
        let mut clf = NaiveBayesClassifier::new(Evidence::NameOnly);
        clf.fit(&data).unwrap();

        let file = FileRef::from_name("run.py");
        let result = classify_files(&clf, std::slice::from_ref(&file), None).unwrap();
        let assignment = &result[0];
        assert_eq!(assignment.scores, clf.scores(&file).unwrap());

        let top = assignment.top_scores(3);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, assignment.folder);
        assert!(top[0].1 >= top[1].1);
        assert_eq!(assignment.top_scores(1).len(), 1);
    }

    #[test]
    fn test_classify_files_untrained_fails() {
        let clf = NaiveBayesClassifier::default();
        let files = vec![FileRef::from_name("run.py")];
        assert!(classify_files(&clf, &files, None).is_err());
    }
}
