use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Token statistics for one destination folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStats {
    pub label: String,
    /// Number of training files filed under this label
    pub documents: u64,
    /// Token -> occurrences across all of the label's files; zero counts are absent
    pub token_counts: BTreeMap<String, u64>,
    /// Sum of `token_counts`
    pub total_tokens: u64,
}

impl ClassStats {
    pub fn count(&self, token: &str) -> u64 {
        self.token_counts.get(token).copied().unwrap_or(0)
    }
}

/// Everything a trained classifier knows. Built in full by `fit` and
/// swapped in as a whole; `generation` counts successful fits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelState {
    pub generation: u64,
    pub vocabulary: BTreeSet<String>,
    /// Classes in training insertion order
    pub classes: Vec<ClassStats>,
    pub total_documents: u64,
}

impl ModelState {
    pub fn is_trained(&self) -> bool {
        self.total_documents > 0 && !self.classes.is_empty()
    }

    pub fn class(&self, label: &str) -> Option<&ClassStats> {
        self.classes.iter().find(|c| c.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.label.as_str())
    }

    /// Check the structural invariants of a trained model
    pub fn validate(&self) -> Result<(), String> {
        if !self.is_trained() {
            return Err("model has no training documents".to_string());
        }

        let documents: u64 = self.classes.iter().map(|c| c.documents).sum();
        if documents != self.total_documents {
            return Err(format!(
                "total_documents is {} but classes hold {}",
                self.total_documents, documents
            ));
        }

        let mut seen = HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.label.as_str()) {
                return Err(format!("duplicate class label {:?}", class.label));
            }

            let mut total = 0u64;
            for (token, &count) in &class.token_counts {
                if count == 0 {
                    return Err(format!("zero count for {:?} in {:?}", token, class.label));
                }
                if !self.vocabulary.contains(token) {
                    return Err(format!(
                        "token {:?} in {:?} is not in the vocabulary",
                        token, class.label
                    ));
                }
                total = total
                    .checked_add(count)
                    .ok_or_else(|| format!("token total overflows in {:?}", class.label))?;
            }
            if total != class.total_tokens {
                return Err(format!(
                    "total_tokens for {:?} is {} but counts sum to {}",
                    class.label, class.total_tokens, total
                ));
            }
        }

        // The vocabulary size feeds every denominator, so it must be exact
        if let Some(token) = self
            .vocabulary
            .iter()
            .find(|token| self.classes.iter().all(|c| c.count(token) == 0))
        {
            return Err(format!("vocabulary token {:?} is not counted by any class", token));
        }

        Ok(())
    }
}
