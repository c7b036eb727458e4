use crate::classifier::evidence::Evidence;
use crate::classifier::state::{ClassStats, ModelState};
use crate::error::ClassifierError;
use crate::models::{FileRef, TrainingSet};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Multinomial Naive Bayes over file-name (and optionally content) tokens,
/// with add-one smoothing, scored in log space.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    evidence: Evidence,
    parallel: bool,
    state: ModelState,
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier
    pub fn new(evidence: Evidence) -> Self {
        Self {
            evidence,
            parallel: true,
            state: ModelState::default(),
        }
    }

    /// Tokenize training files on the rayon pool (default) or sequentially
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub(crate) fn from_state(evidence: Evidence, state: ModelState) -> Self {
        Self {
            evidence,
            parallel: true,
            state,
        }
    }

    pub fn evidence(&self) -> Evidence {
        self.evidence
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn is_trained(&self) -> bool {
        self.state.is_trained()
    }

    /// Train from labelled files, replacing any previous model.
    ///
    /// Labels with no files are kept (with zero documents) but can never be
    /// predicted. Fails only when the whole set holds no files.
    pub fn fit(&mut self, data: &TrainingSet) -> Result<(), ClassifierError> {
        if data.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        let evidence = self.evidence;
        let jobs: Vec<(usize, &FileRef)> = data
            .classes()
            .iter()
            .enumerate()
            .flat_map(|(index, (_, files))| files.iter().map(move |file| (index, file)))
            .collect();

        // Per-file token lists come back in input order either way
        let per_file: Vec<(usize, Vec<String>)> = if self.parallel {
            jobs.par_iter()
                .map(|(index, file)| (*index, evidence.tokens(file)))
                .collect()
        } else {
            jobs.iter()
                .map(|(index, file)| (*index, evidence.tokens(file)))
                .collect()
        };

        let mut counters: Vec<BTreeMap<String, u64>> = vec![BTreeMap::new(); data.classes().len()];
        let mut vocabulary = BTreeSet::new();
        for (index, tokens) in per_file {
            for token in tokens {
                *counters[index].entry(token.clone()).or_insert(0) += 1;
                vocabulary.insert(token);
            }
        }

        let classes: Vec<ClassStats> = data
            .classes()
            .iter()
            .zip(counters)
            .map(|((label, files), token_counts)| ClassStats {
                label: label.clone(),
                documents: files.len() as u64,
                total_tokens: token_counts.values().sum(),
                token_counts,
            })
            .collect();

        let state = ModelState {
            generation: self.state.generation + 1,
            vocabulary,
            total_documents: classes.iter().map(|c| c.documents).sum(),
            classes,
        };

        tracing::info!(
            classes = state.classes.len(),
            documents = state.total_documents,
            vocabulary = state.vocabulary.len(),
            generation = state.generation,
            "trained classifier"
        );

        self.state = state;
        Ok(())
    }

    /// Log score of every class that has training documents, in training order
    pub fn scores(&self, file: &FileRef) -> Result<Vec<(String, f64)>, ClassifierError> {
        if !self.state.is_trained() {
            return Err(ClassifierError::NotTrained);
        }
        let tokens = self.evidence.tokens(file);
        Ok(self.score_tokens(&tokens))
    }

    /// Most probable label for a file.
    ///
    /// Equal scores resolve to the class seen first during training.
    pub fn predict(&self, file: &FileRef) -> Result<String, ClassifierError> {
        self.predict_scored(file).map(|(label, _)| label)
    }

    /// Winning label together with the scores it was picked from
    pub fn predict_scored(
        &self,
        file: &FileRef,
    ) -> Result<(String, Vec<(String, f64)>), ClassifierError> {
        let scores = self.scores(file)?;
        let mut best: Option<(&str, f64)> = None;
        for (label, score) in &scores {
            if best.map_or(true, |(_, top)| *score > top) {
                best = Some((label.as_str(), *score));
            }
        }
        let label = best
            .map(|(label, _)| label.to_string())
            .ok_or(ClassifierError::NotTrained)?;
        Ok((label, scores))
    }

    /// Shorthand for predicting from a bare file name
    pub fn predict_name(&self, name: &str) -> Result<String, ClassifierError> {
        self.predict(&FileRef::from_name(name))
    }

    fn score_tokens(&self, tokens: &[String]) -> Vec<(String, f64)> {
        let total_documents = self.state.total_documents as f64;
        let vocabulary = self.state.vocabulary.len() as f64;

        self.state
            .classes
            .iter()
            .filter(|class| class.documents > 0)
            .map(|class| {
                // Only zero when no training file produced a single token
                let denom = (class.total_tokens as f64 + vocabulary).max(1.0);
                let mut score = (class.documents as f64 / total_documents).ln();
                // Tokens unseen anywhere still add log(1/denom)
                for token in tokens {
                    score += ((class.count(token) as f64 + 1.0) / denom).ln();
                }
                (class.label.clone(), score)
            })
            .collect()
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new(Evidence::default())
    }
}
