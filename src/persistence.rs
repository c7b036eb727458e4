use crate::classifier::{Evidence, ModelState, NaiveBayesClassifier};
use crate::constants::{MODEL_FORMAT, MODEL_VERSION};
use crate::error::ModelError;
use crate::utils::hash_bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedModel {
    evidence: Evidence,
    state: ModelState,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    format: String,
    version: u32,
    checksum: String,
    model: PersistedModel,
}

#[derive(Debug, Deserialize)]
struct Header {
    format: String,
    version: u32,
}

/// Encode a trained classifier.
///
/// The output is a JSON envelope holding the format tag, the version and a
/// blake3 checksum of the canonical model encoding.
pub fn serialize(classifier: &NaiveBayesClassifier) -> Result<Vec<u8>, ModelError> {
    classifier.state().validate().map_err(ModelError::InvalidModel)?;

    let model = PersistedModel {
        evidence: classifier.evidence(),
        state: classifier.state().clone(),
    };
    let checksum = hash_bytes(&serde_json::to_vec(&model)?);
    let envelope = Envelope {
        format: MODEL_FORMAT.to_string(),
        version: MODEL_VERSION,
        checksum,
        model,
    };

    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode a classifier produced by [`serialize`].
///
/// Fails unless the bytes carry a known format and version, a matching
/// checksum and a structurally valid, trained model.
pub fn deserialize(bytes: &[u8]) -> Result<NaiveBayesClassifier, ModelError> {
    let header: Header = serde_json::from_slice(bytes)?;
    if header.format != MODEL_FORMAT || header.version != MODEL_VERSION {
        return Err(ModelError::UnsupportedFormat {
            format: header.format,
            version: header.version,
        });
    }

    let envelope: Envelope = serde_json::from_slice(bytes)?;
    if hash_bytes(&serde_json::to_vec(&envelope.model)?) != envelope.checksum {
        return Err(ModelError::ChecksumMismatch);
    }

    let PersistedModel { evidence, state } = envelope.model;
    state.validate().map_err(ModelError::InvalidModel)?;

    Ok(NaiveBayesClassifier::from_state(evidence, state))
}

impl NaiveBayesClassifier {
    /// Write the trained model to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let bytes = serialize(self)?;
        std::fs::write(path.as_ref(), bytes)?;
        tracing::debug!(path = %path.as_ref().display(), "saved model");
        Ok(())
    }

    /// Read a model previously written with [`NaiveBayesClassifier::save`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path.as_ref())?;
        let classifier = deserialize(&bytes)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            classes = classifier.state().classes.len(),
            "loaded model"
        );
        Ok(classifier)
    }
}
