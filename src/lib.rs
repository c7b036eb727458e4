pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod file;
pub mod logging;
pub mod models;
pub mod organizer;
pub mod persistence;
pub mod tokenizer;
pub mod utils;

pub use classifier::{Evidence, NaiveBayesClassifier};
pub use error::{ClassifierError, ExtractionError, ModelError};
pub use models::{FileRef, TrainingSet};
pub use tokenizer::{tokenize, tokenize_name};
