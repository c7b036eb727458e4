pub mod evidence;
pub mod naive_bayes;
pub mod state;

pub use evidence::Evidence;
pub use naive_bayes::NaiveBayesClassifier;
pub use state::{ClassStats, ModelState};
