use std::collections::BTreeMap;

use serde::Serialize;

mod error;
mod utils;
pub mod builder;
pub mod category;
#[allow(clippy::module_inception)]
pub mod classifier;
pub mod corpus;
pub mod naive_bayes;
pub mod tokenizer;
pub mod vectorizer;

pub use builder::{ClassDefinition, ClassifierBuilder};
pub use category::Category;
pub use classifier::{Classifier, Prediction};
pub use corpus::{Corpus, TrainingExample};
pub use error::ClassifierError;
pub use naive_bayes::MultinomialNb;
pub use tokenizer::Tokenizer;
pub use vectorizer::TfIdfVectorizer;

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierInfo {
    /// Number of classes the classifier is trained on
    pub num_classes: usize,
    /// Labels of the classes, sorted by name
    pub class_labels: Vec<Category>,
    /// Training examples per class
    pub class_examples: BTreeMap<Category, usize>,
    /// Total number of training examples
    pub num_examples: usize,
    /// Number of terms in the TF-IDF vocabulary
    pub vocabulary_size: usize,
    /// Additive smoothing used when fitting
    pub alpha: f64,
    /// Whether class priors were learned from the corpus
    pub fit_prior: bool,
}
