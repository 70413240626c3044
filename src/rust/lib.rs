//! A small, deterministic classifier that tags video titles with one of four
//! categories: Education, Entertainment, Sports or Technology.
//!
//! Titles are projected into a TF-IDF vector space learned from a fixed
//! corpus of example titles, and a multinomial Naive Bayes model picks the
//! most likely category.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use snaptag::Category;
//!
//! let classifier = snaptag::initialize()?;
//!
//! let category = snaptag::predict_category(&classifier, "Football Match Highlights");
//! assert_eq!(category, Category::Sports);
//! assert_eq!(classifier.predict_label("python tutorial"), "Education");
//! # Ok(())
//! # }
//! ```
//!
//! # Custom corpora
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use snaptag::{Category, ClassDefinition, Classifier, ClassifierConfig};
//!
//! let classifier = Classifier::builder()
//!     .with_config(ClassifierConfig::default().with_alpha(0.5))
//!     .add_class(
//!         ClassDefinition::new(Category::Technology)
//!             .with_examples(vec!["rust compiler internals", "gpu benchmark"])
//!     )?
//!     .add_class(
//!         ClassDefinition::new(Category::Entertainment)
//!             .with_examples(vec!["stand up comedy", "movie review"])
//!     )?
//!     .build()?;
//!
//! let prediction = classifier.predict("new gpu benchmark results");
//! assert_eq!(prediction.category, Category::Technology);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;

pub use classifier::{
    Category, ClassDefinition, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo,
    Corpus, MultinomialNb, Prediction, TfIdfVectorizer, Tokenizer, TrainingExample,
};
pub use config::ClassifierConfig;

/// Trains a classifier on the built-in corpus with the default configuration.
///
/// Call this once at startup and share the returned value; it never changes
/// afterwards.
///
/// # Errors
/// `BuildError` if the built-in corpus cannot be trained on.
pub fn initialize() -> Result<Classifier, ClassifierError> {
    initialize_with_config(ClassifierConfig::default())
}

/// Trains a classifier on the built-in corpus with `config`.
pub fn initialize_with_config(config: ClassifierConfig) -> Result<Classifier, ClassifierError> {
    Classifier::builder()
        .with_config(config)
        .with_corpus(Corpus::builtin())?
        .build()
}

/// Classifies a video title with an already trained classifier.
pub fn predict_category(classifier: &Classifier, title: &str) -> Category {
    classifier.predict_category(title)
}

pub fn init_logger() {
    env_logger::init();
}
