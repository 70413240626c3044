use serde::{Deserialize, Serialize};

use super::category::Category;
use super::error::ClassifierError;

/// A single labelled title used for training
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub label: Category,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, label: Category) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

const BUILTIN_TITLES: [&str; 12] = [
    "python tutorial",
    "machine learning basics",
    "data science project",
    "football match highlights",
    "cricket world cup",
    "sports training session",
    "movie trailer",
    "funny comedy video",
    "music concert live",
    "technology review",
    "latest gadgets",
    "programming tips",
];

const BUILTIN_LABELS: [Category; 12] = [
    Category::Education,
    Category::Education,
    Category::Education,
    Category::Sports,
    Category::Sports,
    Category::Sports,
    Category::Entertainment,
    Category::Entertainment,
    Category::Entertainment,
    Category::Technology,
    Category::Technology,
    Category::Technology,
];

/// An ordered, immutable snapshot of training examples.
///
/// The vectorizer and the Naive Bayes model are always fitted from the same
/// `Corpus` value, which is what keeps them consistent with each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    examples: Vec<TrainingExample>,
}

impl Corpus {
    /// The 12 hardcoded video titles, three per category.
    pub fn builtin() -> Self {
        let examples = BUILTIN_TITLES
            .iter()
            .zip(BUILTIN_LABELS.iter())
            .map(|(text, label)| TrainingExample::new(*text, *label))
            .collect();
        Self { examples }
    }

    /// Builds a corpus from parallel text and label lists.
    ///
    /// # Errors
    /// `BuildError` if either list is empty or their lengths differ.
    pub fn from_parts<S: Into<String>>(
        texts: Vec<S>,
        labels: Vec<Category>,
    ) -> Result<Self, ClassifierError> {
        if texts.len() != labels.len() {
            return Err(ClassifierError::BuildError(format!(
                "Corpus has {} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }
        if texts.is_empty() {
            return Err(ClassifierError::BuildError("Corpus cannot be empty".into()));
        }
        let examples = texts
            .into_iter()
            .zip(labels)
            .map(|(text, label)| TrainingExample::new(text, label))
            .collect();
        Ok(Self { examples })
    }

    pub fn push(&mut self, example: TrainingExample) {
        self.examples.push(example);
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(|e| e.text.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = Category> + '_ {
        self.examples.iter().map(|e| e.label)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of examples carrying `label`
    pub fn count(&self, label: Category) -> usize {
        self.examples.iter().filter(|e| e.label == label).count()
    }

    /// Distinct labels present in the corpus, sorted by name.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.labels().collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
