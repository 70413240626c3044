use std::collections::BTreeMap;
use std::sync::Arc;

use ndarray::Array1;
use serde::Serialize;

use super::category::Category;
use super::corpus::Corpus;
use super::naive_bayes::MultinomialNb;
use super::utils::log_sum_exp;
use super::vectorizer::TfIdfVectorizer;

/// The outcome of classifying one title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// The winning category
    pub category: Category,
    /// Joint log-likelihood of every class the model knows
    pub scores: BTreeMap<Category, f64>,
    /// Posterior probability of every class; sums to 1
    pub probabilities: BTreeMap<Category, f64>,
}

/// A trained title classifier.
///
/// Holds the fitted TF-IDF vectorizer and the Naive Bayes model built from
/// it. Nothing is mutated after construction, so a `Classifier` can be
/// shared across threads with `Arc` and queried without locking.
///
/// ```rust
/// # fn main() -> Result<(), snaptag::ClassifierError> {
/// use snaptag::Category;
/// use std::sync::Arc;
/// use std::thread;
///
/// let classifier = Arc::new(snaptag::initialize()?);
///
/// let classifier_clone = Arc::clone(&classifier);
/// let handle = thread::spawn(move || classifier_clone.predict_category("cricket world cup"));
/// assert_eq!(handle.join().unwrap(), Category::Sports);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    vectorizer: Arc<TfIdfVectorizer>,
    model: Arc<MultinomialNb>,
    corpus: Arc<Corpus>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    pub(crate) fn new(
        vectorizer: Arc<TfIdfVectorizer>,
        model: Arc<MultinomialNb>,
        corpus: Arc<Corpus>,
    ) -> Self {
        Self {
            vectorizer,
            model,
            corpus,
        }
    }

    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the trained model
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            num_classes: self.model.classes().len(),
            class_labels: self.model.classes().to_vec(),
            class_examples: self
                .model
                .classes()
                .iter()
                .map(|&category| (category, self.corpus.count(category)))
                .collect(),
            num_examples: self.corpus.len(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            alpha: self.model.alpha(),
            fit_prior: self.model.fit_prior(),
        }
    }

    /// Classifies `title` into exactly one category.
    ///
    /// Matching is case-insensitive and words never seen in training are
    /// ignored. A title with no known words, including the empty string,
    /// falls back to the class priors. Exact ties resolve to the category
    /// whose name sorts first.
    pub fn predict_category(&self, title: &str) -> Category {
        let features = self.vectorizer.transform(title);
        self.model.predict(features.view())
    }

    /// Same as [`Classifier::predict_category`], returned as the plain label
    /// string the web layer stores.
    pub fn predict_label(&self, title: &str) -> &'static str {
        self.predict_category(title).as_str()
    }

    /// Classifies `title` and reports every class's score and probability.
    ///
    /// # Example
    /// ```rust
    /// # fn main() -> Result<(), snaptag::ClassifierError> {
    /// use snaptag::Category;
    ///
    /// let classifier = snaptag::initialize()?;
    /// let prediction = classifier.predict("Music Concert LIVE");
    /// assert_eq!(prediction.category, Category::Entertainment);
    /// for (category, p) in &prediction.probabilities {
    ///     println!("{}: {:.2}", category, p);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn predict(&self, title: &str) -> Prediction {
        let features = self.vectorizer.transform(title);
        let jll = self.model.joint_log_likelihood(features.view());
        let category = self.model.predict(features.view());
        let probabilities = Self::posterior(&jll);

        let classes = self.model.classes();
        Prediction {
            category,
            scores: classes.iter().copied().zip(jll.iter().copied()).collect(),
            probabilities: classes.iter().copied().zip(probabilities.iter().copied()).collect(),
        }
    }

    /// Posterior probability of every class for `title`
    pub fn predict_proba(&self, title: &str) -> BTreeMap<Category, f64> {
        self.predict(title).probabilities
    }

    /// Classifies each title in order
    pub fn predict_batch<S: AsRef<str>>(&self, titles: &[S]) -> Vec<Category> {
        titles.iter().map(|title| self.predict_category(title.as_ref())).collect()
    }

    /// Terms of the learned vocabulary, sorted
    pub fn vocabulary(&self) -> Vec<&str> {
        self.vectorizer.vocabulary()
    }

    fn posterior(jll: &Array1<f64>) -> Array1<f64> {
        let norm = log_sum_exp(jll);
        jll.mapv(|score| (score - norm).exp())
    }
}
