use std::sync::Arc;

use log::info;

use super::category::Category;
use super::classifier::Classifier;
use super::corpus::{Corpus, TrainingExample};
use super::error::ClassifierError;
use super::naive_bayes::MultinomialNb;
use super::tokenizer::Tokenizer;
use super::vectorizer::TfIdfVectorizer;
use crate::config::ClassifierConfig;

/// A category together with the example titles that teach it
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    /// The category these examples belong to
    pub category: Category,
    /// Example titles for the category
    pub examples: Vec<String>,
}

impl ClassDefinition {
    /// Creates a class definition with no examples yet
    ///
    /// # Example
    /// ```
    /// use snaptag::{Category, ClassDefinition};
    ///
    /// let class = ClassDefinition::new(Category::Sports)
    ///     .with_examples(vec!["football match highlights", "cricket world cup"]);
    /// assert_eq!(class.examples.len(), 2);
    /// ```
    pub fn new(category: Category) -> Self {
        Self {
            category,
            examples: Vec::new(),
        }
    }

    /// Adds examples to the class definition
    pub fn with_examples(mut self, examples: Vec<impl Into<String>>) -> Self {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }
}

/// A builder for constructing a [`Classifier`] with a fluent interface.
///
/// Training happens in [`ClassifierBuilder::build`]: the vectorizer is fitted
/// first, then the Naive Bayes model is fitted on the vectorized corpus. Both
/// see the same corpus snapshot.
#[derive(Debug, Default)]
pub struct ClassifierBuilder {
    config: ClassifierConfig,
    corpus: Corpus,
}

impl ClassifierBuilder {
    /// Creates an empty builder with the default configuration
    ///
    /// # Example
    /// ```
    /// use snaptag::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// assert!(builder.build().is_err());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the training configuration
    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends every example of `corpus` to the training data
    ///
    /// # Errors
    /// `ValidationError` if `corpus` carries a category the builder already
    /// has examples for.
    pub fn with_corpus(mut self, corpus: Corpus) -> Result<Self, ClassifierError> {
        if let Some(category) = corpus
            .categories()
            .into_iter()
            .find(|&category| self.corpus.count(category) > 0)
        {
            return Err(ClassifierError::ValidationError(format!(
                "Class '{}' has already been added",
                category
            )));
        }
        for example in corpus.examples() {
            self.corpus.push(example.clone());
        }
        Ok(self)
    }

    /// Validates class data:
    /// - Category must not already have examples
    /// - Must have at least one example
    /// - No example text can be blank
    fn validate_class_data(
        &self,
        category: Category,
        examples: &[impl AsRef<str>],
    ) -> Result<(), ClassifierError> {
        if self.corpus.count(category) > 0 {
            return Err(ClassifierError::ValidationError(format!(
                "Class '{}' has already been added",
                category
            )));
        }
        if examples.is_empty() {
            return Err(ClassifierError::ValidationError(format!(
                "Class '{}' must have at least one example",
                category
            )));
        }
        if let Some(pos) = examples.iter().position(|e| e.as_ref().trim().is_empty()) {
            return Err(ClassifierError::ValidationError(format!(
                "Example {} of class '{}' cannot be empty",
                pos + 1,
                category
            )));
        }
        Ok(())
    }

    /// Adds a class with its examples
    ///
    /// # Errors
    /// `ValidationError` if the category was already added, if no examples
    /// are given, or if an example is blank.
    ///
    /// # Example
    /// ```
    /// use snaptag::{Category, ClassDefinition, ClassifierBuilder};
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .add_class(
    ///         ClassDefinition::new(Category::Technology)
    ///             .with_examples(vec!["latest gadgets", "programming tips"])
    ///     );
    /// assert!(builder.is_ok());
    /// ```
    pub fn add_class(mut self, class: ClassDefinition) -> Result<Self, ClassifierError> {
        self.validate_class_data(class.category, &class.examples)?;
        for text in class.examples {
            self.corpus.push(TrainingExample::new(text, class.category));
        }
        Ok(self)
    }

    /// Trains and returns the final Classifier instance
    ///
    /// # Errors
    /// `BuildError` if no examples were added, if the examples contain no
    /// usable tokens, or if the configuration is invalid.
    ///
    /// # Example
    /// ```
    /// use snaptag::{Category, ClassDefinition, Classifier};
    ///
    /// # fn main() -> Result<(), snaptag::ClassifierError> {
    /// let classifier = Classifier::builder()
    ///     .add_class(
    ///         ClassDefinition::new(Category::Sports).with_examples(vec!["cricket world cup"]),
    ///     )?
    ///     .add_class(
    ///         ClassDefinition::new(Category::Entertainment).with_examples(vec!["movie trailer"]),
    ///     )?
    ///     .build()?;
    /// assert_eq!(classifier.predict_category("World Cup final"), Category::Sports);
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        if self.corpus.is_empty() {
            return Err(ClassifierError::BuildError(
                "At least one class must be added".into(),
            ));
        }

        info!(
            "Training classifier on {} examples (alpha={}, fit_prior={})",
            self.corpus.len(),
            self.config.alpha,
            self.config.fit_prior
        );
        for category in self.corpus.categories() {
            info!("  class '{}': {} examples", category, self.corpus.count(category));
        }

        let texts: Vec<&str> = self.corpus.texts().collect();
        let labels: Vec<Category> = self.corpus.labels().collect();

        let tokenizer = Tokenizer::new(self.config.min_token_chars)?;
        let vectorizer = TfIdfVectorizer::fit(tokenizer, &texts)?;
        let features = vectorizer.transform_batch(&texts);
        let model = MultinomialNb::fit(
            &features,
            &labels,
            self.config.alpha,
            self.config.fit_prior,
        )?;

        info!(
            "Classifier ready: {} classes, vocabulary of {} terms",
            model.classes().len(),
            vectorizer.vocabulary_size()
        );

        Ok(Classifier::new(
            Arc::new(vectorizer),
            Arc::new(model),
            Arc::new(self.corpus),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(category: Category, examples: Vec<&str>) -> ClassDefinition {
        ClassDefinition::new(category).with_examples(examples)
    }

    #[test]
    fn test_empty_class_handling() {
        let result = ClassifierBuilder::new().add_class(class(Category::Education, vec![""]));
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }

    #[test]
    fn test_class_validation() {
        assert!(ClassifierBuilder::new()
            .add_class(ClassDefinition::new(Category::Sports))
            .is_err());

        assert!(ClassifierBuilder::new()
            .add_class(class(Category::Sports, vec!["cricket", "   "]))
            .is_err());
    }

    #[test]
    fn test_duplicate_class() {
        let result = ClassifierBuilder::new()
            .add_class(class(Category::Sports, vec!["football match"]))
            .and_then(|b| b.add_class(class(Category::Sports, vec!["cricket"])));
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));

        let result = ClassifierBuilder::new()
            .with_corpus(Corpus::builtin())
            .and_then(|b| b.add_class(class(Category::Education, vec!["rust course"])));
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }

    #[test]
    fn test_duplicate_class_via_corpus() {
        let result = ClassifierBuilder::new()
            .add_class(class(Category::Sports, vec!["chess"]))
            .and_then(|b| b.with_corpus(Corpus::builtin()));
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));

        let result = ClassifierBuilder::new()
            .with_corpus(Corpus::builtin())
            .and_then(|b| b.with_corpus(Corpus::builtin()));
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }

    #[test]
    fn test_disjoint_corpus_and_class() {
        let corpus =
            Corpus::from_parts(vec!["movie trailer"], vec![Category::Entertainment]).unwrap();
        let classifier = ClassifierBuilder::new()
            .add_class(class(Category::Sports, vec!["chess tournament"]))
            .and_then(|b| b.with_corpus(corpus))
            .and_then(|b| b.build())
            .unwrap();
        let info = classifier.info();
        assert_eq!(info.class_labels, vec![Category::Entertainment, Category::Sports]);
        assert!(info.class_examples.values().all(|&n| n == 1));
    }

    #[test]
    fn test_build_without_classes() {
        let err = ClassifierBuilder::new().build().unwrap_err();
        assert!(matches!(err, ClassifierError::BuildError(_)));
    }

    #[test]
    fn test_build_with_untokenizable_examples() {
        let err = ClassifierBuilder::new()
            .add_class(class(Category::Sports, vec!["a", "!"]))
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ClassifierError::BuildError(_)));
    }

    #[test]
    fn test_build_with_invalid_alpha() {
        let err = ClassifierBuilder::new()
            .with_config(ClassifierConfig::default().with_alpha(-1.0))
            .with_corpus(Corpus::builtin())
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ClassifierError::BuildError(_)));
    }

    #[test]
    fn test_with_corpus_matches_add_class() {
        let from_corpus = ClassifierBuilder::new()
            .with_corpus(Corpus::builtin())
            .unwrap()
            .build()
            .unwrap();
        let mut builder = ClassifierBuilder::new();
        for category in Category::ALL {
            let examples: Vec<String> = Corpus::builtin()
                .examples()
                .iter()
                .filter(|e| e.label == category)
                .map(|e| e.text.clone())
                .collect();
            builder = builder
                .add_class(ClassDefinition::new(category).with_examples(examples))
                .unwrap();
        }
        let from_classes = builder.build().unwrap();

        assert_eq!(from_corpus.vocabulary(), from_classes.vocabulary());
        for title in ["python tutorial", "live cricket", "gadgets review", ""] {
            assert_eq!(from_corpus.predict(title), from_classes.predict(title));
        }
    }
}
