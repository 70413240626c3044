use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use ndarray::{Array1, Array2};

use super::error::ClassifierError;
use super::tokenizer::Tokenizer;
use super::utils::normalize_vector;

/// TF-IDF vector space learned from a training corpus.
///
/// Every distinct token of the corpus becomes one dimension. Indices are
/// assigned in sorted token order, so two vectorizers fitted on the same
/// texts always agree on the layout. Weights use smoothed IDF,
/// `ln((1 + n) / (1 + df)) + 1`, and every document vector is L2-normalized.
///
/// The vectorizer is read-only once fitted: `transform` only projects new
/// text into the learned space and never touches the vocabulary or IDF.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
    vocabulary: BTreeMap<String, usize>,
    idf: Array1<f64>,
}

impl TfIdfVectorizer {
    /// Learns the vocabulary and IDF weights from `documents`.
    ///
    /// # Errors
    /// `BuildError` if there are no documents or no document yields a token.
    pub fn fit<S: AsRef<str>>(
        tokenizer: Tokenizer,
        documents: &[S],
    ) -> Result<Self, ClassifierError> {
        if documents.is_empty() {
            return Err(ClassifierError::BuildError(
                "Cannot fit vectorizer on an empty corpus".into(),
            ));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: BTreeSet<String> = tokenizer.tokenize(doc.as_ref()).into_iter().collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(ClassifierError::BuildError(
                "Corpus produced an empty vocabulary".into(),
            ));
        }

        let n_documents = documents.len();
        let n = n_documents as f64;
        let idf = document_frequency
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect::<Array1<f64>>();
        let vocabulary = document_frequency
            .into_keys()
            .enumerate()
            .map(|(idx, token)| (token, idx))
            .collect::<BTreeMap<_, _>>();

        debug!(
            "Fitted TF-IDF vectorizer: {} documents, {} terms",
            n_documents,
            vocabulary.len()
        );

        Ok(Self {
            tokenizer,
            vocabulary,
            idf,
        })
    }

    /// Projects `text` into the learned space. Unknown tokens are ignored;
    /// text with no known tokens maps to the zero vector.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut counts = Array1::<f64>::zeros(self.vocabulary.len());
        for token in self.tokenizer.tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                counts[idx] += 1.0;
            }
        }
        let weighted = counts * &self.idf;
        normalize_vector(&weighted)
    }

    /// Transforms every document into one row of the returned matrix.
    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.vocabulary.len()));
        for (mut row, doc) in matrix.rows_mut().into_iter().zip(documents) {
            row.assign(&self.transform(doc.as_ref()));
        }
        matrix
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vocabulary terms in index order
    pub fn vocabulary(&self) -> Vec<&str> {
        self.vocabulary.keys().map(String::as_str).collect()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self) -> &Array1<f64> {
        &self.idf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(2).unwrap()
    }

    fn fitted(docs: &[&str]) -> TfIdfVectorizer {
        TfIdfVectorizer::fit(tokenizer(), docs).unwrap()
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let vectorizer = fitted(&["movie trailer", "funny movie"]);
        assert_eq!(vectorizer.vocabulary(), vec!["funny", "movie", "trailer"]);
        assert_eq!(vectorizer.index_of("movie"), Some(1));
        assert_eq!(vectorizer.index_of("concert"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        let vectorizer = fitted(&["movie trailer", "funny movie"]);
        let movie = vectorizer.index_of("movie").unwrap();
        let funny = vectorizer.index_of("funny").unwrap();
        // present in both documents: ln(3/3) + 1
        assert!((vectorizer.idf()[movie] - 1.0).abs() < 1e-12);
        // present in one document: ln(3/2) + 1
        assert!((vectorizer.idf()[funny] - (1.5f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = fitted(&["movie trailer", "funny movie"]);
        let vector = vectorizer.transform("Funny Movie Trailer");
        let norm: f64 = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_tokens_give_zero_vector() {
        let vectorizer = fitted(&["movie trailer"]);
        assert!(vectorizer.transform("xyzzy qwerty").iter().all(|&x| x == 0.0));
        assert!(vectorizer.transform("").iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_transform_does_not_refit() {
        let vectorizer = fitted(&["movie trailer", "funny movie"]);
        let before = vectorizer.idf().clone();
        let _ = vectorizer.transform("trailer trailer trailer");
        assert_eq!(vectorizer.idf(), &before);
        assert_eq!(vectorizer.vocabulary_size(), 3);
    }

    #[test]
    fn test_transform_batch_rows() {
        let docs = ["movie trailer", "funny movie"];
        let vectorizer = fitted(&docs);
        let matrix = vectorizer.transform_batch(&docs);
        assert_eq!(matrix.dim(), (2, 3));
        assert_eq!(matrix.row(1), vectorizer.transform("funny movie"));
    }

    #[test]
    fn test_fit_rejects_empty_input() {
        let empty: [&str; 0] = [];
        assert!(TfIdfVectorizer::fit(tokenizer(), &empty).is_err());
        assert!(TfIdfVectorizer::fit(tokenizer(), &["a", "?"]).is_err());
    }
}
