use log::debug;
use ndarray::{Array1, Array2, ArrayView1, Axis};

use super::category::Category;
use super::error::ClassifierError;

/// Multinomial Naive Bayes over TF-IDF weighted token counts.
///
/// Classes are stored sorted by name; row `c` of `feature_log_prob` and
/// entry `c` of `class_log_prior` belong to `classes[c]`.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    alpha: f64,
    fit_prior: bool,
    classes: Vec<Category>,
    class_count: Array1<f64>,
    class_log_prior: Array1<f64>,
    feature_log_prob: Array2<f64>,
}

impl MultinomialNb {
    /// Fits the model on row-per-document features `x` and their `labels`.
    ///
    /// # Errors
    /// `BuildError` if `x` and `labels` disagree in length, if there is no
    /// training data, or if `alpha` is not a finite positive number.
    pub fn fit(
        x: &Array2<f64>,
        labels: &[Category],
        alpha: f64,
        fit_prior: bool,
    ) -> Result<Self, ClassifierError> {
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(ClassifierError::BuildError(format!(
                "Smoothing alpha must be finite and positive, got {}",
                alpha
            )));
        }
        if x.nrows() != labels.len() {
            return Err(ClassifierError::BuildError(format!(
                "Feature matrix has {} rows but {} labels were given",
                x.nrows(),
                labels.len()
            )));
        }
        if labels.is_empty() || x.ncols() == 0 {
            return Err(ClassifierError::BuildError("No training data".into()));
        }

        let mut classes = labels.to_vec();
        classes.sort();
        classes.dedup();

        let n_features = x.ncols();
        let mut class_count = Array1::<f64>::zeros(classes.len());
        let mut feature_count = Array2::<f64>::zeros((classes.len(), n_features));
        for (row, label) in x.axis_iter(Axis(0)).zip(labels) {
            // classes was built from labels, so the search cannot miss
            if let Ok(c) = classes.binary_search(label) {
                class_count[c] += 1.0;
                let mut counts = feature_count.row_mut(c);
                counts += &row;
            }
        }

        let mut feature_log_prob = Array2::<f64>::zeros((classes.len(), n_features));
        for (c, counts) in feature_count.axis_iter(Axis(0)).enumerate() {
            let denominator = (counts.sum() + alpha * n_features as f64).ln();
            feature_log_prob
                .row_mut(c)
                .assign(&counts.mapv(|count| (count + alpha).ln() - denominator));
        }

        let class_log_prior = if fit_prior {
            let total = class_count.sum();
            class_count.mapv(|count| (count / total).ln())
        } else {
            Array1::from_elem(classes.len(), -(classes.len() as f64).ln())
        };

        debug!(
            "Fitted multinomial Naive Bayes: {} classes, {} features, alpha={}",
            classes.len(),
            n_features,
            alpha
        );

        Ok(Self {
            alpha,
            fit_prior,
            classes,
            class_count,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Unnormalized posterior log-probability of each class for one document,
    /// in the order of [`MultinomialNb::classes`].
    pub fn joint_log_likelihood(&self, x: ArrayView1<f64>) -> Array1<f64> {
        self.feature_log_prob.dot(&x) + &self.class_log_prior
    }

    /// Highest scoring class. Exact ties go to the class that sorts first by
    /// name, which is the first one encountered since classes are sorted.
    pub fn predict(&self, x: ArrayView1<f64>) -> Category {
        let scores = self.joint_log_likelihood(x);
        let mut best = 0;
        for (c, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = c;
            }
        }
        self.classes[best]
    }

    pub fn classes(&self) -> &[Category] {
        &self.classes
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn fit_prior(&self) -> bool {
        self.fit_prior
    }

    /// Number of training documents per class
    pub fn class_count(&self) -> &Array1<f64> {
        &self.class_count
    }

    pub fn class_log_prior(&self) -> &Array1<f64> {
        &self.class_log_prior
    }

    pub fn feature_log_prob(&self) -> &Array2<f64> {
        &self.feature_log_prob
    }
}
