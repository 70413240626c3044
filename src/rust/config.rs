use std::env;
use std::str::FromStr;

use log::warn;

/// Environment variable overriding [`ClassifierConfig::alpha`]
pub const ALPHA_ENV: &str = "SNAPTAG_ALPHA";
/// Environment variable overriding [`ClassifierConfig::fit_prior`]
pub const FIT_PRIOR_ENV: &str = "SNAPTAG_FIT_PRIOR";

/// Training settings for the vectorizer and the Naive Bayes model.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Additive (Laplace/Lidstone) smoothing applied to token counts
    pub alpha: f64,
    /// Learn class priors from the corpus; when false, priors are uniform
    pub fit_prior: bool,
    /// Shortest run of word characters kept as a token
    pub min_token_chars: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            fit_prior: true,
            min_token_chars: 2,
        }
    }
}

impl ClassifierConfig {
    /// Starts from the defaults and applies `SNAPTAG_ALPHA` and
    /// `SNAPTAG_FIT_PRIOR` when they are set. Unparseable values are logged
    /// and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(alpha) = read_env::<f64>(ALPHA_ENV) {
            config.alpha = alpha;
        }
        if let Some(fit_prior) = read_env::<bool>(FIT_PRIOR_ENV) {
            config.fit_prior = fit_prior;
        }
        config
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_fit_prior(mut self, fit_prior: bool) -> Self {
        self.fit_prior = fit_prior;
        self
    }

    pub fn with_min_token_chars(mut self, min_token_chars: usize) -> Self {
        self.min_token_chars = min_token_chars;
        self
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
