use regex::Regex;

use super::error::ClassifierError;

/// Splits titles into lowercase word tokens.
///
/// A token is a maximal run of word characters (Unicode letters, digits or
/// underscore) that is at least `min_token_chars` characters long. Shorter
/// runs (single letters, lone digits) are dropped, and everything else acts
/// as a separator.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_token_chars: usize,
    pattern: Regex,
}

impl Tokenizer {
    /// Compiles the token pattern for `min_token_chars` (at least 1).
    ///
    /// # Errors
    /// `BuildError` if the pattern cannot be compiled, which only happens for
    /// lengths large enough to exceed the regex size limit.
    pub fn new(min_token_chars: usize) -> Result<Self, ClassifierError> {
        let min_token_chars = min_token_chars.max(1);
        let pattern = Regex::new(&format!(r"\b\w{{{},}}\b", min_token_chars)).map_err(|e| {
            ClassifierError::BuildError(format!("Failed to compile token pattern: {}", e))
        })?;
        Ok(Self {
            min_token_chars,
            pattern,
        })
    }

    pub fn min_token_chars(&self) -> usize {
        self.min_token_chars
    }

    /// Lowercases `text` and returns its tokens in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_owned())
            .collect()
    }

    /// Counts the tokens in `text` without keeping them.
    pub fn count_tokens(&self, text: &str) -> usize {
        self.pattern.find_iter(&text.to_lowercase()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Tokenizer {
        Tokenizer::new(2).unwrap()
    }

    #[test]
    fn test_lowercases_and_splits() {
        let tokenizer = standard();
        assert_eq!(tokenizer.tokenize("Python Tutorial"), vec!["python", "tutorial"]);
        assert_eq!(
            tokenizer.tokenize("  live!!music--concert "),
            vec!["live", "music", "concert"]
        );
    }

    #[test]
    fn test_drops_single_characters() {
        let tokenizer = standard();
        assert_eq!(tokenizer.tokenize("a b c movie"), vec!["movie"]);
        assert_eq!(tokenizer.count_tokens("x"), 0);
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_keeps_digits_and_underscores() {
        let tokenizer = standard();
        assert_eq!(
            tokenizer.tokenize("top_10 gadgets 2024"),
            vec!["top_10", "gadgets", "2024"]
        );
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = standard();
        assert_eq!(tokenizer.tokenize("ÜBER Café 🎬 night"), vec!["über", "café", "night"]);
        assert_eq!(tokenizer.count_tokens("Funny, COMEDY; video."), 3);
    }

    #[test]
    fn test_custom_min_length() {
        let tokenizer = Tokenizer::new(1).unwrap();
        assert_eq!(tokenizer.tokenize("a cup"), vec!["a", "cup"]);
        assert_eq!(Tokenizer::new(0).unwrap().min_token_chars(), 1);

        let long_only = Tokenizer::new(4).unwrap();
        assert_eq!(long_only.tokenize("cup world live"), vec!["world", "live"]);
    }
}
