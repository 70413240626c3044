use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ClassifierError;

/// The closed set of labels a video title can be tagged with.
///
/// Variants are declared in lexicographic order of their names, so the
/// derived `Ord` matches the order used to break exact score ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Education,
    Entertainment,
    Sports,
    Technology,
}

impl Category {
    /// Every category, in tie-break order.
    pub const ALL: [Category; 4] = [
        Category::Education,
        Category::Entertainment,
        Category::Sports,
        Category::Technology,
    ];

    /// Returns the canonical label used at the web-layer boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
            Category::Technology => "Technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ClassifierError;

    /// Parses a category name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ClassifierError::ValidationError(format!("Unknown category: '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_by_name() {
        let names: Vec<_> = Category::ALL.iter().map(Category::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(Category::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("sports".parse::<Category>().unwrap(), Category::Sports);
        assert_eq!(" TECHNOLOGY ".parse::<Category>().unwrap(), Category::Technology);
        let round_trip = Category::Entertainment.to_string();
        assert_eq!(round_trip.parse::<Category>().unwrap(), Category::Entertainment);
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "Cooking".parse::<Category>().unwrap_err();
        assert!(matches!(err, ClassifierError::ValidationError(_)));
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Category::Education).unwrap(), "\"Education\"");
    }
}
