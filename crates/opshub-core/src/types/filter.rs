//! Filter and search query types for derived record views.

use serde::{Deserialize, Serialize};

/// Reserved category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// A record that can be matched by free-text search.
pub trait Searchable {
    /// The primary display name (file name or event title).
    fn display_name(&self) -> &str;

    /// Secondary labels searched alongside the name (tags or teams).
    fn labels(&self) -> &[String];
}

/// A record that belongs to a filterable category.
pub trait Categorized {
    /// The category value the selector filters on.
    fn category(&self) -> &str;
}

/// The current filter/search inputs for one view.
///
/// Matching is purely derived state: applying the same query twice yields
/// the same subset, and no query ever mutates the underlying store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Free-text search term; empty means no search restriction.
    pub search: String,
    /// Selected category, or the [`ALL_CATEGORIES`] sentinel.
    pub category: String,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterQuery {
    /// Create a query from search text and a category selector value.
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// Shorthand for a search-only query with no category restriction.
    pub fn search(term: impl Into<String>) -> Self {
        Self::new(term, ALL_CATEGORIES)
    }

    /// Shorthand for a category-only query with no search text.
    pub fn category(category: impl Into<String>) -> Self {
        Self::new("", category)
    }

    /// Check whether this query restricts nothing.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.category == ALL_CATEGORIES
    }

    /// Check whether `record` passes this query.
    ///
    /// A record matches when its category equals the selector (or the
    /// selector is the `all` sentinel) and the search term is empty or is a
    /// case-insensitive substring of the display name or any label.
    pub fn matches<R: Searchable + Categorized>(&self, record: &R) -> bool {
        let matches_category =
            self.category == ALL_CATEGORIES || record.category() == self.category;
        if !matches_category {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.display_name().to_lowercase().contains(&needle)
            || record
                .labels()
                .iter()
                .any(|label| label.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: String,
        labels: Vec<String>,
        category: String,
    }

    impl Searchable for Sample {
        fn display_name(&self) -> &str {
            &self.name
        }

        fn labels(&self) -> &[String] {
            &self.labels
        }
    }

    impl Categorized for Sample {
        fn category(&self) -> &str {
            &self.category
        }
    }

    fn sample() -> Sample {
        Sample {
            name: "Evacuation Routes Map.jpg".to_string(),
            labels: vec!["evacuation".to_string(), "routes".to_string()],
            category: "Maps".to_string(),
        }
    }

    #[test]
    fn test_default_is_unfiltered() {
        let query = FilterQuery::default();
        assert!(query.is_unfiltered());
        assert!(query.matches(&sample()));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert!(FilterQuery::search("EVAC").matches(&sample()));
        assert!(FilterQuery::search("routes map").matches(&sample()));
        assert!(!FilterQuery::search("shelter").matches(&sample()));
    }

    #[test]
    fn test_search_matches_labels() {
        // "routes" appears in both the name and a label; "evacuation" only
        // partially in the name but exactly in a label.
        assert!(FilterQuery::search("evacuation").matches(&sample()));
    }

    #[test]
    fn test_category_must_match_exactly() {
        assert!(FilterQuery::category("Maps").matches(&sample()));
        assert!(!FilterQuery::category("maps").matches(&sample()));
        assert!(!FilterQuery::category("Templates").matches(&sample()));
    }

    #[test]
    fn test_both_conditions_required() {
        let query = FilterQuery::new("evac", "Templates");
        assert!(!query.matches(&sample()));
    }
}
