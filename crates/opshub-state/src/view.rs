//! Derived filter/search view over a record store.
//!
//! Pure derivations with no lifecycle of their own: recompute whenever the
//! store, search text, or category selection changes. Nothing here mutates
//! anything.

use opshub_core::types::{ALL_CATEGORIES, Categorized, FilterQuery, Searchable};

/// Records matching the query, in store order.
///
/// Idempotent: filtering an already-filtered list with the same query
/// returns the same list.
pub fn filter_records<'a, R>(records: &'a [R], query: &FilterQuery) -> Vec<&'a R>
where
    R: Searchable + Categorized,
{
    records.iter().filter(|r| query.matches(*r)).collect()
}

/// Category selector options: the `all` sentinel followed by the distinct
/// category values observed in the store, in first-observed order.
pub fn category_options<R: Categorized>(records: &[R]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for record in records {
        if !options.iter().any(|o| o == record.category()) {
            options.push(record.category().to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_filtering_is_idempotent() {
        let files = seed::files();
        let query = FilterQuery::search("report");
        let once: Vec<_> = filter_records(&files, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<_> = filter_records(&once, &query)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_options_distinct_with_sentinel() {
        let files = seed::files();
        let options = category_options(&files);
        assert_eq!(
            options,
            vec!["all", "Plans & Procedures", "Maps", "Templates"]
        );
    }

    #[test]
    fn test_category_options_deduplicate() {
        let mut files = seed::files();
        files.push({
            let mut extra = files[0].clone();
            extra.id = "DOC-009".into();
            extra
        });
        let options = category_options(&files);
        assert_eq!(
            options.iter().filter(|o| *o == "Plans & Procedures").count(),
            1
        );
    }
}
