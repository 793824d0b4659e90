//! Catalog search.
//!
//! Matching is a case-insensitive substring test: results match on name,
//! description, or any tag; suggestions match on name only. A blank query
//! returns the whole catalog and no suggestions.
//!
//! Surrounding whitespace only decides whether the query is blank. It is
//! otherwise part of the needle, so `" home"` matches "for your home" but
//! not a tag that is just "home".

use shopfront_core::Product;
use tracing::instrument;

use crate::catalog::Catalog;

/// Maximum number of name suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Results for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    /// Query the results were computed for; empty when it was blank.
    pub query: String,
    pub results: Vec<&'a Product>,
    pub suggestions: Vec<&'a Product>,
}

impl SearchResults<'_> {
    /// Whether suggestions should be shown (the query is not blank).
    #[must_use]
    pub fn show_suggestions(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Search `catalog` for `query`.
#[instrument(skip(catalog))]
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> SearchResults<'a> {
    if query.trim().is_empty() {
        return SearchResults {
            query: String::new(),
            results: catalog.products().iter().collect(),
            suggestions: Vec::new(),
        };
    }

    let needle = query.to_lowercase();
    let results: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| p.matches(&needle))
        .collect();
    let suggestions = catalog
        .products()
        .iter()
        .filter(|p| p.name_matches(&needle))
        .take(MAX_SUGGESTIONS)
        .collect();

    tracing::debug!(results = results.len(), "Search complete");

    SearchResults {
        query: query.to_string(),
        results,
        suggestions,
    }
}
