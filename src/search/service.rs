//! Search orchestration
//!
//! Fans the normalized query out across every category source at once,
//! tolerates per-source failures, then expands duplicates and ranks the
//! merged list. One invocation allocates everything it needs; nothing is
//! cached across calls.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::normalize_query;
use crate::sources::{samples, CategorySource};

use super::expand::expand_duplicates;
use super::ranking::rank;
use super::result::{Category, SearchResult};
use super::suggest;

/// Minimum trimmed query length that triggers a full search
pub const MIN_SEARCH_LEN: usize = 2;

/// A search response plus which categories failed along the way
#[derive(Debug)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    /// Categories whose source errored and contributed nothing
    pub degraded: Vec<Category>,
}

/// Orchestrates the per-category sources
pub struct SearchService {
    sources: Vec<Box<dyn CategorySource>>,
}

impl SearchService {
    pub fn new(sources: Vec<Box<dyn CategorySource>>) -> Self {
        Self { sources }
    }

    /// The production wiring: the given shipments source plus the five
    /// sample-backed categories
    pub fn with_samples(shipments: Box<dyn CategorySource>) -> Self {
        let mut sources: Vec<Box<dyn CategorySource>> = vec![shipments];
        for source in samples::static_sources() {
            sources.push(Box::new(source));
        }
        Self::new(sources)
    }

    /// Run a universal search and return the ranked result list.
    ///
    /// Queries shorter than two characters return empty without touching
    /// any source.
    pub async fn universal_search(&self, raw_query: &str) -> Vec<SearchResult> {
        self.universal_search_detailed(raw_query).await.results
    }

    /// As [`universal_search`](Self::universal_search), additionally
    /// reporting which categories degraded to empty on error
    pub async fn universal_search_detailed(&self, raw_query: &str) -> SearchOutcome {
        let query = normalize_query(raw_query);
        if query.chars().count() < MIN_SEARCH_LEN {
            return SearchOutcome {
                results: Vec::new(),
                degraded: Vec::new(),
            };
        }

        debug!("Universal search for '{}'", query);

        let query_ref = &query;
        let fetches = self.sources.iter().map(|source| async move {
            (source.category(), source.search(query_ref).await)
        });
        let settled = join_all(fetches).await;

        let mut merged = Vec::new();
        let mut degraded = Vec::new();
        for (category, outcome) in settled {
            match outcome {
                Ok(hits) => merged.extend(hits),
                Err(e) => {
                    warn!("{} source failed, degrading to empty: {}", category.as_str(), e);
                    degraded.push(category);
                }
            }
        }

        let mut results = expand_duplicates(merged);
        rank(&mut results, &query);

        debug!(
            "Universal search returned {} results ({} degraded categories)",
            results.len(),
            degraded.len()
        );

        SearchOutcome { results, degraded }
    }

    /// Suggestion lookup for short queries; never calls the sources
    pub fn suggestions(&self, raw_query: &str) -> Vec<String> {
        suggest::suggestions(raw_query)
    }
}
