//! Per-category data sources
//!
//! Each of the six record categories sits behind [`CategorySource`], the
//! injection seam that lets tests supply fixtures without touching network
//! code. Shipments are backed by the live API; the other five are fixed
//! sample datasets standing in for their future endpoints.

pub mod samples;
pub mod shipments;

use futures::future::BoxFuture;

use crate::error::AppError;
use crate::search::result::{Category, SearchResult};

/// Result cap for the static sample-backed categories
pub const STATIC_RESULT_CAP: usize = 5;

/// One searchable record category.
///
/// `search` receives a normalized (lowercased, trimmed, length >= 1) query;
/// callers enforce that, sources do not re-check. Implementations filter by
/// substring containment and truncate to their own cap.
pub trait CategorySource: Send + Sync {
    fn category(&self) -> Category;

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<SearchResult>, AppError>>;
}

/// In-memory source over a fixed record set
pub struct StaticSource {
    category: Category,
    records: Vec<SearchResult>,
}

impl StaticSource {
    pub fn new(category: Category, records: Vec<SearchResult>) -> Self {
        Self { category, records }
    }
}

impl CategorySource for StaticSource {
    fn category(&self) -> Category {
        self.category
    }

    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<SearchResult>, AppError>> {
        let hits: Vec<SearchResult> = self
            .records
            .iter()
            .filter(|record| record.matches(query))
            .take(STATIC_RESULT_CAP)
            .cloned()
            .collect();
        Box::pin(async move { Ok(hits) })
    }
}
