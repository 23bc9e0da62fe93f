//! Normalized search result shape
//!
//! Every category fetcher produces `SearchResult` values in this shape;
//! the expander and ranker never reach back into category-specific fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fixed record categories searched in parallel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shipments,
    Bills,
    Users,
    Drivers,
    Fleet,
    Reports,
}

impl Category {
    #[allow(dead_code)]
    pub const ALL: [Category; 6] = [
        Category::Shipments,
        Category::Bills,
        Category::Users,
        Category::Drivers,
        Category::Fleet,
        Category::Reports,
    ];

    /// Ranking tie-break priority; lower sorts first
    pub fn priority(self) -> u8 {
        match self {
            Category::Shipments => 1,
            Category::Bills => 2,
            Category::Users => 3,
            Category::Drivers => 4,
            Category::Fleet => 5,
            Category::Reports => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Shipments => "shipments",
            Category::Bills => "bills",
            Category::Users => "users",
            Category::Drivers => "drivers",
            Category::Fleet => "fleet",
            Category::Reports => "reports",
        }
    }
}

/// UI section a result routes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub path: String,
    pub icon: String,
    pub color: String,
}

/// One normalized search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique within its category before expansion; the expander re-keys
    /// duplicate variants by suffixing the module slug
    pub id: String,
    /// Stable domain ID, carried through expansion unchanged
    pub source_id: String,
    pub category: Category,
    pub title: String,
    pub subtitle: String,
    /// Lowercased, space-joined blob of every matchable field. Computed
    /// once by the fetcher and trusted downstream.
    pub searchable_text: String,
    /// Category-specific fields; opaque to the ranker
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
    /// Attached by the expander; None until then
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleInfo>,
    pub is_duplicate: bool,
    /// Ids of sibling duplicate variants sharing this result's source_id
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_group: Vec<String>,
}

impl SearchResult {
    /// Build a result with the derived fields in their pre-expansion state
    pub fn new(
        category: Category,
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let title = title.into();
        let subtitle = subtitle.into();
        let searchable_text = join_searchable(&[&title, &subtitle]);
        Self {
            source_id: id.clone(),
            id,
            category,
            title,
            subtitle,
            searchable_text,
            extra: Map::new(),
            module: None,
            is_duplicate: false,
            duplicate_group: Vec::new(),
        }
    }

    /// Attach category-specific fields, folding their string values into
    /// the searchable text
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        let joined = {
            let mut parts = vec![self.searchable_text.as_str()];
            parts.extend(extra.values().filter_map(|v| v.as_str()));
            join_searchable(&parts)
        };
        self.searchable_text = joined;
        self.extra = extra;
        self
    }

    /// Substring containment against the named fields; always inclusive of
    /// `searchable_text`. Expects a normalized (lowercased) query.
    pub fn matches(&self, query: &str) -> bool {
        self.searchable_text.contains(query)
            || self.title.to_lowercase().contains(query)
            || self.subtitle.to_lowercase().contains(query)
    }
}

/// Lowercased space-joined concatenation used for `searchable_text`
pub fn join_searchable(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
