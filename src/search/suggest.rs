//! Suggestion lookup for short queries
//!
//! Below the two-character search threshold the UI shows canned
//! suggestions instead of firing the fetchers. Plain strings, fixed list.

/// Candidate suggestions, ordered roughly by how often users reach for them
pub const CANDIDATES: &[&str] = &[
    "Shipment LD0331",
    "Loadboard",
    "Consignment",
    "Dallas, TX",
    "Houston, TX",
    "Invoice INV-1042",
    "Pending pickup",
    "In Transit",
    "Delivered",
    "Driver license",
    "Fleet maintenance",
    "Weekly revenue report",
    "Rate confirmation",
];

/// Maximum suggestions returned per lookup
pub const MAX_SUGGESTIONS: usize = 5;

/// Case-insensitive substring filter over the candidate list
pub fn suggestions(query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    CANDIDATES
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|candidate| candidate.to_string())
        .collect()
}
