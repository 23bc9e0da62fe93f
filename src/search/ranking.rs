//! Relevance ranking
//!
//! Orders a merged, expanded result list by tiered match strength: a title
//! hit beats a subtitle hit beats a searchable-text hit, and category
//! priority breaks the remaining ties. The sort is stable, so equal-ranked
//! results keep their merge order.

use std::cmp::Reverse;

use super::result::SearchResult;

/// Where the query matched within a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTiers {
    pub title: bool,
    pub subtitle: bool,
    pub searchable_text: bool,
}

/// Compute the match tiers for one result. Expects a normalized query.
pub fn match_tiers(result: &SearchResult, query: &str) -> MatchTiers {
    MatchTiers {
        title: result.title.to_lowercase().contains(query),
        subtitle: result.subtitle.to_lowercase().contains(query),
        searchable_text: result.searchable_text.contains(query),
    }
}

/// Sort results in place by descending relevance
pub fn rank(results: &mut [SearchResult], query: &str) {
    results.sort_by_key(|result| {
        let tiers = match_tiers(result, query);
        (
            Reverse(tiers.title as u8),
            Reverse(tiers.subtitle as u8),
            Reverse(tiers.searchable_text as u8),
            result.category.priority(),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::result::Category;

    fn result(category: Category, title: &str, subtitle: &str) -> SearchResult {
        SearchResult::new(category, title.to_lowercase(), title, subtitle)
    }

    #[test]
    fn test_title_match_outranks_subtitle_match() {
        let mut results = vec![
            result(Category::Reports, "Weekly report", "Dallas lanes"),
            result(Category::Reports, "Dallas summary", "Weekly"),
        ];
        rank(&mut results, "dallas");
        assert_eq!(results[0].title, "Dallas summary");
    }

    #[test]
    fn test_subtitle_match_outranks_searchable_only_match() {
        let mut with_extra = result(Category::Users, "James Okafor", "Dispatcher");
        let mut extra = serde_json::Map::new();
        extra.insert("city".to_string(), serde_json::json!("Dallas"));
        with_extra = with_extra.with_extra(extra);

        let subtitle_hit = result(Category::Users, "Sarah Mitchell", "Customer · Dallas, TX");

        let mut results = vec![with_extra, subtitle_hit];
        rank(&mut results, "dallas");
        assert_eq!(results[0].title, "Sarah Mitchell");
    }

    #[test]
    fn test_category_priority_breaks_full_ties() {
        let mut results = vec![
            result(Category::Fleet, "Dallas unit", "Yard"),
            result(Category::Shipments, "Dallas load", "Yard"),
        ];
        rank(&mut results, "dallas");
        assert_eq!(results[0].category, Category::Shipments);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut results = vec![
            result(Category::Users, "Dallas first", "x"),
            result(Category::Users, "Dallas second", "x"),
        ];
        rank(&mut results, "dallas");
        assert_eq!(results[0].title, "Dallas first");
        assert_eq!(results[1].title, "Dallas second");
    }

    #[test]
    fn test_no_match_sorts_last() {
        let mut results = vec![
            result(Category::Shipments, "Shipment LD0900", "Austin, TX → Miami, FL"),
            result(Category::Reports, "Dallas revenue", "Weekly"),
        ];
        rank(&mut results, "dallas");
        assert_eq!(results[0].title, "Dallas revenue");
    }
}
