//! End-to-end pipeline scenarios over fixture sources
//!
//! These exercise the full orchestrator path (fan-out, merge, duplicate
//! expansion, ranking) with all six categories wired to in-memory fixtures.

#[cfg(test)]
mod tests {
    use futures::future::BoxFuture;
    use serde_json::json;

    use crate::error::AppError;
    use crate::search::result::{Category, SearchResult};
    use crate::search::{SearchService, SearchOutcome};
    use crate::sources::{samples, CategorySource, StaticSource};

    struct FailingShipments;

    impl CategorySource for FailingShipments {
        fn category(&self) -> Category {
            Category::Shipments
        }

        fn search<'a>(
            &'a self,
            _query: &'a str,
        ) -> BoxFuture<'a, Result<Vec<SearchResult>, AppError>> {
            Box::pin(async move { Err(AppError::FetchFailed("dns failure".to_string())) })
        }
    }

    fn shipment_fixtures() -> Vec<SearchResult> {
        let mut in_transit = serde_json::Map::new();
        in_transit.insert("status".to_string(), json!("In Transit"));

        vec![
            SearchResult::new(
                Category::Shipments,
                "ld0331",
                "Shipment LD0331",
                "Houston, TX → Dallas, TX",
            )
            .with_extra(in_transit),
            SearchResult::new(
                Category::Shipments,
                "ld0412",
                "Shipment LD0412",
                "Austin, TX → Memphis, TN",
            ),
        ]
    }

    /// Full six-category service over frozen fixtures
    fn fixture_service() -> SearchService {
        SearchService::with_samples(Box::new(StaticSource::new(
            Category::Shipments,
            shipment_fixtures(),
        )))
    }

    #[tokio::test]
    async fn test_ld0331_scenario_duplicate_pair_first() {
        let service = fixture_service();
        let results = service.universal_search("ld0331").await;

        assert!(results.len() >= 2);
        let pair = &results[..2];
        assert!(pair.iter().all(|r| r.is_duplicate));
        assert!(pair.iter().all(|r| r.title == "Shipment LD0331"));
        assert!(pair.iter().all(|r| r.source_id == "ld0331"));

        let module_names: Vec<&str> = pair
            .iter()
            .map(|r| r.module.as_ref().unwrap().name.as_str())
            .collect();
        assert_eq!(module_names, vec!["Loadboard", "Consignment"]);
    }

    #[tokio::test]
    async fn test_dallas_scenario_fleet_contributes_nothing() {
        let service = fixture_service();
        let results = service.universal_search("dallas").await;

        // The shipment subtitle matches, so its duplicate pair is present
        let shipment_hits: Vec<&SearchResult> = results
            .iter()
            .filter(|r| r.category == Category::Shipments)
            .collect();
        assert_eq!(shipment_hits.len(), 2);
        assert!(shipment_hits.iter().all(|r| r.is_duplicate));
        assert!(shipment_hits
            .iter()
            .all(|r| r.title == "Shipment LD0331"));

        // No fleet vehicle mentions Dallas
        assert!(results.iter().all(|r| r.category != Category::Fleet));
    }

    #[tokio::test]
    async fn test_duplicate_pairs_share_title_and_fixed_module_names() {
        let service = fixture_service();
        let results = service.universal_search("shipment").await;

        let duplicates: Vec<&SearchResult> =
            results.iter().filter(|r| r.is_duplicate).collect();
        assert!(!duplicates.is_empty());
        assert_eq!(duplicates.len() % 2, 0);

        for dup in &duplicates {
            let module = dup.module.as_ref().expect("duplicate has a module");
            assert!(module.name == "Loadboard" || module.name == "Consignment");
            let siblings: Vec<&&SearchResult> = duplicates
                .iter()
                .filter(|other| other.source_id == dup.source_id && other.id != dup.id)
                .collect();
            assert_eq!(siblings.len(), 1);
            assert_eq!(siblings[0].title, dup.title);
            assert_eq!(dup.duplicate_group, vec![siblings[0].id.clone()]);
        }

        // Only shipments carry the duplicate flag
        assert!(results
            .iter()
            .filter(|r| r.category != Category::Shipments)
            .all(|r| !r.is_duplicate));
    }

    #[tokio::test]
    async fn test_shipments_fetcher_failure_leaves_other_categories_intact() {
        let degraded_service = SearchService::with_samples(Box::new(FailingShipments));
        let healthy_service = fixture_service();

        let SearchOutcome { results, degraded } =
            degraded_service.universal_search_detailed("dallas").await;
        assert_eq!(degraded, vec![Category::Shipments]);

        let healthy = healthy_service.universal_search("dallas").await;
        let non_shipment_titles: Vec<&str> = healthy
            .iter()
            .filter(|r| r.category != Category::Shipments)
            .map(|r| r.title.as_str())
            .collect();

        let degraded_titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        for title in non_shipment_titles {
            assert!(degraded_titles.contains(&title));
        }
    }

    #[tokio::test]
    async fn test_title_match_sorts_above_subtitle_match_across_categories() {
        let service = fixture_service();
        // "invoice" matches bill titles; no shipment title matches it
        let results = service.universal_search("invoice").await;
        assert!(!results.is_empty());
        assert_eq!(results[0].category, Category::Bills);
        assert!(results[0].title.to_lowercase().contains("invoice"));
    }

    #[tokio::test]
    async fn test_sample_categories_reachable_end_to_end() {
        let service = fixture_service();

        for (query, category) in [
            ("inv-1042", Category::Bills),
            ("sarah", Category::Users),
            ("torres", Category::Drivers),
            ("cascadia", Category::Fleet),
            ("utilization", Category::Reports),
        ] {
            let results = service.universal_search(query).await;
            assert!(
                results.iter().any(|r| r.category == category),
                "query '{}' should reach the {} category",
                query,
                category.as_str()
            );
        }
    }

    #[tokio::test]
    async fn test_results_are_fresh_per_invocation() {
        let service = fixture_service();
        let first = service.universal_search("shipment").await;
        let second = service.universal_search("shipment").await;

        assert_eq!(first, second);
        // No module or group state leaks between calls
        assert!(second.iter().all(|r| r.module.is_some()));
    }

    #[test]
    fn test_sample_datasets_match_the_wired_categories() {
        let sources = samples::static_sources();
        let categories: Vec<Category> = sources.iter().map(|s| s.category()).collect();
        assert_eq!(
            categories,
            vec![
                Category::Bills,
                Category::Users,
                Category::Drivers,
                Category::Fleet,
                Category::Reports
            ]
        );
    }
}
