//! Sample datasets for the not-yet-live categories
//!
//! Bills, users, drivers, fleet, and reports do not have their own API
//! endpoints yet; these fixed records stand in for them. Each builder
//! returns fully normalized `SearchResult`s, so swapping a category to a
//! live endpoint only means replacing its `StaticSource` with an
//! API-backed `CategorySource`.

use serde_json::{json, Map, Value};

use crate::search::result::{Category, SearchResult};

use super::StaticSource;

fn extra(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), value.clone());
    }
    map
}

fn record(
    category: Category,
    id: &str,
    title: &str,
    subtitle: &str,
    fields: &[(&str, Value)],
) -> SearchResult {
    SearchResult::new(category, id, title, subtitle).with_extra(extra(fields))
}

pub fn bills() -> Vec<SearchResult> {
    vec![
        record(
            Category::Bills,
            "inv-1042",
            "Invoice INV-1042",
            "Acme Distribution · $2,450.00",
            &[("status", json!("Paid")), ("issued", json!("2026-08-04"))],
        ),
        record(
            Category::Bills,
            "inv-1043",
            "Invoice INV-1043",
            "Lone Star Produce · $1,180.00",
            &[("status", json!("Unpaid")), ("issued", json!("2026-08-11"))],
        ),
        record(
            Category::Bills,
            "inv-1044",
            "Invoice INV-1044",
            "Gulfport Seafood Co · $3,020.00",
            &[("status", json!("Overdue")), ("issued", json!("2026-07-28"))],
        ),
    ]
}

pub fn users() -> Vec<SearchResult> {
    vec![
        record(
            Category::Users,
            "u-301",
            "Sarah Mitchell",
            "Customer · Dallas, TX",
            &[("role", json!("customer")), ("email", json!("sarah@acmedist.com"))],
        ),
        record(
            Category::Users,
            "u-302",
            "James Okafor",
            "Dispatcher · Houston, TX",
            &[("role", json!("dispatcher")), ("email", json!("james@loadlens.io"))],
        ),
        record(
            Category::Users,
            "u-303",
            "Priya Raman",
            "Account manager · Austin, TX",
            &[("role", json!("manager")), ("email", json!("priya@loadlens.io"))],
        ),
    ]
}

pub fn drivers() -> Vec<SearchResult> {
    vec![
        record(
            Category::Drivers,
            "d-77",
            "Mike Torres",
            "CDL-A · On duty",
            &[("license", json!("TX 4478213")), ("phone", json!("(214) 555-0144"))],
        ),
        record(
            Category::Drivers,
            "d-78",
            "Elena Petrova",
            "CDL-A · Off duty",
            &[("license", json!("TX 5521907")), ("phone", json!("(713) 555-0187"))],
        ),
        record(
            Category::Drivers,
            "d-79",
            "Darnell Hayes",
            "CDL-B · On duty",
            &[("license", json!("OK 3390215")), ("phone", json!("(405) 555-0132"))],
        ),
    ]
}

pub fn fleet() -> Vec<SearchResult> {
    vec![
        record(
            Category::Fleet,
            "t-204",
            "Freightliner Cascadia #T-204",
            "Tractor · 2021",
            &[("plate", json!("TX HKD-2041")), ("status", json!("Active"))],
        ),
        record(
            Category::Fleet,
            "tr-77",
            "Great Dane reefer #TR-77",
            "Trailer · 53 ft",
            &[("plate", json!("TX RFA-0770")), ("status", json!("In shop"))],
        ),
        record(
            Category::Fleet,
            "t-209",
            "Volvo VNL #T-209",
            "Tractor · 2023",
            &[("plate", json!("TX QPM-2093")), ("status", json!("Active"))],
        ),
    ]
}

pub fn reports() -> Vec<SearchResult> {
    vec![
        record(
            Category::Reports,
            "r-week-34",
            "Weekly revenue report",
            "Aug 17 – Aug 23",
            &[("format", json!("csv"))],
        ),
        record(
            Category::Reports,
            "r-fleet-q3",
            "Fleet utilization report",
            "Q3 to date",
            &[("format", json!("pdf"))],
        ),
        record(
            Category::Reports,
            "r-lanes-aug",
            "Lane performance report",
            "Texas triangle lanes",
            &[("format", json!("csv"))],
        ),
    ]
}

/// The five static sources in category order
pub fn static_sources() -> Vec<StaticSource> {
    vec![
        StaticSource::new(Category::Bills, bills()),
        StaticSource::new(Category::Users, users()),
        StaticSource::new(Category::Drivers, drivers()),
        StaticSource::new(Category::Fleet, fleet()),
        StaticSource::new(Category::Reports, reports()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_are_well_formed() {
        let all = [bills(), users(), drivers(), fleet(), reports()];
        for records in &all {
            assert!(!records.is_empty());
            for r in records {
                assert!(!r.title.is_empty());
                assert!(!r.searchable_text.is_empty());
                assert_eq!(r.searchable_text, r.searchable_text.to_lowercase());
                assert!(r.module.is_none());
                assert!(!r.is_duplicate);
            }
        }
    }

    #[test]
    fn test_sample_ids_unique_within_category() {
        for records in [bills(), users(), drivers(), fleet(), reports()] {
            let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), records.len());
        }
    }

    #[test]
    fn test_driver_license_is_searchable() {
        let records = drivers();
        let torres = &records[0];
        assert!(torres.matches("4478213"));
    }
}
