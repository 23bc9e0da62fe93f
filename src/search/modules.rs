//! Fixed registry of UI modules results route to

use super::result::{Category, ModuleInfo};

/// Id suffix for the loadboard-side shipment variant
pub const LOADBOARD_SLUG: &str = "loadboard";
/// Id suffix for the consignment-side shipment variant
pub const CONSIGNMENT_SLUG: &str = "consignment";

fn info(name: &str, path: &str, icon: &str, color: &str) -> ModuleInfo {
    ModuleInfo {
        name: name.to_string(),
        path: path.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// The loadboard view of a shipment
pub fn loadboard() -> ModuleInfo {
    info("Loadboard", "/loadboard", "local_shipping", "#1565c0")
}

/// The consignment-tracking view of a shipment
pub fn consignment() -> ModuleInfo {
    info("Consignment", "/consignments", "inventory_2", "#2e7d32")
}

/// Single module for each non-shipment category.
///
/// Shipments deliberately have no single module; they always fan out to
/// `loadboard()` and `consignment()` in the expander, so the shipments arm
/// here answers the loadboard view.
pub fn for_category(category: Category) -> ModuleInfo {
    match category {
        Category::Shipments => loadboard(),
        Category::Bills => info("Billing", "/billing", "receipt_long", "#6a1b9a"),
        Category::Users => info("Customers", "/customers", "group", "#00838f"),
        Category::Drivers => info("Drivers", "/drivers", "badge", "#ef6c00"),
        Category::Fleet => info("Fleet", "/fleet", "commute", "#4e342e"),
        Category::Reports => info("Reports", "/reports", "insights", "#37474f"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_modules_are_distinct() {
        assert_ne!(loadboard(), consignment());
        assert_eq!(loadboard().name, "Loadboard");
        assert_eq!(consignment().name, "Consignment");
    }

    #[test]
    fn test_every_category_has_a_module() {
        for category in Category::ALL {
            let module = for_category(category);
            assert!(!module.name.is_empty());
            assert!(module.path.starts_with('/'));
        }
    }
}
