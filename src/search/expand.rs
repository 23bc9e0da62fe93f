//! Cross-module duplicate expansion
//!
//! A shipment is reachable from both the Loadboard and the Consignment
//! sections of the UI, so each shipment result fans out into exactly two
//! module-tagged variants. Everything else passes through with its single
//! category module attached.

use super::modules;
use super::result::{Category, SearchResult};

/// Expand shipment results into their two module variants and attach a
/// module to every other result.
///
/// Expansion keys only on the category; a shipment with an empty title
/// still expands.
pub fn expand_duplicates(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut out = Vec::with_capacity(results.len() * 2);

    for result in results {
        if result.category == Category::Shipments {
            let variants = [
                (modules::loadboard(), modules::LOADBOARD_SLUG),
                (modules::consignment(), modules::CONSIGNMENT_SLUG),
            ];
            for (module, slug) in variants {
                let mut variant = result.clone();
                variant.id = format!("{}_{}", result.id, slug);
                variant.module = Some(module);
                variant.is_duplicate = true;
                variant.duplicate_group = Vec::new();
                out.push(variant);
            }
        } else {
            let mut single = result;
            single.module = Some(modules::for_category(single.category));
            single.is_duplicate = false;
            single.duplicate_group = Vec::new();
            out.push(single);
        }
    }

    attach_duplicate_groups(&mut out);
    out
}

/// Second pass: for each expanded shipment variant, record the ids of the
/// other variants sharing its source_id. Quadratic over the shipment
/// subset, which is capped well below the point where that matters.
fn attach_duplicate_groups(results: &mut [SearchResult]) {
    let duplicates: Vec<(String, String)> = results
        .iter()
        .filter(|r| r.is_duplicate)
        .map(|r| (r.id.clone(), r.source_id.clone()))
        .collect();

    for result in results.iter_mut().filter(|r| r.is_duplicate) {
        result.duplicate_group = duplicates
            .iter()
            .filter(|(id, source_id)| *source_id == result.source_id && *id != result.id)
            .map(|(id, _)| id.clone())
            .collect();
    }
}
