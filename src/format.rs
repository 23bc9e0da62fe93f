//! Markdown rendering of search output for the CLI

use crate::search::result::SearchResult;

/// Render a ranked result list as markdown
pub fn format_results(results: &[SearchResult], query: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Search Results · {} · '{}'\n\n", results.len(), query));

    if results.is_empty() {
        md.push_str("No matches.\n");
        return md;
    }

    for result in results {
        md.push_str(&format!("- **{}**", result.title));
        if !result.subtitle.is_empty() {
            md.push_str(&format!(" · {}", result.subtitle));
        }
        md.push('\n');

        if let Some(module) = &result.module {
            md.push_str(&format!("  module: {} ({})", module.name, module.path));
            if result.is_duplicate {
                md.push_str(&format!(
                    " · also in {} other module{}",
                    result.duplicate_group.len(),
                    if result.duplicate_group.len() == 1 { "" } else { "s" }
                ));
            }
            md.push('\n');
        }

        if let Some(status) = result.extra.get("status").and_then(|v| v.as_str()) {
            md.push_str(&format!("  status: {}\n", status));
        }
    }

    md
}

/// Render suggestions as a markdown list
pub fn format_suggestions(suggestions: &[String], query: &str) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Suggestions · '{}'\n\n", query));

    if suggestions.is_empty() {
        md.push_str("No suggestions.\n");
        return md;
    }

    for suggestion in suggestions {
        md.push_str(&format!("- {}\n", suggestion));
    }
    md
}
