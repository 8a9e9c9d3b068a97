//! Output formatting utilities

use crate::application::EnrichReport;

/// Format an enrichment report for display
pub fn format_enrich_report(report: &EnrichReport) -> String {
    if report.dry_run {
        format!(
            "Would enrich {} products with {} new tags (dry run, nothing written)",
            report.processed, report.added_tags
        )
    } else {
        format!(
            "Enriched {} products with {} new tags -> {}",
            report.processed,
            report.added_tags,
            report.output.display()
        )
    }
}

/// Format a list of generated tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags generated".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}
