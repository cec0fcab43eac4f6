//! Markdown rendering. Output depends only on its inputs.

use crate::models::TaggedAlert;
use crate::report::analysis::HeadlineAnalysis;

pub const NO_DATA_PLACEHOLDER: &str = "_No data ingested yet._";

const COLUMNS: [&str; 8] = [
    "Time (PT)",
    "Headline",
    "Verification",
    "Sources",
    "Market Impact",
    "Update/New",
    "Notes",
    "System",
];

pub fn render_table(entries: &[TaggedAlert]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!("| {} |", COLUMNS.join(" | ")));
    lines.push(format!("|{}|", vec!["---"; COLUMNS.len()].join("|")));

    for entry in entries {
        let alert = &entry.alert;
        let cells = [
            alert.time_pt.clone().unwrap_or_default(),
            alert.headline.clone(),
            alert.verification.clone().unwrap_or_default(),
            alert.sources_cell(),
            alert.market_impact(),
            alert.update_new.clone().unwrap_or_default(),
            alert.notes.clone().unwrap_or_default(),
            entry.system.clone(),
        ];
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.join("\n")
}

pub fn render_analysis(analysis: &HeadlineAnalysis, first: &str, second: &str) -> String {
    format!(
        "## Quick Analysis\n\
         - Overlap (same headlines): **{}**\n\
         - Unique to {}: **{}**\n\
         - Unique to {}: **{}**\n",
        analysis.overlap, first, analysis.unique_to_first, second, analysis.unique_to_second
    )
}

/// Full report: title, date, then the table and analysis, or the placeholder.
pub fn render_report(
    title: &str,
    date: &str,
    entries: &[TaggedAlert],
    first: &str,
    second: &str,
) -> String {
    let mut report = format!("# {}\n**Date:** {}\n\n", title, date);

    if entries.is_empty() {
        report.push_str(NO_DATA_PLACEHOLDER);
        report.push('\n');
        return report;
    }

    report.push_str(&render_table(entries));
    report.push_str("\n\n");
    let analysis = HeadlineAnalysis::compute(entries, first, second);
    report.push_str(&render_analysis(&analysis, first, second));
    report
}
