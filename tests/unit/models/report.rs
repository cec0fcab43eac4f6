//! Unit tests for upstream alert documents

use market_sentinel::models::{AlertDocument, ReportAlert};
use serde_json::json;

#[test]
fn test_missing_fields_use_defaults() {
    let alert: ReportAlert = serde_json::from_value(json!({ "headline": "Recall" })).unwrap();
    assert_eq!(alert.time_key(), "00:00");
    assert_eq!(alert.market_impact(), "$? / ?% / ?×");
    assert_eq!(alert.sources_cell(), "");
    assert!(alert.notes.is_none());
}

#[test]
fn test_market_impact_keeps_figures_as_written() {
    let alert: ReportAlert = serde_json::from_value(json!({
        "headline": "Deliveries beat",
        "market": { "price": 251.5, "pct_change": "-3.2", "volume_rel_30d": 2 }
    }))
    .unwrap();
    assert_eq!(alert.market_impact(), "$251.5 / -3.2% / 2×");
}

#[test]
fn test_sources_cell_takes_first_four() {
    let alert: ReportAlert = serde_json::from_value(json!({
        "sources": ["a", "b", "c", "d", "e"]
    }))
    .unwrap();
    assert_eq!(alert.sources_cell(), "a, b, c, d");
}

#[test]
fn test_document_without_alerts_is_empty() {
    let doc: AlertDocument = serde_json::from_str("{}").unwrap();
    assert!(doc.alerts.is_empty());
}
