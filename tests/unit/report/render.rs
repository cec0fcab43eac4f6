//! Unit tests for markdown rendering

use crate::report_merge::alert;
use market_sentinel::models::{MarketSnapshot, TaggedAlert};
use market_sentinel::report::{render_report, NO_DATA_PLACEHOLDER};
use serde_json::json;

const TITLE: &str = "Tesla Market Sentinel – Daily Comparison";

#[test]
fn test_empty_report_has_placeholder_only() {
    let report = render_report(TITLE, "2025-07-23", &[], "ChatGPT", "Grok");
    assert_eq!(
        report,
        "# Tesla Market Sentinel – Daily Comparison\n**Date:** 2025-07-23\n\n_No data ingested yet._\n"
    );
    assert!(report.contains(NO_DATA_PLACEHOLDER));
    assert!(!report.contains('|'));
}

#[test]
fn test_report_table_and_analysis() {
    let mut first = alert(Some("09:41"), "Robotaxi expansion");
    first.verification = Some("Confirmed".to_string());
    first.sources = vec!["Reuters".to_string(), "Bloomberg".to_string()];
    first.market = Some(MarketSnapshot {
        price: Some(json!(251.3)),
        pct_change: Some(json!(4.1)),
        volume_rel_30d: Some(json!(1.8)),
    });
    first.update_new = Some("New".to_string());
    first.notes = Some("Austin only".to_string());

    let entries = vec![
        TaggedAlert {
            system: "ChatGPT".to_string(),
            alert: first,
        },
        TaggedAlert {
            system: "Grok".to_string(),
            alert: alert(Some("10:02"), "Robotaxi expansion"),
        },
    ];

    let report = render_report(TITLE, "2025-07-23", &entries, "ChatGPT", "Grok");
    let expected = "\
# Tesla Market Sentinel – Daily Comparison
**Date:** 2025-07-23

| Time (PT) | Headline | Verification | Sources | Market Impact | Update/New | Notes | System |
|---|---|---|---|---|---|---|---|
| 09:41 | Robotaxi expansion | Confirmed | Reuters, Bloomberg | $251.3 / 4.1% / 1.8× | New | Austin only | ChatGPT |
| 10:02 | Robotaxi expansion |  |  | $? / ?% / ?× |  |  | Grok |

## Quick Analysis
- Overlap (same headlines): **1**
- Unique to ChatGPT: **0**
- Unique to Grok: **0**
";
    assert_eq!(report, expected);
}
