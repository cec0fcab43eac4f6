use serde::{Deserialize, Serialize};

/// One row of the append-only alert log.
///
/// Field order is the CSV column order:
/// `timestamp,price,change_pct,volume,avg30_vol,price_trigger,volume_trigger,text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertLogRecord {
    /// RFC 3339 timestamp in the configured timezone.
    pub timestamp: String,
    pub price: f64,
    pub change_pct: f64,
    pub volume: f64,
    /// Empty when the provider returned no daily bars.
    pub avg30_vol: Option<f64>,
    pub price_trigger: bool,
    pub volume_trigger: bool,
    /// Alert text flattened onto one line.
    pub text: String,
}

impl AlertLogRecord {
    pub fn flatten_text(text: &str) -> String {
        text.replace('\n', " ")
    }
}
