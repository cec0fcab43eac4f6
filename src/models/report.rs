//! Alert feed documents produced by the upstream alerting systems.
//!
//! The schema is owned upstream; every field is optional here and the defaults
//! below decide how gaps render.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Time key used for entries without a time of day.
pub const FALLBACK_TIME: &str = "00:00";

/// Placeholder for a missing market figure.
pub const MISSING_FIGURE: &str = "?";

/// One system's alerts for one day (`data/<date>/<system>.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertDocument {
    #[serde(default)]
    pub alerts: Vec<ReportAlert>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportAlert {
    /// Time of day as written upstream, e.g. "09:41".
    #[serde(default)]
    pub time_pt: Option<String>,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub verification: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub market: Option<MarketSnapshot>,
    #[serde(default)]
    pub update_new: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Market context attached to an upstream alert.
///
/// Figures stay raw JSON scalars so they render exactly as the upstream wrote them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub pct_change: Option<Value>,
    /// Volume relative to the 30-day baseline, pre-computed upstream.
    #[serde(default)]
    pub volume_rel_30d: Option<Value>,
}

impl ReportAlert {
    pub fn time_key(&self) -> &str {
        self.time_pt.as_deref().unwrap_or(FALLBACK_TIME)
    }

    /// `$price / pct% / volume×`, with `?` for missing figures.
    pub fn market_impact(&self) -> String {
        let snapshot = self.market.clone().unwrap_or_default();
        format!(
            "${} / {}% / {}×",
            figure(snapshot.price.as_ref()),
            figure(snapshot.pct_change.as_ref()),
            figure(snapshot.volume_rel_30d.as_ref()),
        )
    }

    /// First four sources, comma separated.
    pub fn sources_cell(&self) -> String {
        self.sources
            .iter()
            .take(4)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn figure(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_FIGURE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// An upstream alert tagged with the system that reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedAlert {
    pub system: String,
    pub alert: ReportAlert,
}
