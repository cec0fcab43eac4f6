//! Job types for the alert workflow

use crate::models::BarSeries;
use crate::signals::AlertOutcome;
use chrono::{DateTime, Utc};

/// Fetch intraday and daily bars for a symbol
#[derive(Debug, Clone)]
pub struct FetchBarsJob {
    pub symbol: String,
    pub daily_window_days: u32,
}

/// Evaluate triggers over fetched bars
#[derive(Debug, Clone)]
pub struct EvaluateAlertJob {
    pub symbol: String,
    pub intraday: BarSeries,
    pub daily: BarSeries,
    pub fetched_at: DateTime<Utc>,
}

/// Persist the evaluated alert
#[derive(Debug, Clone)]
pub struct StoreAlertJob {
    pub symbol: String,
    pub outcome: AlertOutcome,
}
