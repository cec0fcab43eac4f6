//! Session aggregates derived from the bar series.

use crate::models::Bar;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionMetrics {
    /// Last close of the session.
    pub price: f64,
    /// First open of the session.
    pub day_open: f64,
    pub change_pct: f64,
    pub day_low: f64,
    pub day_high: f64,
    pub intraday_volume: f64,
    /// Mean daily volume over the trailing window; `None` without daily bars.
    pub avg_daily_volume: Option<f64>,
}

impl SessionMetrics {
    /// Returns `None` when there are no intraday bars.
    pub fn from_bars(intraday: &[Bar], daily: &[Bar]) -> Option<Self> {
        let first = intraday.first()?;
        let last = intraday.last()?;

        let day_low = intraday.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let day_high = intraday
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            price: last.close,
            day_open: first.open,
            change_pct: change_pct(first.open, last.close),
            day_low,
            day_high,
            intraday_volume: total_volume(intraday),
            avg_daily_volume: average_volume(daily),
        })
    }
}

/// Percent change from `open` to `close`.
pub fn change_pct(open: f64, close: f64) -> f64 {
    (close - open) / open * 100.0
}

pub fn total_volume(bars: &[Bar]) -> f64 {
    bars.iter().map(|b| b.volume).sum()
}

pub fn average_volume(bars: &[Bar]) -> Option<f64> {
    if bars.is_empty() {
        return None;
    }
    Some(total_volume(bars) / bars.len() as f64)
}
