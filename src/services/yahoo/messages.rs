//! Chart endpoint payloads.

use crate::models::{Bar, BarSeries};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartResult {
    /// Unix seconds, one per sample. Absent when the session has no data.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Column-oriented OHLCV arrays; gaps are `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Convert the columnar payload into bars, dropping incomplete samples.
    pub fn into_bars(self) -> BarSeries {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let open = (*quote.open.get(i)?)?;
                let high = (*quote.high.get(i)?)?;
                let low = (*quote.low.get(i)?)?;
                let close = (*quote.close.get(i)?)?;
                let volume = (*quote.volume.get(i)?)?;
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(Bar::new(open, high, low, close, volume, timestamp))
            })
            .collect()
    }
}
