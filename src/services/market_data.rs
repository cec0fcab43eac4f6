//! Market data provider interface.

use crate::error::Result;
use crate::models::BarSeries;
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataProvider {
    /// Minute bars for the current session, oldest first.
    async fn fetch_minute_bars(&self, symbol: &str) -> Result<BarSeries>;

    /// Daily bars covering the trailing `days` days, oldest first.
    async fn fetch_daily_bars(&self, symbol: &str, days: u32) -> Result<BarSeries>;
}

/// Provider that serves fixed series, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    minute_bars: BarSeries,
    daily_bars: BarSeries,
}

impl StaticMarketDataProvider {
    pub fn new(minute_bars: BarSeries, daily_bars: BarSeries) -> Self {
        Self {
            minute_bars,
            daily_bars,
        }
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn fetch_minute_bars(&self, _symbol: &str) -> Result<BarSeries> {
        Ok(self.minute_bars.clone())
    }

    async fn fetch_daily_bars(&self, _symbol: &str, days: u32) -> Result<BarSeries> {
        let skip = self.daily_bars.len().saturating_sub(days as usize);
        Ok(self.daily_bars[skip..].to_vec())
    }
}
