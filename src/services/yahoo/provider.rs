//! Yahoo Finance market data provider implementation

use crate::error::{Result, SentinelError};
use crate::models::BarSeries;
use crate::services::market_data::MarketDataProvider;
use crate::services::yahoo::client::YahooRestClient;
use crate::services::yahoo::messages::ChartResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub struct YahooMarketDataProvider {
    rest: Arc<YahooRestClient>,
}

impl YahooMarketDataProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(Arc::new(YahooRestClient::with_base_url(
            base_url,
        )?)))
    }

    pub fn with_client(rest: Arc<YahooRestClient>) -> Self {
        Self { rest }
    }

    async fn fetch(&self, symbol: &str, range: &str, interval: &str) -> Result<BarSeries> {
        let response = self.rest.chart(symbol, range, interval).await?;
        let bars = extract_bars(response)?;
        debug!(
            symbol,
            range,
            interval,
            count = bars.len(),
            "fetched {} bars",
            bars.len()
        );
        Ok(bars)
    }
}

fn extract_bars(response: ChartResponse) -> Result<BarSeries> {
    if let Some(err) = response.chart.error {
        return Err(SentinelError::Provider(format!(
            "{}: {}",
            err.code, err.description
        )));
    }

    Ok(response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .map(|result| result.into_bars())
        .unwrap_or_default())
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn fetch_minute_bars(&self, symbol: &str) -> Result<BarSeries> {
        self.fetch(symbol, "1d", "1m").await
    }

    async fn fetch_daily_bars(&self, symbol: &str, days: u32) -> Result<BarSeries> {
        let range = format!("{}d", days);
        self.fetch(symbol, &range, "1d").await
    }
}
