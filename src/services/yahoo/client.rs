//! REST client for the Yahoo Finance chart endpoint.

use crate::error::{Result, SentinelError};
use crate::services::yahoo::messages::ChartResponse;
use reqwest::Client;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("market-sentinel/", env!("CARGO_PKG_VERSION"));

pub struct YahooRestClient {
    base_url: String,
    client: Client,
}

impl YahooRestClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Use a preconfigured client, e.g. one pointed at a mock server.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn chart_url(&self, symbol: &str, range: &str, interval: &str) -> Result<Url> {
        let endpoint = format!(
            "{}/v8/finance/chart/{}",
            self.base_url.trim_end_matches('/'),
            symbol
        );
        Ok(Url::parse_with_params(
            &endpoint,
            &[("range", range), ("interval", interval)],
        )?)
    }

    /// Fetch one chart payload. Error payloads are returned to the caller as-is.
    pub async fn chart(&self, symbol: &str, range: &str, interval: &str) -> Result<ChartResponse> {
        let url = self.chart_url(symbol, range, interval)?;
        debug!(%url, "requesting chart");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ChartResponse>(&body) {
            Ok(chart) => Ok(chart),
            Err(_) if !status.is_success() => Err(SentinelError::Provider(format!(
                "chart request for {} failed with HTTP {}",
                symbol, status
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
