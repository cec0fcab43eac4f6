//! Market Sentinel alert generator
//!
//! Polls one symbol, writes the latest alert, appends to the alert log and echoes
//! the alert text. Exits with status 1 when no intraday data is available.

use dotenvy::dotenv;
use market_sentinel::config::SentinelConfig;
use market_sentinel::jobs::{run_sentinel, JobContext};
use market_sentinel::logging;
use market_sentinel::services::market_data::MarketDataProvider;
use market_sentinel::services::yahoo::YahooMarketDataProvider;
use market_sentinel::SentinelError;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = SentinelConfig::from_env();
    info!(
        symbol = %config.symbol,
        percent_trigger = config.percent_trigger,
        volume_multiplier = config.volume_multiplier,
        "Starting Market Sentinel"
    );

    let provider: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(YahooMarketDataProvider::new(config.provider_base_url.clone())?);
    let ctx = JobContext::new(provider, config);

    match run_sentinel(&ctx).await {
        Ok(outcome) => {
            println!("{}", outcome.text);
            Ok(ExitCode::SUCCESS)
        }
        Err(SentinelError::NoIntradayData { symbol }) => {
            warn!(%symbol, "no intraday bars, nothing written");
            println!("⚠️ Could not fetch {} data.", symbol);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
