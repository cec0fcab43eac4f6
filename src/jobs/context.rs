//! Job context for dependency injection

use crate::config::SentinelConfig;
use crate::db::AlertLog;
use crate::services::market_data::MarketDataProvider;
use crate::signals::AlertEngine;
use std::sync::Arc;

/// Everything a workflow run needs. Tests swap in a fixture provider and
/// temporary output paths through `config`.
pub struct JobContext {
    pub data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
    pub config: SentinelConfig,
    pub engine: AlertEngine,
    pub alert_log: AlertLog,
}

impl JobContext {
    pub fn new(
        data_provider: Arc<dyn MarketDataProvider + Send + Sync>,
        config: SentinelConfig,
    ) -> Self {
        let engine = AlertEngine::new(&config);
        let alert_log = AlertLog::new(config.log_path.clone());
        Self {
            data_provider,
            config,
            engine,
            alert_log,
        }
    }
}
