//! Job handlers for the alert workflow

use crate::db::write_latest_alert;
use crate::error::{Result, SentinelError};
use crate::jobs::context::JobContext;
use crate::jobs::types::{EvaluateAlertJob, FetchBarsJob, StoreAlertJob};
use crate::signals::AlertOutcome;
use chrono::Utc;
use tracing::{debug, info};

/// Fetch minute and daily bars. An empty intraday series is fatal.
pub async fn handle_fetch_bars(job: FetchBarsJob, ctx: &JobContext) -> Result<EvaluateAlertJob> {
    debug!(symbol = %job.symbol, "FetchBarsJob: fetching bars for {}", job.symbol);

    let intraday = ctx.data_provider.fetch_minute_bars(&job.symbol).await?;
    if intraday.is_empty() {
        return Err(SentinelError::NoIntradayData {
            symbol: job.symbol.clone(),
        });
    }

    let daily = ctx
        .data_provider
        .fetch_daily_bars(&job.symbol, job.daily_window_days)
        .await?;

    debug!(
        symbol = %job.symbol,
        intraday = intraday.len(),
        daily = daily.len(),
        "FetchBarsJob: fetched {} minute bars and {} daily bars",
        intraday.len(),
        daily.len()
    );

    Ok(EvaluateAlertJob {
        symbol: job.symbol,
        intraday,
        daily,
        fetched_at: Utc::now(),
    })
}

pub fn handle_evaluate_alert(job: EvaluateAlertJob, ctx: &JobContext) -> Result<StoreAlertJob> {
    let outcome = ctx
        .engine
        .evaluate(&job.intraday, &job.daily, job.fetched_at)
        .ok_or_else(|| SentinelError::NoIntradayData {
            symbol: job.symbol.clone(),
        })?;

    info!(
        symbol = %job.symbol,
        price = outcome.metrics.price,
        change_pct = outcome.metrics.change_pct,
        volume = outcome.metrics.intraday_volume,
        price_trigger = outcome.triggers.price,
        volume_trigger = outcome.triggers.volume,
        "EvaluateAlertJob: {} change {:.2}%",
        job.symbol,
        outcome.metrics.change_pct
    );

    Ok(StoreAlertJob {
        symbol: job.symbol,
        outcome,
    })
}

/// Overwrite the latest alert and append to the log. Final step.
pub fn handle_store_alert(job: StoreAlertJob, ctx: &JobContext) -> Result<AlertOutcome> {
    write_latest_alert(&ctx.config.latest_alert_path, &job.outcome.text)?;
    ctx.alert_log.append(&job.outcome.to_log_record())?;

    debug!(
        symbol = %job.symbol,
        latest = %ctx.config.latest_alert_path.display(),
        log = %ctx.alert_log.path().display(),
        "StoreAlertJob: alert written"
    );

    Ok(job.outcome)
}
