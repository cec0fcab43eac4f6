//! Workflow for one alert generator run
//!
//! FetchBarsJob → EvaluateAlertJob → StoreAlertJob, executed in order in-process.
//! Nothing is written unless the fetch step produced intraday bars.

use crate::error::Result;
use crate::jobs::context::JobContext;
use crate::jobs::handlers::{handle_evaluate_alert, handle_fetch_bars, handle_store_alert};
use crate::jobs::types::FetchBarsJob;
use crate::signals::AlertOutcome;

pub async fn run_sentinel(ctx: &JobContext) -> Result<AlertOutcome> {
    let fetch = FetchBarsJob {
        symbol: ctx.config.symbol.clone(),
        daily_window_days: ctx.config.daily_window_days,
    };

    let evaluate = handle_fetch_bars(fetch, ctx).await?;
    let store = handle_evaluate_alert(evaluate, ctx)?;
    handle_store_alert(store, ctx)
}
