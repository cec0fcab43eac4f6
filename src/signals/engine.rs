//! Alert evaluation: metrics, triggers and the rendered alert text.

use crate::config::SentinelConfig;
use crate::models::{AlertLogRecord, Bar};
use crate::signals::metrics::SessionMetrics;
use crate::signals::triggers::{TriggerThresholds, Triggers};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use num_format::{Locale, ToFormattedString};

pub const NO_NEWS_TEXT: &str =
    "No new credible information or significant stock movement since last alert.";

#[derive(Debug, Clone, PartialEq)]
pub struct AlertOutcome {
    pub metrics: SessionMetrics,
    pub triggers: Triggers,
    pub text: String,
    pub generated_at: DateTime<Tz>,
}

impl AlertOutcome {
    pub fn to_log_record(&self) -> AlertLogRecord {
        AlertLogRecord {
            timestamp: self.generated_at.to_rfc3339(),
            price: self.metrics.price,
            change_pct: self.metrics.change_pct,
            volume: self.metrics.intraday_volume,
            avg30_vol: self.metrics.avg_daily_volume,
            price_trigger: self.triggers.price,
            volume_trigger: self.triggers.volume,
            text: AlertLogRecord::flatten_text(&self.text),
        }
    }
}

pub struct AlertEngine {
    symbol: String,
    display_name: String,
    window_days: u32,
    timezone: Tz,
    thresholds: TriggerThresholds,
}

impl AlertEngine {
    pub fn new(config: &SentinelConfig) -> Self {
        Self {
            symbol: config.symbol.clone(),
            display_name: config.display_name.clone(),
            window_days: config.daily_window_days,
            timezone: config.timezone,
            thresholds: TriggerThresholds {
                percent_trigger: config.percent_trigger,
                volume_multiplier: config.volume_multiplier,
            },
        }
    }

    /// Evaluate one polling cycle. Returns `None` when there are no intraday bars.
    pub fn evaluate(&self, intraday: &[Bar], daily: &[Bar], now: DateTime<Utc>) -> Option<AlertOutcome> {
        let metrics = SessionMetrics::from_bars(intraday, daily)?;
        let triggers = Triggers::evaluate(&metrics, &self.thresholds);
        let generated_at = now.with_timezone(&self.timezone);

        let text = if triggers.any() {
            self.render_alert(&metrics, &triggers, &generated_at)
        } else {
            NO_NEWS_TEXT.to_string()
        };

        Some(AlertOutcome {
            metrics,
            triggers,
            text,
            generated_at,
        })
    }

    fn render_alert(
        &self,
        metrics: &SessionMetrics,
        triggers: &Triggers,
        generated_at: &DateTime<Tz>,
    ) -> String {
        let avg_volume = metrics
            .avg_daily_volume
            .map(format_volume)
            .unwrap_or_else(|| "n/a".to_string());

        format!(
            "{name} Market Sentinel Alert - {ts}\n\n\
             **{symbol} Price:** ${price:.2}\n\
             **Change from open:** {change:.2}%\n\
             **Day range:** {low:.2} – {high:.2}\n\
             **Intraday volume:** {volume}\n\
             **{days}-day avg volume:** {avg}\n\n\
             → Trigger met: {fired}\n",
            name = self.display_name,
            ts = generated_at.format("%Y-%m-%d %H:%M %Z"),
            symbol = self.symbol,
            price = metrics.price,
            change = metrics.change_pct,
            low = metrics.day_low,
            high = metrics.day_high,
            volume = format_volume(metrics.intraday_volume),
            days = self.window_days,
            avg = avg_volume,
            fired = triggers.label(),
        )
    }
}

/// Whole-unit volume with thousands separators, e.g. `1,234,567`.
pub fn format_volume(volume: f64) -> String {
    (volume.round() as i64).to_formatted_string(&Locale::en)
}
