use crate::signals::metrics::SessionMetrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerThresholds {
    pub percent_trigger: f64,
    pub volume_multiplier: f64,
}

impl Default for TriggerThresholds {
    fn default() -> Self {
        Self {
            percent_trigger: 5.0,
            volume_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triggers {
    pub price: bool,
    pub volume: bool,
}

impl Triggers {
    pub fn evaluate(metrics: &SessionMetrics, thresholds: &TriggerThresholds) -> Self {
        Self {
            price: price_trigger(metrics.change_pct, thresholds.percent_trigger),
            volume: volume_trigger(
                metrics.intraday_volume,
                metrics.avg_daily_volume,
                thresholds.volume_multiplier,
            ),
        }
    }

    pub fn any(&self) -> bool {
        self.price || self.volume
    }

    /// Trigger line body: `"Price "`, `" Volume"` or `"Price Volume"`.
    pub fn label(&self) -> String {
        format!(
            "{} {}",
            if self.price { "Price" } else { "" },
            if self.volume { "Volume" } else { "" },
        )
    }
}

pub fn price_trigger(change_pct: f64, percent_trigger: f64) -> bool {
    change_pct.abs() >= percent_trigger
}

/// A missing baseline never fires.
pub fn volume_trigger(intraday_volume: f64, avg_volume: Option<f64>, multiplier: f64) -> bool {
    avg_volume.is_some_and(|avg| intraday_volume >= multiplier * avg)
}
