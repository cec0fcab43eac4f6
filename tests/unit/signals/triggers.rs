//! Unit tests for trigger evaluation

use market_sentinel::signals::triggers::{price_trigger, volume_trigger};
use market_sentinel::signals::{SessionMetrics, TriggerThresholds, Triggers};

fn metrics(change_pct: f64, volume: f64, avg: Option<f64>) -> SessionMetrics {
    SessionMetrics {
        price: 100.0,
        day_open: 100.0,
        change_pct,
        day_low: 99.0,
        day_high: 101.0,
        intraday_volume: volume,
        avg_daily_volume: avg,
    }
}

#[test]
fn test_price_trigger_boundary() {
    assert!(price_trigger(5.0, 5.0));
    assert!(price_trigger(-5.0, 5.0));
    assert!(!price_trigger(4.99, 5.0));
    assert!(!price_trigger(-4.99, 5.0));
}

#[test]
fn test_volume_trigger_boundary() {
    assert!(volume_trigger(2_000.0, Some(1_000.0), 2.0));
    assert!(!volume_trigger(1_999.0, Some(1_000.0), 2.0));
    assert!(!volume_trigger(1_000_000.0, None, 2.0));
}

#[test]
fn test_triggers_evaluate() {
    let thresholds = TriggerThresholds::default();

    let quiet = Triggers::evaluate(&metrics(1.0, 100.0, Some(1_000.0)), &thresholds);
    assert!(!quiet.any());
    assert_eq!(quiet.label(), " ");

    let both = Triggers::evaluate(&metrics(-6.0, 5_000.0, Some(1_000.0)), &thresholds);
    assert!(both.price && both.volume);
    assert_eq!(both.label(), "Price Volume");

    let volume_only = Triggers::evaluate(&metrics(0.5, 2_000.0, Some(1_000.0)), &thresholds);
    assert_eq!(volume_only.label(), " Volume");

    let price_only = Triggers::evaluate(&metrics(5.5, 100.0, Some(1_000.0)), &thresholds);
    assert_eq!(price_only.label(), "Price ");
}

#[test]
fn test_custom_thresholds() {
    let thresholds = TriggerThresholds {
        percent_trigger: 1.0,
        volume_multiplier: 0.5,
    };
    let triggers = Triggers::evaluate(&metrics(1.5, 600.0, Some(1_000.0)), &thresholds);
    assert!(triggers.price);
    assert!(triggers.volume);
}
