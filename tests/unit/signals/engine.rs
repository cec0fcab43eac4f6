//! Unit tests for the alert engine

use crate::common_bars::{daily_bars, minute_bars, session_start};
use market_sentinel::config::SentinelConfig;
use market_sentinel::signals::engine::format_volume;
use market_sentinel::signals::{AlertEngine, NO_NEWS_TEXT};

#[test]
fn test_evaluate_without_intraday_bars() {
    let engine = AlertEngine::new(&SentinelConfig::default());
    let daily = daily_bars(&[1_000.0; 30]);
    assert!(engine.evaluate(&[], &daily, session_start()).is_none());
}

#[test]
fn test_quiet_session_renders_no_news() {
    let engine = AlertEngine::new(&SentinelConfig::default());
    let intraday = minute_bars(10, 100.0, 101.0, 10.0);
    let daily = daily_bars(&[1_000.0; 30]);

    let outcome = engine.evaluate(&intraday, &daily, session_start()).unwrap();
    assert!(!outcome.triggers.any());
    assert_eq!(outcome.text, NO_NEWS_TEXT);
}

#[test]
fn test_price_alert_text() {
    let engine = AlertEngine::new(&SentinelConfig::default());
    let intraday = minute_bars(10, 100.0, 106.0, 1_000.0);
    let daily = daily_bars(&[1_000_000.0; 30]);

    let outcome = engine.evaluate(&intraday, &daily, session_start()).unwrap();
    assert!(outcome.triggers.price);
    assert!(!outcome.triggers.volume);

    let text = &outcome.text;
    assert!(text.starts_with("Tesla Market Sentinel Alert - 2025-07-23 06:30 PDT\n\n"));
    assert!(text.contains("**TSLA Price:** $106.00\n"));
    assert!(text.contains("**Change from open:** 6.00%\n"));
    assert!(text.contains("**Day range:** 99.50 – 106.50\n"));
    assert!(text.contains("**Intraday volume:** 10,000\n"));
    assert!(text.contains("**30-day avg volume:** 1,000,000\n"));
    assert!(text.ends_with("→ Trigger met: Price \n"));
}

#[test]
fn test_volume_alert_with_custom_symbol() {
    let config = SentinelConfig::default().with_symbol("NVDA");
    let engine = AlertEngine::new(&config);
    let intraday = minute_bars(4, 100.0, 100.5, 600.0);
    let daily = daily_bars(&[1_000.0, 1_000.0]);

    let outcome = engine.evaluate(&intraday, &daily, session_start()).unwrap();
    assert!(!outcome.triggers.price);
    assert!(outcome.triggers.volume);
    assert!(outcome.text.contains("**NVDA Price:**"));
    assert!(outcome.text.ends_with("→ Trigger met:  Volume\n"));
}

#[test]
fn test_log_record_flattens_text() {
    let engine = AlertEngine::new(&SentinelConfig::default());
    let intraday = minute_bars(10, 100.0, 94.0, 5_000.0);
    let daily = daily_bars(&[1_000.0; 30]);

    let outcome = engine.evaluate(&intraday, &daily, session_start()).unwrap();
    let record = outcome.to_log_record();
    assert_eq!(record.timestamp, "2025-07-23T06:30:00-07:00");
    assert_eq!(record.price, 94.0);
    assert_eq!(record.volume, 50_000.0);
    assert_eq!(record.avg30_vol, Some(1_000.0));
    assert!(record.price_trigger);
    assert!(record.volume_trigger);
    assert!(!record.text.contains('\n'));
    assert!(record.text.contains("Trigger met: Price Volume"));
}

#[test]
fn test_format_volume() {
    assert_eq!(format_volume(0.0), "0");
    assert_eq!(format_volume(1_234_567.4), "1,234,567");
    assert_eq!(format_volume(999.6), "1,000");
}
