//! Runtime configuration for both tools.
//!
//! Defaults reproduce the fixed settings the tools have always shipped with; every
//! field can be overridden from the environment (a `.env` file is honoured by the
//! binaries via `dotenvy`).

use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PROVIDER_URL: &str = "https://query1.finance.yahoo.com";

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Settings for the alert generator.
#[derive(Debug, Clone)]
pub struct SentinelConfig {
    pub symbol: String,
    /// Human name used in the alert title, e.g. "Tesla".
    pub display_name: String,
    /// Absolute percent move from the session open that fires the price trigger.
    pub percent_trigger: f64,
    /// Intraday volume must reach this multiple of the 30-day average.
    pub volume_multiplier: f64,
    pub daily_window_days: u32,
    /// Timezone used for the alert timestamp.
    pub timezone: Tz,
    pub latest_alert_path: PathBuf,
    pub log_path: PathBuf,
    pub provider_base_url: String,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            symbol: "TSLA".to_string(),
            display_name: "Tesla".to_string(),
            percent_trigger: 5.0,
            volume_multiplier: 2.0,
            daily_window_days: 30,
            timezone: chrono_tz::America::Los_Angeles,
            latest_alert_path: PathBuf::from("latest_alert.md"),
            log_path: PathBuf::from("log").join("alerts.csv"),
            provider_base_url: DEFAULT_PROVIDER_URL.to_string(),
        }
    }
}

impl SentinelConfig {
    /// Defaults overlaid with `SENTINEL_*` environment variables.
    ///
    /// Values that fail to parse are ignored and the default is kept.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            symbol: env_or("SENTINEL_SYMBOL", defaults.symbol),
            display_name: env_or("SENTINEL_DISPLAY_NAME", defaults.display_name),
            percent_trigger: env_or("SENTINEL_PERCENT_TRIGGER", defaults.percent_trigger),
            volume_multiplier: env_or("SENTINEL_VOLUME_MULTIPLIER", defaults.volume_multiplier),
            daily_window_days: env_or("SENTINEL_DAILY_WINDOW_DAYS", defaults.daily_window_days),
            timezone: env_or("SENTINEL_TIMEZONE", defaults.timezone),
            latest_alert_path: env_or("SENTINEL_LATEST_ALERT_PATH", defaults.latest_alert_path),
            log_path: env_or("SENTINEL_LOG_PATH", defaults.log_path),
            provider_base_url: env_or("SENTINEL_PROVIDER_URL", defaults.provider_base_url),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn with_thresholds(mut self, percent_trigger: f64, volume_multiplier: f64) -> Self {
        self.percent_trigger = percent_trigger;
        self.volume_multiplier = volume_multiplier;
        self
    }

    pub fn with_output_paths(
        mut self,
        latest_alert_path: impl Into<PathBuf>,
        log_path: impl Into<PathBuf>,
    ) -> Self {
        self.latest_alert_path = latest_alert_path.into();
        self.log_path = log_path.into();
        self
    }
}

/// One named upstream alerting system and the file it drops per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemSource {
    pub label: String,
    pub file_name: String,
}

impl SystemSource {
    pub fn new(label: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            file_name: file_name.into(),
        }
    }
}

/// Settings for the report merger.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Root holding one directory per date key.
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub title: String,
    pub primary: SystemSource,
    pub secondary: SystemSource,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("out"),
            title: "Tesla Market Sentinel – Daily Comparison".to_string(),
            primary: SystemSource::new("ChatGPT", "chatgpt.json"),
            secondary: SystemSource::new("Grok", "grok.json"),
        }
    }
}

impl ReportConfig {
    pub fn with_dirs(mut self, data_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self.out_dir = out_dir.into();
        self
    }
}
