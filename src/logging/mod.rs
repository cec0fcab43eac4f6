//! Logging setup for the `sentinel` and `compare` binaries.
//!
//! Everything goes to stderr; stdout is reserved for the alert text and the report
//! confirmation line so scheduler wrappers can capture them verbatim.

use crate::config::get_environment;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: our crate at info, dependencies at warn.
pub const DEFAULT_FILTER: &str = "warn,market_sentinel=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log shipping.
    Json,
    /// Human-readable, coloured output.
    Pretty,
}

impl LogFormat {
    /// `production`/`prod` log JSON, anything else logs pretty.
    pub fn for_environment(environment: &str) -> Self {
        match environment.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    /// Explicit `LOG_FORMAT` (`json` / `pretty`), else derived from `APP_ENV`.
    pub fn from_env() -> Self {
        match env::var("LOG_FORMAT").ok().as_deref().map(str::trim) {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            _ => Self::for_environment(&get_environment()),
        }
    }
}

pub fn init_logging() {
    init_logging_with(LogFormat::from_env());
}

pub fn init_logging_with(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
