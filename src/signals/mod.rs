//! Price and volume trigger evaluation.

pub mod engine;
pub mod metrics;
pub mod triggers;

pub use engine::{AlertEngine, AlertOutcome, NO_NEWS_TEXT};
pub use metrics::SessionMetrics;
pub use triggers::{TriggerThresholds, Triggers};
