//! File-backed persistence for the alert generator.

pub mod alert_log;
pub mod latest;

pub use alert_log::AlertLog;
pub use latest::write_latest_alert;
