//! Shared data models for both tools.

pub mod alert;
pub mod bars;
pub mod report;

pub use alert::AlertLogRecord;
pub use bars::{Bar, BarSeries};
pub use report::{AlertDocument, MarketSnapshot, ReportAlert, TaggedAlert};
