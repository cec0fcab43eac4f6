//! Alert generator pipeline: fetch bars, evaluate triggers, store the alert.

pub mod context;
pub mod handlers;
pub mod types;
pub mod workflow;

pub use context::JobContext;
pub use types::{EvaluateAlertJob, FetchBarsJob, StoreAlertJob};
pub use workflow::run_sentinel;
