//! Market Sentinel
//!
//! Two standalone tools sharing one library:
//! - `sentinel`: polls intraday and daily bars for one equity, checks the price and
//!   volume triggers, writes the latest alert and appends to the CSV alert log.
//! - `compare`: merges per-day alert feeds from two named systems into a markdown
//!   comparison report with headline-overlap analysis.

pub mod config;
pub mod db;
pub mod error;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;

pub use error::{Result, SentinelError};
