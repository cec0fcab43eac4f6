//! Daily comparison report across two alerting systems.

pub mod analysis;
pub mod loader;
pub mod merge;
pub mod merger;
pub mod render;

pub use analysis::HeadlineAnalysis;
pub use loader::load_document;
pub use merge::merge_alerts;
pub use merger::{ReportMerger, ReportPaths};
pub use render::{render_report, NO_DATA_PLACEHOLDER};
