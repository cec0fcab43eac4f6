use crate::config::ReportConfig;
use crate::error::Result;
use crate::report::loader::load_document;
use crate::report::merge::merge_alerts;
use crate::report::render::render_report;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub dated: PathBuf,
    pub latest: PathBuf,
}

pub struct ReportMerger {
    config: ReportConfig,
}

impl ReportMerger {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render the report for `date` without writing it.
    pub fn render(&self, date: &str) -> Result<String> {
        let day_dir = self.config.data_dir.join(date);
        let primary = &self.config.primary;
        let secondary = &self.config.secondary;

        let primary_doc = load_document(&day_dir.join(&primary.file_name))?;
        let secondary_doc = load_document(&day_dir.join(&secondary.file_name))?;

        let entries = merge_alerts(&[
            (primary.label.as_str(), primary_doc.as_ref()),
            (secondary.label.as_str(), secondary_doc.as_ref()),
        ]);

        info!(
            date,
            entries = entries.len(),
            primary = primary_doc.is_some(),
            secondary = secondary_doc.is_some(),
            "merged {} alerts for {}",
            entries.len(),
            date
        );

        Ok(render_report(
            &self.config.title,
            date,
            &entries,
            &primary.label,
            &secondary.label,
        ))
    }

    /// Write `<date>-report.md` and `latest.md`, overwriting both.
    pub fn run(&self, date: &str) -> Result<ReportPaths> {
        let report = self.render(date)?;

        fs::create_dir_all(&self.config.out_dir)?;
        let paths = ReportPaths {
            dated: self.config.out_dir.join(format!("{}-report.md", date)),
            latest: self.config.out_dir.join("latest.md"),
        };
        fs::write(&paths.dated, &report)?;
        fs::write(&paths.latest, &report)?;

        Ok(paths)
    }
}
