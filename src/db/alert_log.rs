//! Append-only CSV alert log.
//!
//! Single writer: appends are not locked, so two concurrent `sentinel` processes
//! sharing a log may interleave rows. Schedule one invocation at a time.

use crate::error::Result;
use crate::models::AlertLogRecord;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct AlertLog {
    path: PathBuf,
}

impl AlertLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, writing the header first if the log is new or empty.
    pub fn append(&self, record: &AlertLogRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!(path = %self.path.display(), header = needs_header, "appended alert log row");
        Ok(())
    }

    /// All rows in append order. A missing log reads as empty.
    pub fn read_all(&self) -> Result<Vec<AlertLogRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}
