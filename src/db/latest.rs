use crate::error::Result;
use std::fs;
use std::path::Path;

/// Overwrite the latest-alert file with `text`; no history is kept.
pub fn write_latest_alert(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}
