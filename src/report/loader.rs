use crate::error::Result;
use crate::models::AlertDocument;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read one system's document. A missing file or a top-level `null` is `Ok(None)`;
/// malformed JSON is an error.
pub fn load_document(path: &Path) -> Result<Option<AlertDocument>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no alert document");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let Some(document) = serde_json::from_str::<Option<AlertDocument>>(&raw)? else {
        debug!(path = %path.display(), "alert document is null");
        return Ok(None);
    };
    debug!(path = %path.display(), alerts = document.alerts.len(), "loaded alert document");
    Ok(Some(document))
}
