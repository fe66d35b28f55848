// SPDX-License-Identifier: MPL-2.0
//! JSON report generation and file output.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use super::DiagnosticEventKind;

/// Top-level structure written to disk.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

/// Report header. Timestamps are RFC 3339 strings in UTC.
#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    pub app_version: String,
    pub generated_at: String,
    pub collection_started_at: String,
    pub event_count: usize,
}

/// An event with its offset from the start of collection.
#[derive(Debug, Serialize)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// Generates a timestamped file name for a report.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("shelfwise_diagnostics_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes `content` next to `path` first, then renames it into place.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
