// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Components hold a cloned [`DiagnosticsHandle`] and send events through a
//! bounded channel; the application drains the channel into the collector's
//! circular buffer on a periodic tick.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::{
    generate_default_filename, write_atomic, DiagnosticReport, ReportMetadata, SerializableEvent,
};
use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    ErrorEvent, UserAction, WarningEvent,
};
use crate::error::Result;

/// Capacity of the event channel between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks: when the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Receives events from handles and keeps the most recent ones.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Number of buffered events (pending channel events excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Drains pending events and builds a report of the whole buffer.
    pub fn build_report(&mut self) -> DiagnosticReport {
        self.process_pending();

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: u64::try_from(
                    event
                        .timestamp
                        .saturating_duration_since(self.collection_started_at)
                        .as_millis(),
                )
                .unwrap_or(u64::MAX),
                kind: event.kind.clone(),
            })
            .collect();

        DiagnosticReport {
            metadata: ReportMetadata {
                app_version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: Utc::now().to_rfc3339(),
                collection_started_at: self.collection_started_at_utc.to_rfc3339(),
                event_count: events.len(),
            },
            events,
        }
    }

    /// Writes a JSON report into `directory` and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the report
    /// cannot be serialized, or the file cannot be written.
    pub fn export_to_dir(&mut self, directory: &Path) -> Result<PathBuf> {
        fs::create_dir_all(directory)?;
        let report = self.build_report();
        let json = serde_json::to_string_pretty(&report)?;
        let path = directory.join(generate_default_filename());
        write_atomic(&path, &json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::Navigate {
            path: "/sales".into(),
        });
        handle.log_warning(WarningEvent::new(WarningType::Other, "careful"));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..(DEFAULT_CHANNEL_CAPACITY + 10) {
            handle.log_state(AppStateEvent::ConfigSaved);
        }

        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn report_contains_all_buffered_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_error(ErrorEvent::new(ErrorType::Export, "disk full"));
        handle.log_action(UserAction::ExportDiagnostics);

        let report = collector.build_report();
        assert_eq!(report.metadata.event_count, 2);
        assert_eq!(report.events.len(), 2);
    }

    #[test]
    fn export_writes_json_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_state(AppStateEvent::Started {
            locale: "en-US".into(),
        });

        let path = collector
            .export_to_dir(&dir.path().join("reports"))
            .expect("export should succeed");

        let content = fs::read_to_string(path).expect("report should exist");
        let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
        assert_eq!(value["metadata"]["event_count"], 1);
        assert_eq!(value["events"][0]["type"], "app_state");
        assert_eq!(value["events"][0]["state"]["state"], "started");
    }

    #[test]
    fn report_timestamps_are_rfc3339() {
        let mut collector = DiagnosticsCollector::default();
        let report = collector.build_report();

        let started = DateTime::parse_from_rfc3339(&report.metadata.collection_started_at)
            .expect("start timestamp parses");
        let generated = DateTime::parse_from_rfc3339(&report.metadata.generated_at)
            .expect("generation timestamp parses");
        assert!(generated >= started);

        let json = serde_json::to_value(&report.metadata).expect("metadata serializes");
        assert!(json["generated_at"].is_string());
    }
}
