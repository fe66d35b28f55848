// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording what happened during a session.
//!
//! Components log structured events (user actions, warnings, errors, state
//! changes) through a [`DiagnosticsHandle`]. The [`DiagnosticsCollector`]
//! keeps the most recent events in a memory-bounded [`CircularBuffer`] and
//! can export them as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a serializable payload
//! - [`DiagnosticsCollector`]: Channel receiver, buffer owner and exporter

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
pub use export::{DiagnosticReport, ReportMetadata, SerializableEvent};
