// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation
    // ==========================================================================
    /// Follow a sidebar link or in-page link.
    Navigate { path: String },

    /// Collapse or expand the sidebar.
    ToggleSidebar {
        /// Collapse state after the toggle.
        collapsed: bool,
    },

    // ==========================================================================
    // Notifications
    // ==========================================================================
    /// Close a toast before its timer fired.
    DismissNotification,

    // ==========================================================================
    // Inventory
    // ==========================================================================
    /// Submit the product form.
    SubmitProduct {
        /// Whether the draft passed validation.
        accepted: bool,
    },

    /// Discard the product form.
    DiscardProduct,

    // ==========================================================================
    // Settings
    // ==========================================================================
    ChangeLanguage { locale: String },

    ChangeTheme { mode: String },

    ExportDiagnostics,
}

/// Categories of warnings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Settings file could not be read; defaults were used.
    ConfigLoad,
    /// A notification duration was outside the accepted range.
    DurationClamped,
    /// A warning toast was shown.
    Notification,
    Other,
}

/// Categories of errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ConfigSave,
    Export,
    /// An error toast was shown.
    Notification,
    Other,
}

/// A warning with its category and message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category and message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Application state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    Started { locale: String },
    /// The window crossed the mobile breakpoint.
    LayoutChanged { mobile: bool },
    ConfigSaved,
}

/// Payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
    AppState { state: AppStateEvent },
}

/// A recorded event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
