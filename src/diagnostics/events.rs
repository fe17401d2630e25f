// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};

/// Category of an error event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// A country record could not be fetched or applied to the panel.
    CountryFetch,
    /// The map document could not be loaded.
    MapLoad,
    /// The HTTP client could not be created.
    HttpClient,
    Other,
}

/// Category of a warning event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// A flag image could not be downloaded.
    FlagFetch,
    /// Settings could not be read and defaults are used.
    Config,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
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

#[derive(Debug, Clone, PartialEq)]
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

/// User interactions worth keeping next to errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// The pointer entered a country shape.
    HoverCountry { code: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    Error { event: ErrorEvent },
    Warning { event: WarningEvent },
    UserAction { action: UserAction },
}

/// A diagnostic event stamped with its wall-clock time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Error { .. })
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Warning { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_predicates() {
        let error = DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::CountryFetch, "boom"),
        });
        let warning = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::FlagFetch, "404"),
        });
        assert!(error.is_error() && !error.is_warning());
        assert!(warning.is_warning() && !warning.is_error());
    }

    #[test]
    fn timestamps_are_not_in_the_future() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::HoverCountry { code: "DK".into() },
        });
        assert!(event.timestamp <= Utc::now());
    }
}
