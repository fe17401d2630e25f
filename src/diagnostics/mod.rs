// SPDX-License-Identifier: MPL-2.0
//! Diagnostics channel.
//!
//! Failures that the user never sees (country lookups, flag downloads,
//! unreadable settings) are reported here. Each event is logged through
//! `tracing` and kept in a memory-bounded circular buffer.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: cloneable, non-blocking sender
//! - [`DiagnosticsCollector`]: drains the channel into a [`CircularBuffer`]
//! - [`DiagnosticEvent`]: timestamped error, warning or user action

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
