//! Error types used by the bus and by listener bodies.
//!
//! This module defines two error enums:
//!
//! - [`BusError`] — errors raised by the bus itself during `emit`.
//! - [`ListenerError`] — errors raised by individual listener invocations.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use thiserror::Error;

use crate::events::EventName;

/// # Errors produced by the event bus.
///
/// These surface out of [`EventBus::emit`](crate::EventBus::emit) when a
/// listener fails. Emit is fail-fast: the first failing listener aborts
/// invocation of the remaining listeners for that call.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// A listener returned an error during `emit`; remaining listeners were skipped.
    #[error("listener '{listener}' failed on {event}: {source}")]
    ListenerFailed {
        /// Event name being emitted.
        event: EventName,
        /// Name of the failing listener (for logs).
        listener: String,
        /// The underlying listener error.
        #[source]
        source: ListenerError,
    },
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use rangebus::{BusError, EventName, ListenerError};
    ///
    /// let err = BusError::ListenerFailed {
    ///     event: EventName::FocusHighlight,
    ///     listener: "decorator".into(),
    ///     source: ListenerError::fail("boom"),
    /// };
    /// assert_eq!(err.as_label(), "bus_listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::ListenerFailed { .. } => "bus_listener_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BusError::ListenerFailed {
                event,
                listener,
                source,
            } => {
                format!("listener={listener} event={event} error={source}")
            }
        }
    }
}

/// # Errors produced by listener bodies.
///
/// Returned from [`Listen::on_event`](crate::Listen::on_event) when a listener
/// cannot handle an event (e.g. applying a decoration to a disposed view).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ListenerError {
    /// Listener invocation failed.
    #[error("listener failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl ListenerError {
    /// Creates a [`ListenerError::Fail`] from any message.
    pub fn fail(error: impl Into<String>) -> Self {
        ListenerError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use rangebus::ListenerError;
    ///
    /// let err = ListenerError::fail("boom");
    /// assert_eq!(err.as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { error } => format!("error: {error}"),
        }
    }
}
