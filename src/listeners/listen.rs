//! # Core listener trait
//!
//! `Listen` is the extension point for plugging event handlers into the bus.
//! Listeners are invoked **inline** from [`EventBus::emit`](crate::EventBus::emit),
//! on the emitting call stack, in registration order.
//!
//! ## Contract
//! - Invocation is synchronous: a slow listener blocks the emitter and every
//!   listener registered after it. There is no queueing or timeout.
//! - A returned error aborts the remaining listeners for that emit (fail-fast)
//!   and surfaces to the emitter as
//!   [`BusError::ListenerFailed`](crate::BusError::ListenerFailed).
//! - Listeners receive the [`EventName`] alongside the payload so one
//!   implementation can serve both channels.

use crate::error::ListenerError;
use crate::events::{EventName, HighlightRange};

/// Contract for highlight-event listeners.
///
/// Called inline from the emitting context. Implementations own their state
/// mutably (`&mut self`); shared state is an explicit `Rc`/`Arc` choice of the
/// implementor.
pub trait Listen: 'static {
    /// Handle a single event.
    ///
    /// # Parameters
    /// - `event`: the channel this invocation was emitted on
    /// - `range`: the highlighted span payload
    fn on_event(&mut self, event: EventName, range: HighlightRange) -> Result<(), ListenerError>;

    /// Human-readable name (for error reporting and logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
