//! # Listeners reacting to highlight events.
//!
//! This module provides the [`Listen`] trait and the function-backed
//! [`ListenFn`] adapter used to register callbacks on the
//! [`EventBus`](crate::EventBus).
//!
//! ## Listener flow
//! ```text
//!   producer ── emit(name, range) ──► EventBus
//!                                        │ (registration order, fail-fast)
//!                                        ├──► Listen::on_event(name, range)
//!                                        └──► Listen::on_event(name, range)
//! ```
//!
//! ## Implementing custom listeners
//! ```rust
//! use rangebus::{EventName, HighlightRange, Listen, ListenerError};
//!
//! struct Decorator {
//!     applied: Vec<HighlightRange>,
//! }
//!
//! impl Listen for Decorator {
//!     fn name(&self) -> &str {
//!         "decorator"
//!     }
//!
//!     fn on_event(
//!         &mut self,
//!         event: EventName,
//!         range: HighlightRange,
//!     ) -> Result<(), ListenerError> {
//!         match event {
//!             EventName::FocusHighlight => self.applied.push(range),
//!             EventName::BlurHighlight => self.applied.retain(|r| *r != range),
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod listen;
mod listen_fn;

pub use listen::Listen;
pub use listen_fn::ListenFn;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
