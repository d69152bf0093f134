//! Highlight events: types and the synchronous bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to highlight transitions emitted by the surrounding
//! application.
//!
//! ## Contents
//! - [`EventName`], [`HighlightRange`] — event classification and payload
//! - [`EventBus`], [`ListenerId`] — ordered synchronous fan-out with
//!   handle-based removal

mod bus;
mod event;

pub use bus::{EventBus, ListenerId};
pub use event::{EventName, HighlightRange};
