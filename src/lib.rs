//! # rangebus
//!
//! **rangebus** is a small synchronous, typed, in-process event bus for
//! editor highlight-range events.
//!
//! It decouples the code that decides *when* a span of lines gains or loses
//! focus (producers) from the code that reacts to it (listeners), without
//! either side knowing about the other. Two event channels exist, fixed at
//! compile time: [`EventName::FocusHighlight`] and [`EventName::BlurHighlight`],
//! both carrying a [`HighlightRange`] payload.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────┐        ┌──────────────────────────────┐
//!     │   Producer   │        │  EventBus                    │
//!     │ (focus/blur  │─emit──►│  - per-name ordered listener │
//!     │  transitions)│        │    sequences                 │
//!     └──────────────┘        │  - ListenerId registrations  │
//!                             └──────┬───────────┬───────────┘
//!                            on_event│           │on_event
//!                                    ▼           ▼
//!                             ┌──────────┐ ┌──────────┐
//!                             │ Listener │ │ Listener │  (registration order)
//!                             └──────────┘ └──────────┘
//! ```
//!
//! ## Semantics
//! - **Synchronous fan-out**: [`EventBus::emit`] invokes every listener for the
//!   name, in registration order, and blocks until all of them return.
//! - **Fail-fast**: the first listener error propagates out of `emit` and the
//!   remaining listeners for that call are skipped.
//! - **Permissive duplication**: registering the same callback twice creates two
//!   independent registrations; each fires per emit.
//! - **Handle-based removal**: [`EventBus::on`] returns a [`ListenerId`];
//!   [`EventBus::off`] removes exactly that registration. Stale ids are a no-op.
//! - **Single-threaded**: methods take `&mut self`; there is no internal locking.
//!   Share a bus across threads by wrapping it yourself (e.g. `Mutex<EventBus>`).
//!
//! ## Features
//! | Area            | Description                                        | Key types / traits                |
//! |-----------------|----------------------------------------------------|-----------------------------------|
//! | **Bus**         | Register, remove and emit typed highlight events.  | [`EventBus`], [`ListenerId`]      |
//! | **Events**      | Closed event-name set and range payload.           | [`EventName`], [`HighlightRange`] |
//! | **Listeners**   | Trait and function-backed adapter for callbacks.   | [`Listen`], [`ListenFn`]          |
//! | **Errors**      | Typed errors for listener and bus failures.        | [`BusError`], [`ListenerError`]   |
//! | **Records**     | Plain file-content shape exchanged with the server.| [`FileContent`]                   |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use rangebus::{EventBus, EventName, HighlightRange, ListenFn, ListenerError};
//!
//! let mut bus = EventBus::new();
//!
//! // Record every focused range.
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let id = bus.on(
//!     EventName::FocusHighlight,
//!     ListenFn::new("recorder", move |_name, range: HighlightRange| {
//!         sink.borrow_mut().push(range);
//!         Ok::<_, ListenerError>(())
//!     }),
//! );
//!
//! bus.emit(EventName::FocusHighlight, HighlightRange::new(10, 20))?;
//! assert_eq!(seen.borrow().as_slice(), &[HighlightRange::new(10, 20)]);
//!
//! // Stop reacting on teardown.
//! assert!(bus.off(EventName::FocusHighlight, id));
//! bus.emit(EventName::FocusHighlight, HighlightRange::new(1, 2))?;
//! assert_eq!(seen.borrow().len(), 1);
//! # Ok::<(), rangebus::BusError>(())
//! ```

mod error;
mod events;
mod listeners;
mod record;

// ---- Public re-exports ----

pub use error::{BusError, ListenerError};
pub use events::{EventBus, EventName, HighlightRange, ListenerId};
pub use listeners::{Listen, ListenFn};
pub use record::FileContent;

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
