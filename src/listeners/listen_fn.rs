//! # Function-backed listener (`ListenFn`)
//!
//! [`ListenFn`] wraps a closure `F: FnMut(EventName, HighlightRange) -> Result<(), ListenerError>`
//! so plain callbacks can be registered without declaring a listener type.
//!
//! ## Example
//! ```rust
//! use rangebus::{EventBus, EventName, HighlightRange, Listen, ListenFn, ListenerError};
//!
//! let listener = ListenFn::new("printer", |event: EventName, range: HighlightRange| {
//!     println!("{event}: {range}");
//!     Ok::<_, ListenerError>(())
//! });
//! assert_eq!(listener.name(), "printer");
//!
//! let mut bus = EventBus::new();
//! bus.on(EventName::FocusHighlight, listener);
//! ```

use std::borrow::Cow;

use crate::error::ListenerError;
use crate::events::{EventName, HighlightRange};
use crate::listeners::listen::Listen;

/// Function-backed listener implementation.
///
/// The closure is `FnMut`: it may carry its own mutable state between
/// invocations (counters, applied decorations, ...).
pub struct ListenFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenFn<F> {
    /// Creates a new function-backed listener with a stable name.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Listen for ListenFn<F>
where
    F: FnMut(EventName, HighlightRange) -> Result<(), ListenerError> + 'static,
{
    fn on_event(&mut self, event: EventName, range: HighlightRange) -> Result<(), ListenerError> {
        (self.f)(event, range)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_state_across_invocations() {
        let mut count = 0usize;
        let mut listener = ListenFn::new("counter", move |_event, _range| {
            count += 1;
            if count > 1 {
                return Err(ListenerError::fail("called twice"));
            }
            Ok(())
        });
        assert_eq!(listener.name(), "counter");

        let range = HighlightRange::new(0, 1);
        assert!(listener.on_event(EventName::FocusHighlight, range).is_ok());
        assert!(listener.on_event(EventName::FocusHighlight, range).is_err());
    }
}
