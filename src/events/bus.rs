//! # Event bus for highlight transitions.
//!
//! [`EventBus`] is a synchronous, single-threaded publish/subscribe mediator:
//! producers announce [`EventName`]s carrying a [`HighlightRange`], listeners
//! registered for that name are invoked in registration order.
//!
//! ## Rules
//! - **Synchronous emit**: `emit()` invokes every listener inline and returns
//!   only after all of them have run (or one of them failed).
//! - **Fail-fast**: the first listener error aborts the remaining listeners for
//!   that call and surfaces as [`BusError::ListenerFailed`].
//! - **Ordered**: listeners fire in the order they were registered.
//! - **Permissive duplication**: every `on()` call is an independent
//!   registration, even for the same callback.
//! - **No persistence**: an emit with no registered listeners is a no-op.
//!
//! ## Removal policy
//! `on()` returns a [`ListenerId`] naming that one registration; `off()`
//! removes exactly that occurrence. Removing by handle rather than by callback
//! identity pins down the "which occurrence" question of minimalist pub/sub
//! primitives: duplicates are distinct handles, and removing one leaves the
//! others registered.

use std::collections::HashMap;

use crate::error::BusError;
use crate::listeners::Listen;

use super::event::{EventName, HighlightRange};

/// Handle naming a single registration on a bus.
///
/// Ids are unique per bus and never reused; a stale id passed to
/// [`EventBus::off`] is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// One registration: the handle, the listener's name (for error reporting)
/// and the listener itself.
struct Registration {
    id: ListenerId,
    name: String,
    listener: Box<dyn Listen>,
}

/// Synchronous publish/subscribe mediator for highlight events.
///
/// Owns, per [`EventName`], an ordered sequence of registrations. The bus has
/// no hidden global instance: construct one explicitly and pass it to
/// producers and consumers (tests get a fresh bus each).
///
/// ### Properties
/// - **Blocking**: `emit()` returns after every listener ran (fail-fast on error).
/// - **Single-threaded**: methods take `&mut self`; wrap the bus in a `Mutex`
///   yourself if it must cross threads.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<EventName, Vec<Registration>>,
    next_id: u64,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for every subsequent emit of `event`.
    ///
    /// The listener is appended to the event's sequence, preserving insertion
    /// order. Calling `on` repeatedly with the same callback registers it
    /// repeatedly; each registration fires independently per emit.
    ///
    /// Returns the [`ListenerId`] naming this registration for later [`off`].
    ///
    /// [`off`]: EventBus::off
    pub fn on<L: Listen>(&mut self, event: EventName, listener: L) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let name = listener.name().to_string();
        self.listeners.entry(event).or_default().push(Registration {
            id,
            name,
            listener: Box::new(listener),
        });
        id
    }

    /// Removes the registration named by `id` for `event`.
    ///
    /// Removes exactly one occurrence (ids are unique). Returns `true` if a
    /// registration was removed; an unknown or already-removed id is a no-op
    /// returning `false`.
    pub fn off(&mut self, event: EventName, id: ListenerId) -> bool {
        match self.listeners.get_mut(&event) {
            Some(regs) => {
                let before = regs.len();
                regs.retain(|r| r.id != id);
                regs.len() != before
            }
            None => false,
        }
    }

    /// Removes every listener registered for `event`.
    ///
    /// Returns how many registrations were dropped. Other events are untouched.
    pub fn clear(&mut self, event: EventName) -> usize {
        self.listeners.remove(&event).map_or(0, |regs| regs.len())
    }

    /// Synchronously invokes every listener registered for `event`, in
    /// registration order, passing `range` to each.
    ///
    /// Blocks until all listeners have run. With zero listeners this is an
    /// `Ok` no-op. If a listener fails, the error is wrapped in
    /// [`BusError::ListenerFailed`] and returned immediately; listeners
    /// registered after the failing one are **not** invoked for this call.
    pub fn emit(&mut self, event: EventName, range: HighlightRange) -> Result<(), BusError> {
        let Some(regs) = self.listeners.get_mut(&event) else {
            return Ok(());
        };
        for reg in regs.iter_mut() {
            reg.listener
                .on_event(event, range)
                .map_err(|source| BusError::ListenerFailed {
                    event,
                    listener: reg.name.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Number of listeners currently registered for `event`.
    #[must_use]
    pub fn listener_count(&self, event: EventName) -> usize {
        self.listeners.get(&event).map_or(0, |regs| regs.len())
    }

    /// True if no listener is registered for any event.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.values().all(|regs| regs.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::ListenerError;
    use crate::listeners::ListenFn;

    type Seen = Rc<RefCell<Vec<HighlightRange>>>;

    fn recorder(
        name: &'static str,
        seen: &Seen,
    ) -> ListenFn<impl FnMut(EventName, HighlightRange) -> Result<(), ListenerError> + 'static>
    {
        let sink = Rc::clone(seen);
        ListenFn::new(name, move |_event: EventName, range: HighlightRange| {
            sink.borrow_mut().push(range);
            Ok::<_, ListenerError>(())
        })
    }

    #[test]
    fn test_listener_invoked_exactly_once_with_payload() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        bus.on(EventName::FocusHighlight, recorder("rec", &seen));

        bus.emit(EventName::FocusHighlight, HighlightRange::new(10, 20))
            .unwrap();

        assert_eq!(seen.borrow().as_slice(), &[HighlightRange::new(10, 20)]);
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            bus.on(
                EventName::BlurHighlight,
                ListenFn::new(tag, move |_event, _range| {
                    sink.borrow_mut().push(tag);
                    Ok(())
                }),
            );
        }

        bus.emit(EventName::BlurHighlight, HighlightRange::new(5, 9))
            .unwrap();

        assert_eq!(order.borrow().as_slice(), &["first", "second", "third"]);
    }

    #[test]
    fn test_off_stops_invocation() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        let id = bus.on(EventName::FocusHighlight, recorder("rec", &seen));
        assert!(bus.off(EventName::FocusHighlight, id));

        bus.emit(EventName::FocusHighlight, HighlightRange::new(1, 2))
            .unwrap();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_off_stale_id_is_noop() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        let id = bus.on(EventName::FocusHighlight, recorder("rec", &seen));

        assert!(bus.off(EventName::FocusHighlight, id));
        assert!(!bus.off(EventName::FocusHighlight, id));
        // Id from one event does not remove registrations on another.
        let other = bus.on(EventName::BlurHighlight, recorder("rec", &seen));
        assert!(!bus.off(EventName::FocusHighlight, other));
    }

    #[test]
    fn test_emit_without_listeners_is_ok() {
        let mut bus = EventBus::new();
        assert!(bus
            .emit(EventName::BlurHighlight, HighlightRange::new(0, 0))
            .is_ok());
    }

    #[test]
    fn test_duplicate_registration_fires_per_registration() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        let first = bus.on(EventName::FocusHighlight, recorder("dup", &seen));
        let second = bus.on(EventName::FocusHighlight, recorder("dup", &seen));
        assert_ne!(first, second);

        bus.emit(EventName::FocusHighlight, HighlightRange::new(3, 4))
            .unwrap();
        assert_eq!(seen.borrow().len(), 2);

        // Removing one occurrence leaves the other registered.
        assert!(bus.off(EventName::FocusHighlight, first));
        bus.emit(EventName::FocusHighlight, HighlightRange::new(3, 4))
            .unwrap();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_emit_is_fail_fast() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        bus.on(EventName::FocusHighlight, recorder("before", &seen));
        bus.on(
            EventName::FocusHighlight,
            ListenFn::new("broken", |_event, _range| Err(ListenerError::fail("boom"))),
        );
        bus.on(EventName::FocusHighlight, recorder("after", &seen));

        let err = bus
            .emit(EventName::FocusHighlight, HighlightRange::new(7, 8))
            .unwrap_err();

        match err {
            BusError::ListenerFailed {
                event, listener, ..
            } => {
                assert_eq!(event, EventName::FocusHighlight);
                assert_eq!(listener, "broken");
            }
        }
        // The listener before the failure ran; the one after did not.
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_clear_drops_only_that_event() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        bus.on(EventName::FocusHighlight, recorder("a", &seen));
        bus.on(EventName::FocusHighlight, recorder("b", &seen));
        bus.on(EventName::BlurHighlight, recorder("c", &seen));

        assert_eq!(bus.clear(EventName::FocusHighlight), 2);
        assert_eq!(bus.listener_count(EventName::FocusHighlight), 0);
        assert_eq!(bus.listener_count(EventName::BlurHighlight), 1);
        assert_eq!(bus.clear(EventName::FocusHighlight), 0);
    }

    #[test]
    fn test_counts_and_is_empty() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        let seen: Seen = Rc::default();
        let id = bus.on(EventName::BlurHighlight, recorder("rec", &seen));
        assert!(!bus.is_empty());
        assert_eq!(bus.listener_count(EventName::BlurHighlight), 1);

        bus.off(EventName::BlurHighlight, id);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_listener_sees_event_name() {
        let mut bus = EventBus::new();
        let names = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&names);
        let shared = ListenFn::new("both", move |event: EventName, _range| {
            sink.borrow_mut().push(event);
            Ok(())
        });
        // One listener instance can only sit on one channel (the bus owns it),
        // so register a channel-aware closure per name.
        bus.on(EventName::FocusHighlight, shared);
        let sink = Rc::clone(&names);
        bus.on(
            EventName::BlurHighlight,
            ListenFn::new("both", move |event: EventName, _range| {
                sink.borrow_mut().push(event);
                Ok(())
            }),
        );

        bus.emit(EventName::FocusHighlight, HighlightRange::new(1, 1))
            .unwrap();
        bus.emit(EventName::BlurHighlight, HighlightRange::new(1, 1))
            .unwrap();

        assert_eq!(
            names.borrow().as_slice(),
            &[EventName::FocusHighlight, EventName::BlurHighlight]
        );
    }

    // Scenario from the application: focus [10, 20], then tear down, then blur order.
    #[test]
    fn test_focus_scenario_payload_roundtrip() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        bus.on(EventName::FocusHighlight, recorder("decorator", &seen));

        bus.emit(EventName::FocusHighlight, HighlightRange::new(10, 20))
            .unwrap();

        assert_eq!(seen.borrow().as_slice(), &[HighlightRange::new(10, 20)]);
    }

    #[test]
    fn test_teardown_scenario_off_then_emit() {
        let mut bus = EventBus::new();
        let seen: Seen = Rc::default();
        let id = bus.on(EventName::FocusHighlight, recorder("decorator", &seen));
        bus.off(EventName::FocusHighlight, id);

        bus.emit(EventName::FocusHighlight, HighlightRange::new(1, 2))
            .unwrap();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_blur_scenario_invocation_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["l1", "l2"] {
            let sink = Rc::clone(&order);
            bus.on(
                EventName::BlurHighlight,
                ListenFn::new(tag, move |_event, range: HighlightRange| {
                    sink.borrow_mut().push((tag, range));
                    Ok(())
                }),
            );
        }

        bus.emit(EventName::BlurHighlight, HighlightRange::new(5, 9))
            .unwrap();

        assert_eq!(
            order.borrow().as_slice(),
            &[
                ("l1", HighlightRange::new(5, 9)),
                ("l2", HighlightRange::new(5, 9)),
            ]
        );
    }
}
