//! # Highlight events emitted over the bus.
//!
//! [`EventName`] is the closed set of event channels; [`HighlightRange`] is the
//! payload every channel carries. The pairing is fixed at the type level:
//! [`EventBus::emit`](crate::EventBus::emit) only accepts a `HighlightRange`,
//! so attaching a different payload shape to a name is a compile error, not a
//! runtime one.
//!
//! ## Example
//! ```rust
//! use rangebus::{EventName, HighlightRange};
//!
//! let range = HighlightRange::new(10, 20);
//! assert_eq!(range.start, 10);
//! assert_eq!(range.end, 20);
//! assert_eq!(EventName::FocusHighlight.as_label(), "focusHighlight");
//! ```

use std::fmt;

/// Classification of highlight events.
///
/// The set is closed: adding a channel is a source-level change, which is what
/// makes "unknown event name" unrepresentable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// A range gained focus (e.g. the user selected an explanation for it).
    FocusHighlight,
    /// A range lost focus.
    BlurHighlight,
}

impl EventName {
    /// Returns the stable wire name of the event, as used by the application
    /// protocol (`"focusHighlight"` / `"blurHighlight"`).
    pub fn as_label(&self) -> &'static str {
        match self {
            EventName::FocusHighlight => "focusHighlight",
            EventName::BlurHighlight => "blurHighlight",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// The span of lines affected by a focus/blur transition.
///
/// Plain payload: no ordering invariant between `start` and `end` is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    /// First line offset of the span.
    pub start: u32,
    /// Last line offset of the span.
    pub end: u32,
}

impl HighlightRange {
    /// Creates a new range payload.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl From<(u32, u32)> for HighlightRange {
    /// Converts the original tuple payload form into a range.
    fn from((start, end): (u32, u32)) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for HighlightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
