//! # Simple logging listener for debugging and demos.
//!
//! [`LogWriter`] prints highlight transitions to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [focus] start=10 end=20
//! [blur] start=10 end=20
//! ```

use crate::error::ListenerError;
use crate::events::{EventName, HighlightRange};
use crate::listeners::listen::Listen;

/// Simple stdout logging listener.
///
/// Enabled via the `logging` feature. Prints human-readable transition lines
/// to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Listen`] for
/// structured logging or metrics collection.
pub struct LogWriter;

impl Listen for LogWriter {
    fn on_event(&mut self, event: EventName, range: HighlightRange) -> Result<(), ListenerError> {
        match event {
            EventName::FocusHighlight => {
                println!("[focus] start={} end={}", range.start, range.end);
            }
            EventName::BlurHighlight => {
                println!("[blur] start={} end={}", range.start, range.end);
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}
