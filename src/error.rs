//! Unified error type for ledmenu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! The pure core (classifier, menu controller) signals "nothing to do"
//! with `Option`; this type only covers the embedded I/O paths, none of
//! which are fatal - a failed display update is logged and superseded by
//! the next command.

use defmt::Format;

/// Top-level error type used across the firmware tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// The shift-register mutex could not be acquired within budget.
    DisplayBusy,

    /// A bounded queue was full; the item was dropped (best-effort).
    QueueFull,

    /// Pushing a display command exceeded its send budget.
    Timeout,
}
