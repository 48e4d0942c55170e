//! Per-button press classifier.
//!
//! Each physical button owns one `ButtonClassifier`. The sampler task
//! feeds it the raw pin level at a fixed cadence; the classifier
//! debounces the level, tracks press bursts, and emits at most one
//! classified event per sample:
//!
//!   - `Single` / `Double` / `Triple` - resolved after the burst's click
//!     window closes (triple resolves immediately on the third release)
//!   - `Long` - fired once while the button is still held
//!
//! All timing decisions use the caller-supplied monotonic timestamp, so
//! the classifier is a pure state machine and fully host-testable.

use crate::config::{
    DEBOUNCE_MS, DOUBLE_IDLE_MS, DOUBLE_WINDOW_MS, LONG_PRESS_MS, SINGLE_IDLE_MS,
    SINGLE_WINDOW_MS, TRIPLE_WINDOW_MS,
};
use crate::input::event::{ButtonEvent, ButtonId, Level, PressKind};

/// Debounce and multi-click state for one button.
pub struct ButtonClassifier {
    id: ButtonId,

    /// Raw level seen on the previous sample.
    raw_level: Level,
    /// Level after debouncing; all burst logic keys off this.
    debounced_level: Level,
    /// Timestamp of the last raw-level change (ms).
    debounce_start_ms: u64,

    /// Clicks accumulated in the current burst, 0..=3.
    click_count: u8,
    /// When the first press of the burst landed (ms).
    first_click_ms: u64,
    /// Timestamp of the most recent accepted edge (ms). While pressed
    /// this is the hold start; while released it marks burst idle time.
    last_edge_ms: u64,
    /// Set once a long press has fired for the current hold.
    long_press_sent: bool,
}

impl ButtonClassifier {
    /// Create a classifier from the pin's level at startup.
    pub fn new(id: ButtonId, initial_level: Level, now_ms: u64) -> Self {
        Self {
            id,
            raw_level: initial_level,
            debounced_level: initial_level,
            debounce_start_ms: now_ms,
            click_count: 0,
            first_click_ms: 0,
            last_edge_ms: now_ms,
            long_press_sent: false,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Current level after debouncing.
    pub fn debounced_level(&self) -> Level {
        self.debounced_level
    }

    /// Feed one raw sample. Returns a classified event when a burst
    /// resolves or a long press fires.
    pub fn sample(&mut self, raw: Level, now_ms: u64) -> Option<ButtonEvent> {
        // Any raw movement restarts the stability window.
        if raw != self.raw_level {
            self.raw_level = raw;
            self.debounce_start_ms = now_ms;
        }

        // Accept a pending level only once it has held still long enough.
        if raw != self.debounced_level
            && now_ms.wrapping_sub(self.debounce_start_ms) > DEBOUNCE_MS
        {
            self.debounced_level = raw;
            self.on_edge(raw, now_ms);
        }

        if self.debounced_level.is_pressed() {
            self.check_long_press(now_ms)
        } else {
            self.resolve_burst(now_ms)
        }
    }

    fn on_edge(&mut self, level: Level, now_ms: u64) {
        if level.is_pressed() {
            // Falling edge - a new click joins the burst.
            if self.click_count == 0 {
                self.first_click_ms = now_ms;
            }
            self.click_count += 1;
            self.last_edge_ms = now_ms;
            self.long_press_sent = false;
        } else {
            // Rising edge - a long-held press never counts as a click.
            if self.long_press_sent {
                self.click_count = 0;
            }
            self.last_edge_ms = now_ms;
        }
    }

    /// While held: fire `Long` once the hold exceeds the threshold.
    fn check_long_press(&mut self, now_ms: u64) -> Option<ButtonEvent> {
        if self.long_press_sent {
            return None;
        }
        if now_ms.wrapping_sub(self.last_edge_ms) > LONG_PRESS_MS {
            self.long_press_sent = true;
            // click_count stays as-is; the release edge clears it so the
            // hold is excluded from click counting.
            return Some(ButtonEvent {
                button: self.id,
                kind: PressKind::Long,
                at_ms: now_ms,
            });
        }
        None
    }

    /// While released with clicks pending: decide whether the burst is
    /// over and what it was.
    ///
    /// Two exit conditions per count: the `total` ceiling guarantees
    /// resolution relative to burst start, while the `idle` exit lets a
    /// burst resolve early once the follow-up window has clearly closed.
    fn resolve_burst(&mut self, now_ms: u64) -> Option<ButtonEvent> {
        if self.click_count == 0 {
            return None;
        }

        let total = now_ms.wrapping_sub(self.first_click_ms);
        let idle = now_ms.wrapping_sub(self.last_edge_ms);

        match self.click_count {
            // Triple resolves on the third release, no waiting.
            3.. => self.emit(PressKind::Triple, now_ms),
            2 if total > TRIPLE_WINDOW_MS || idle > DOUBLE_IDLE_MS => {
                self.emit(PressKind::Double, now_ms)
            }
            1 if total > DOUBLE_WINDOW_MS || idle > SINGLE_IDLE_MS => {
                self.emit(PressKind::Single, now_ms)
            }
            _ => None,
        }
    }

    fn emit(&mut self, kind: PressKind, now_ms: u64) -> Option<ButtonEvent> {
        self.click_count = 0;
        Some(ButtonEvent {
            button: self.id,
            kind,
            at_ms: now_ms,
        })
    }
}

// Window sanity: the idle exits are derived from adjacent window gaps
// (double: 500-300, single: the single window itself). Keep the literal
// values in config.rs authoritative.
const _: () = assert!(SINGLE_WINDOW_MS <= DOUBLE_WINDOW_MS);
const _: () = assert!(DOUBLE_WINDOW_MS <= TRIPLE_WINDOW_MS);
const _: () = assert!(TRIPLE_WINDOW_MS < LONG_PRESS_MS);
