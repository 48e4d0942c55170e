//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Button classification

/// Stability window a raw level must hold before it is accepted as the
/// new debounced level (ms). An earlier board revision shipped with 10 ms;
/// 30 ms proved necessary for the cheaper tactile switches.
pub const DEBOUNCE_MS: u64 = 30;

/// A lone click resolves once the burst has been idle this long (ms).
pub const SINGLE_WINDOW_MS: u64 = 300;

/// Ceiling for a second click to join the burst (ms since burst start).
pub const DOUBLE_WINDOW_MS: u64 = 500;

/// Ceiling for a third click to join the burst (ms since burst start).
pub const TRIPLE_WINDOW_MS: u64 = 700;

/// Hold time before a press is reported as a long press (ms).
pub const LONG_PRESS_MS: u64 = 1500;

/// Idle time after which a two-click burst stops waiting for a third (ms).
pub const DOUBLE_IDLE_MS: u64 = 200;

/// Idle time after which a one-click burst stops waiting for a second (ms).
pub const SINGLE_IDLE_MS: u64 = 300;

// Task cadences

/// Button sampling period (ms).
pub const SAMPLE_PERIOD_MS: u64 = 5;

/// Maximum time the menu task blocks waiting for a button event before
/// servicing the auto-cycle timer (ms).
pub const MENU_EVENT_WAIT_MS: u64 = 100;

/// Interval between automatic pattern advances in Auto mode (ms).
pub const AUTO_CYCLE_MS: u64 = 2000;

/// Budget for pushing an event-derived display command (ms). The startup
/// command is pushed with zero wait so init never blocks.
pub const DISPLAY_SEND_BUDGET_MS: u64 = 20;

/// Budget for acquiring the shift-register hardware mutex (ms).
pub const DISPLAY_MUTEX_TIMEOUT_MS: u64 = 100;

// Channels

/// Capacity of the classified-button-event queue.
pub const EVENT_QUEUE_DEPTH: usize = 16;

/// Capacity of the display-command queue.
pub const DISPLAY_QUEUE_DEPTH: usize = 16;

// Display / brightness

/// Number of LEDs in the bank (two cascaded 8-bit shift registers).
pub const LED_COUNT: usize = 16;

/// Brightness range presented to the user.
pub const MAX_BRIGHTNESS: u8 = 10;
pub const MIN_BRIGHTNESS: u8 = 0;

/// Mask limiting the brightness bar-graph feedback to the low 10 LEDs.
pub const BRIGHTNESS_MASK: u16 = 0x03FF;

// Firmware identity

/// Firmware version, shown on the Info page as `(major << 8) | (minor & 0x1F)`.
pub const FIRMWARE_MAJOR: u16 = 10;
pub const FIRMWARE_MINOR: u16 = 5;

// GPIO pin assignments (Nucleo-F411RE defaults)
//
// These are logical names; the concrete `embassy_stm32::peripherals::*`
// types are selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button 1 (next)   → PA0
//   Button 2 (enter)  → PA1
//   Button 3 (back)   → PA4
//   595 SER (data)    → PB3
//   595 SRCLK         → PB4
//   595 RCLK (latch)  → PB5
//   595 SRCLR         → PB6
//   595 OE (PWM dim)  → PA8 (TIM1 CH1)
