//! Test-only library interface for ledmenu.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test` (default features, host target)
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! behind the `embedded` feature. This lib.rs provides a separate entry
//! point for host-based testing; it pulls in only the modules with no
//! HAL dependencies, laid out under the same `crate::` paths the binary
//! uses so the source files compile unchanged in both.

#![cfg_attr(not(test), no_std)]

pub mod config;

pub mod input {
    #[path = "classifier.rs"]
    pub mod classifier;
    #[path = "event.rs"]
    pub mod event;

    pub use self::classifier::ButtonClassifier;
    pub use self::event::{ButtonEvent, ButtonId, Level, PressKind};
}

pub mod menu {
    #[path = "auto_cycle.rs"]
    pub mod auto_cycle;
    #[path = "controller.rs"]
    pub mod controller;
    #[path = "pages.rs"]
    pub mod pages;

    pub use self::auto_cycle::auto_cycle_due;
    pub use self::controller::{MenuController, MenuSettings, ModeSelection};
    pub use self::pages::{brightness_pattern, fill_pattern, DisplayCommand, Page};
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
