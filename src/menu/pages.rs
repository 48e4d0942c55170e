//! Menu pages and their LED feedback patterns.
//!
//! While navigating, the 16-LED bank doubles as the display: each page
//! lights a fixed signature pattern so the user can tell where they are.
//! Three pages compute their pattern instead:
//!
//!   - `BrightnessSetting` shows a bar graph of the current level
//!   - `ManualMode` / `AutoMode` show the selected fill pattern

use crate::config::{BRIGHTNESS_MASK, FIRMWARE_MAJOR, FIRMWARE_MINOR, LED_COUNT, MAX_BRIGHTNESS};

/// Version word shown on the firmware page: `(major << 8) | (minor & 0x1F)`.
pub const FIRMWARE_PATTERN: u16 = (FIRMWARE_MAJOR << 8) | (FIRMWARE_MINOR & 0x1F);

/// Every screen the menu can be on.
///
/// The first four variants form the main menu ring; the rest are
/// sub-pages reached through `Enter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    Brightness,
    ModeSelect,
    Info,
    Reset,
    ModeManual,
    ModeAuto,
    BrightnessSetting,
    ManualMode,
    AutoMode,
    FirmwareVersion,
    ResetConfirm,
}

impl Page {
    /// Fixed signature pattern shown while navigating to this page.
    ///
    /// `BrightnessSetting`, `ManualMode` and `AutoMode` recompute their
    /// pattern from settings on entry; the values here are only the
    /// static fallbacks (the brightness mask and the full bank).
    pub fn signature_pattern(self) -> u16 {
        match self {
            Page::Brightness => 0x1000,
            Page::ModeSelect => 0x2000,
            Page::Info => 0x4000,
            Page::Reset => 0x8000,
            Page::ModeManual => 0x200F,
            Page::ModeAuto => 0x20F0,
            Page::BrightnessSetting => BRIGHTNESS_MASK,
            Page::ManualMode => 0xFFFF,
            Page::AutoMode => 0xFFFF,
            Page::FirmwareVersion => FIRMWARE_PATTERN,
            Page::ResetConfirm => 0x80FF,
        }
    }

    /// `true` for the four pages forming the main menu ring.
    pub fn is_main_menu(self) -> bool {
        matches!(
            self,
            Page::Brightness | Page::ModeSelect | Page::Info | Page::Reset
        )
    }

    /// Next page in the main menu ring, wrapping after `Reset`.
    pub fn main_menu_next(self) -> Page {
        match self {
            Page::Brightness => Page::ModeSelect,
            Page::ModeSelect => Page::Info,
            Page::Info => Page::Reset,
            _ => Page::Brightness,
        }
    }

    /// Previous page in the main menu ring, wrapping before `Brightness`.
    pub fn main_menu_prev(self) -> Page {
        match self {
            Page::Reset => Page::Info,
            Page::Info => Page::ModeSelect,
            Page::ModeSelect => Page::Brightness,
            _ => Page::Reset,
        }
    }
}

/// Preset fill pattern `index` (0..16): the low `index + 1` bits set.
/// Index 0 lights one LED, index 15 the whole bank.
pub fn fill_pattern(index: u8) -> u16 {
    let bits = (index as u32 + 1).min(LED_COUNT as u32);
    (((1u32 << bits) - 1) & 0xFFFF) as u16
}

/// Bar-graph pattern for a brightness level (0..=10).
///
/// Independent of the PWM dimming itself - this is only the visual
/// feedback shown while adjusting.
pub fn brightness_pattern(level: u8) -> u16 {
    if level == 0 {
        return 0;
    }
    let bits = level.min(MAX_BRIGHTNESS);
    (((1u32 << bits) - 1) as u16) & BRIGHTNESS_MASK
}

/// One `(pattern, brightness)` frame for the shift-register display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayCommand {
    /// LED bitmask, bit 0 = first LED of the bank.
    pub pattern: u16,
    /// PWM brightness level, 0 (off) ..= 10 (full).
    pub brightness: u8,
}

impl DisplayCommand {
    /// All LEDs dark - sent when powering off.
    pub const BLANK: DisplayCommand = DisplayCommand {
        pattern: 0,
        brightness: 0,
    };
}
