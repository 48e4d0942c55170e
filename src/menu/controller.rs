//! Menu navigation state machine.
//!
//! The controller is the sole owner of the user settings and the current
//! page. It consumes classified button events and answers with at most
//! one display command per event; the caller forwards commands to the
//! display queue. No hardware access and no clock - host-testable.

use crate::config::{MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use crate::input::event::{ButtonEvent, ButtonId, PressKind};
use crate::menu::pages::{brightness_pattern, fill_pattern, DisplayCommand, Page};

/// Number of preset fill patterns (one per LED in the bank).
const PATTERN_COUNT: u8 = 16;

const DEFAULT_BRIGHTNESS: u8 = 5;
const DEFAULT_PATTERN_INDEX: u8 = 0;

/// Which mode the user last highlighted on the mode-select screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeSelection {
    Manual,
    Auto,
}

impl ModeSelection {
    fn toggled(self) -> Self {
        match self {
            ModeSelection::Manual => ModeSelection::Auto,
            ModeSelection::Auto => ModeSelection::Manual,
        }
    }

    fn page(self) -> Page {
        match self {
            ModeSelection::Manual => Page::ModeManual,
            ModeSelection::Auto => Page::ModeAuto,
        }
    }
}

/// Process-lifetime user settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuSettings {
    /// PWM brightness level, 0..=10.
    pub brightness: u8,
    /// Selected fill pattern, 0..=15.
    pub pattern_index: u8,
    /// Auto-cycling armed (set on entering Auto mode).
    pub is_auto_mode: bool,
    /// Logical power state; when off only the power-on gesture works.
    pub is_powered_on: bool,
    /// Highlighted entry on the mode-select screen.
    pub saved_mode: ModeSelection,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            pattern_index: DEFAULT_PATTERN_INDEX,
            is_auto_mode: false,
            is_powered_on: true,
            saved_mode: ModeSelection::Manual,
        }
    }
}

/// Hierarchical menu driven by classified button events.
pub struct MenuController {
    page: Page,
    /// Mirrors whatever the current page displays. Recomputed on every
    /// transition, never read back from hardware.
    pattern: u16,
    settings: MenuSettings,
}

impl MenuController {
    pub fn new() -> Self {
        Self {
            page: Page::Brightness,
            pattern: Page::Brightness.signature_pattern(),
            settings: MenuSettings::default(),
        }
    }

    /// First frame to push at boot, before any input arrives.
    pub fn startup_command(&self) -> DisplayCommand {
        self.command()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn pattern(&self) -> u16 {
        self.pattern
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    /// `true` while the auto-cycle timer should be running.
    pub fn auto_active(&self) -> bool {
        self.settings.is_auto_mode && self.page == Page::AutoMode
    }

    /// Consume one classified event. Returns the display command for the
    /// resulting state, or `None` when the event matches no rule.
    pub fn handle_event(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        if !self.settings.is_powered_on {
            return self.handle_powered_off(event);
        }

        match self.page {
            Page::Brightness | Page::ModeSelect | Page::Info | Page::Reset => {
                self.handle_main_menu(event)
            }
            Page::BrightnessSetting => self.handle_brightness_setting(event),
            Page::ModeManual | Page::ModeAuto => self.handle_mode_select(event),
            Page::ManualMode => self.handle_manual_mode(event),
            Page::AutoMode => self.handle_auto_mode(event),
            Page::FirmwareVersion => self.handle_info(event),
            Page::ResetConfirm => self.handle_reset_confirm(event),
        }
    }

    /// Advance the fill pattern while Auto mode is live. Called by the
    /// menu task every auto-cycle interval.
    pub fn auto_cycle(&mut self) -> Option<DisplayCommand> {
        if !self.auto_active() {
            return None;
        }
        self.settings.pattern_index = (self.settings.pattern_index + 1) % PATTERN_COUNT;
        self.pattern = fill_pattern(self.settings.pattern_index);
        Some(self.command())
    }

    fn command(&self) -> DisplayCommand {
        DisplayCommand {
            pattern: self.pattern,
            brightness: self.settings.brightness,
        }
    }

    /// Move to `page`, refresh the mirrored pattern, emit one command.
    fn goto(&mut self, page: Page) -> Option<DisplayCommand> {
        self.page = page;
        self.pattern = page.signature_pattern();
        Some(self.command())
    }

    /// Powered off: only a long press on the power button wakes us.
    fn handle_powered_off(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        if event.kind == PressKind::Long && event.button == ButtonId::Next {
            self.settings.is_powered_on = true;
            return self.goto(Page::Brightness);
        }
        None
    }

    fn handle_main_menu(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        match (event.kind, event.button) {
            (PressKind::Single, ButtonId::Next) => self.goto(self.page.main_menu_next()),
            (PressKind::Single, ButtonId::Back) => self.goto(self.page.main_menu_prev()),
            (PressKind::Single, ButtonId::Enter) => match self.page {
                Page::Brightness => self.enter_brightness_setting(),
                Page::ModeSelect => self.goto(self.settings.saved_mode.page()),
                Page::Info => self.goto(Page::FirmwareVersion),
                Page::Reset => self.goto(Page::ResetConfirm),
                _ => None,
            },
            (PressKind::Long, ButtonId::Back) => {
                self.settings.is_powered_on = false;
                Some(DisplayCommand::BLANK)
            }
            _ => None,
        }
    }

    fn enter_brightness_setting(&mut self) -> Option<DisplayCommand> {
        self.page = Page::BrightnessSetting;
        self.pattern = brightness_pattern(self.settings.brightness);
        Some(self.command())
    }

    fn handle_brightness_setting(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        if event.kind != PressKind::Single {
            return None;
        }
        match event.button {
            ButtonId::Next => self.adjust_brightness(1),
            ButtonId::Enter => self.adjust_brightness(-1),
            ButtonId::Back => self.goto(Page::Brightness),
        }
    }

    /// Step brightness, saturating at the bounds. Emits nothing when the
    /// level is already pinned - no change, no frame.
    fn adjust_brightness(&mut self, delta: i8) -> Option<DisplayCommand> {
        let level = self.settings.brightness;
        let stepped = level.saturating_add_signed(delta).clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
        if stepped == level {
            return None;
        }
        self.settings.brightness = stepped;
        self.pattern = brightness_pattern(stepped);
        Some(self.command())
    }

    fn handle_mode_select(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        if event.kind != PressKind::Single {
            return None;
        }
        match event.button {
            ButtonId::Next => {
                self.settings.saved_mode = self.settings.saved_mode.toggled();
                self.goto(self.settings.saved_mode.page())
            }
            ButtonId::Enter => {
                self.page = match self.settings.saved_mode {
                    ModeSelection::Manual => Page::ManualMode,
                    ModeSelection::Auto => {
                        self.settings.is_auto_mode = true;
                        Page::AutoMode
                    }
                };
                self.pattern = fill_pattern(self.settings.pattern_index);
                Some(self.command())
            }
            ButtonId::Back => self.goto(Page::ModeSelect),
        }
    }

    fn handle_manual_mode(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        if event.kind != PressKind::Single {
            return None;
        }
        match event.button {
            ButtonId::Next => {
                self.settings.pattern_index =
                    (self.settings.pattern_index + 1) % PATTERN_COUNT;
                self.pattern = fill_pattern(self.settings.pattern_index);
                Some(self.command())
            }
            // Save and cancel land on the same screen; they differ only
            // in intent (and in what the task logs).
            ButtonId::Enter | ButtonId::Back => self.goto(Page::ModeSelect),
        }
    }

    fn handle_auto_mode(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        if event.kind == PressKind::Single && event.button == ButtonId::Next {
            self.settings.is_auto_mode = false;
            return self.goto(Page::ModeManual);
        }
        None
    }

    fn handle_info(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        if event.kind != PressKind::Single {
            return None;
        }
        match event.button {
            // Reserved for future info sub-screens.
            ButtonId::Next => None,
            ButtonId::Back => self.goto(Page::Info),
            ButtonId::Enter => None,
        }
    }

    fn handle_reset_confirm(&mut self, event: &ButtonEvent) -> Option<DisplayCommand> {
        match (event.kind, event.button) {
            (PressKind::Double, ButtonId::Enter) => {
                // Restore defaults; the logical power state is not a
                // user setting and survives the reset.
                self.settings = MenuSettings {
                    is_powered_on: self.settings.is_powered_on,
                    ..MenuSettings::default()
                };
                self.goto(Page::Brightness)
            }
            (PressKind::Single, ButtonId::Back) => self.goto(Page::Reset),
            _ => None,
        }
    }
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new()
    }
}
