//! Integration tests for ledmenu host-testable logic.
//!
//! Drives raw pin-level timelines through the classifiers and feeds the
//! classified events straight into the menu controller, checking the
//! display commands that come out the other end - the same pipeline the
//! firmware tasks run, minus the channels and the clock.

use ledmenu::config::SAMPLE_PERIOD_MS;
use ledmenu::input::{ButtonClassifier, ButtonId, Level};
use ledmenu::menu::{brightness_pattern, fill_pattern, DisplayCommand, MenuController, Page};

/// A press interval on one button: pressed at `from_ms`, released at
/// `to_ms` (exclusive).
struct Press {
    button: ButtonId,
    from_ms: u64,
    to_ms: u64,
}

fn press(button: ButtonId, from_ms: u64, to_ms: u64) -> Press {
    Press {
        button,
        from_ms,
        to_ms,
    }
}

struct Rig {
    classifiers: [ButtonClassifier; 3],
    menu: MenuController,
    commands: heapless::Vec<DisplayCommand, 32>,
    now_ms: u64,
}

impl Rig {
    fn new() -> Self {
        let classifiers = [ButtonId::Next, ButtonId::Enter, ButtonId::Back]
            .map(|id| ButtonClassifier::new(id, Level::High, 0));
        let menu = MenuController::new();
        let mut commands = heapless::Vec::new();
        commands.push(menu.startup_command()).unwrap();
        Self {
            classifiers,
            menu,
            commands,
            now_ms: 0,
        }
    }

    /// Sample all buttons at the firmware cadence until `until_ms`,
    /// synthesising levels from the press schedule. The clock carries
    /// over between calls.
    fn run(&mut self, presses: &[Press], until_ms: u64) {
        let mut t = self.now_ms;
        while t < until_ms {
            for classifier in self.classifiers.iter_mut() {
                let held = presses.iter().any(|p| {
                    p.button == classifier.id() && p.from_ms <= t && t < p.to_ms
                });
                let level = if held { Level::Low } else { Level::High };
                if let Some(ev) = classifier.sample(level, t) {
                    if let Some(cmd) = self.menu.handle_event(&ev) {
                        self.commands.push(cmd).unwrap();
                    }
                }
            }
            t += SAMPLE_PERIOD_MS;
        }
        self.now_ms = t;
    }
}

#[test]
fn single_press_enters_brightness_setting() {
    let mut rig = Rig::new();
    rig.run(&[press(ButtonId::Enter, 0, 100)], 1000);

    assert_eq!(rig.menu.page(), Page::BrightnessSetting);
    assert_eq!(
        rig.commands.as_slice(),
        [
            DisplayCommand {
                pattern: 0x1000,
                brightness: 5
            },
            DisplayCommand {
                pattern: brightness_pattern(5),
                brightness: 5
            },
        ]
    );
}

#[test]
fn navigation_commands_arrive_in_order() {
    let mut rig = Rig::new();
    // Three well-separated single presses on Next walk the main menu.
    rig.run(
        &[
            press(ButtonId::Next, 0, 100),
            press(ButtonId::Next, 1000, 1100),
            press(ButtonId::Next, 2000, 2100),
        ],
        3000,
    );

    assert_eq!(rig.menu.page(), Page::Reset);
    let patterns: Vec<u16> = rig.commands.iter().map(|c| c.pattern).collect();
    assert_eq!(patterns, [0x1000, 0x2000, 0x4000, 0x8000]);
}

#[test]
fn reset_flow_with_double_press_confirm() {
    let mut rig = Rig::new();
    rig.run(
        &[
            // Adjust brightness to 6 first: enter, up, back.
            press(ButtonId::Enter, 0, 100),
            press(ButtonId::Next, 1000, 1100),
            press(ButtonId::Back, 2000, 2100),
            // Wrap back to the Reset page and open the confirm screen.
            press(ButtonId::Back, 3000, 3100),
            press(ButtonId::Enter, 4000, 4100),
            // Double press on confirm.
            press(ButtonId::Enter, 5000, 5100),
            press(ButtonId::Enter, 5150, 5250),
        ],
        6500,
    );

    assert_eq!(rig.menu.page(), Page::Brightness);
    assert_eq!(rig.menu.settings().brightness, 5);
    assert_eq!(rig.menu.settings().pattern_index, 0);
    assert!(!rig.menu.settings().is_auto_mode);
}

#[test]
fn long_press_powers_off_then_back_on() {
    let mut rig = Rig::new();
    rig.run(
        &[
            // Hold Back past the long-press threshold.
            press(ButtonId::Back, 0, 1700),
            // Powered off: this single press must be ignored.
            press(ButtonId::Enter, 3000, 3100),
            // Hold Next to power back on.
            press(ButtonId::Next, 5000, 6700),
        ],
        8000,
    );

    assert!(rig.menu.settings().is_powered_on);
    assert_eq!(rig.menu.page(), Page::Brightness);

    let last = *rig.commands.last().unwrap();
    assert_eq!(last.pattern, 0x1000);
    // The blank frame came right before it; nothing in between.
    let n = rig.commands.len();
    assert_eq!(rig.commands[n - 2], DisplayCommand::BLANK);
}

#[test]
fn auto_mode_entry_and_cycling() {
    let mut rig = Rig::new();
    rig.run(
        &[
            press(ButtonId::Next, 0, 100), // → ModeSelect
            press(ButtonId::Enter, 1000, 1100), // → ModeManual
            press(ButtonId::Next, 2000, 2100), // highlight Auto
            press(ButtonId::Enter, 3000, 3100), // → AutoMode
        ],
        4000,
    );

    assert_eq!(rig.menu.page(), Page::AutoMode);
    assert!(rig.menu.auto_active());
    assert_eq!(rig.commands.last().unwrap().pattern, fill_pattern(0));

    // The timer task would now invoke the cycler every interval.
    let cmd = rig.menu.auto_cycle().unwrap();
    assert_eq!(cmd.pattern, fill_pattern(1));
    let cmd = rig.menu.auto_cycle().unwrap();
    assert_eq!(cmd.pattern, fill_pattern(2));

    // Leaving Auto mode stops the cycler.
    rig.run(&[press(ButtonId::Next, 10_000, 10_100)], 11_000);
    assert_eq!(rig.menu.page(), Page::ModeManual);
    assert!(rig.menu.auto_cycle().is_none());
}

#[test]
fn triple_press_is_ignored_by_main_menu() {
    let mut rig = Rig::new();
    rig.run(
        &[
            press(ButtonId::Next, 0, 80),
            press(ButtonId::Next, 120, 200),
            press(ButtonId::Next, 240, 320),
        ],
        1500,
    );

    // One triple event, no rule for it: still on the first page, only
    // the startup frame emitted.
    assert_eq!(rig.menu.page(), Page::Brightness);
    assert_eq!(rig.commands.len(), 1);
}
