//! Classified button event types shared between the sampler and the menu.

/// Logical level of a button input.
///
/// The board wires all buttons active-low (internal pull-up), so
/// `Low` means pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// `true` if this level means the button is held down.
    pub fn is_pressed(self) -> bool {
        self == Level::Low
    }
}

/// Physical button identity, named for its main-menu role.
///
/// The classifier is agnostic to the role; only the menu's transition
/// table gives the ids meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// BTN1 - advance / increase. Long press powers the unit back on.
    Next,
    /// BTN2 - enter / confirm.
    Enter,
    /// BTN3 - back / cancel. Long press powers the unit off.
    Back,
}

/// How a press burst resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Press and release, no follow-up within the click window.
    Single,
    /// Two presses within the double-click window.
    Double,
    /// Three presses within the triple-click window.
    Triple,
    /// Held longer than the long-press threshold.
    Long,
}

/// A classified button event. Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: ButtonId,
    pub kind: PressKind,
    /// Monotonic timestamp of the sample that resolved the burst (ms).
    pub at_ms: u64,
}
