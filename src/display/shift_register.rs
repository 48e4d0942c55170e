//! SN74HC595 shift-register driver.
//!
//! Two cascaded 8-bit registers drive the 16-LED bank. Patterns are
//! shifted out MSB-first over bit-banged SER/SRCLK and latched with
//! RCLK. Brightness rides on the active-low OE line: a PWM channel
//! holds OE low for a fraction of each period, so a *higher* duty cycle
//! means *dimmer* LEDs.
//!
//! Generic over `embedded-hal` pin and PWM traits so the driver is
//! HAL-agnostic and reusable across boards.

use crate::config::MAX_BRIGHTNESS;
use defmt::debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Driver state for one cascaded SN74HC595 pair.
pub struct Sn74hc595<SER, SRCLK, RCLK, SRCLR, OE> {
    ser: SER,
    srclk: SRCLK,
    rclk: RCLK,
    srclr: SRCLR,
    oe_pwm: OE,

    pattern: u16,
    brightness: u8,
    enabled: bool,
}

impl<SER, SRCLK, RCLK, SRCLR, OE> Sn74hc595<SER, SRCLK, RCLK, SRCLR, OE>
where
    SER: OutputPin,
    SRCLK: OutputPin,
    RCLK: OutputPin,
    SRCLR: OutputPin,
    OE: SetDutyCycle,
{
    /// Take ownership of the control lines and bring the register to a
    /// known state: outputs cleared, medium brightness.
    pub fn new(ser: SER, srclk: SRCLK, rclk: RCLK, srclr: SRCLR, oe_pwm: OE) -> Self {
        let mut sr = Self {
            ser,
            srclk,
            rclk,
            srclr,
            oe_pwm,
            pattern: 0,
            brightness: 5,
            enabled: true,
        };

        let _ = sr.ser.set_low();
        let _ = sr.srclk.set_low();
        let _ = sr.rclk.set_low();
        // SRCLR is active low - keep high for normal operation.
        let _ = sr.srclr.set_high();

        sr.set_brightness(sr.brightness);
        sr.clear();

        debug!("sn74hc595 ready, brightness {}", sr.brightness);
        sr
    }

    /// Shift out all 16 bits, MSB first, then latch them to the outputs.
    pub fn write(&mut self, pattern: u16) {
        for i in (0..16).rev() {
            if pattern & (1 << i) != 0 {
                let _ = self.ser.set_high();
            } else {
                let _ = self.ser.set_low();
            }
            self.pulse_clock();
        }
        self.pulse_latch();
        self.pattern = pattern;
    }

    /// Map a 0..=10 level onto the inverted OE duty cycle. Values above
    /// the maximum clamp.
    pub fn set_brightness(&mut self, level: u8) {
        let level = level.min(MAX_BRIGHTNESS);
        self.brightness = level;

        // OE active low: 0% duty = full brightness, 100% = dark.
        let duty = 100 - (level as u16 * 100 / MAX_BRIGHTNESS as u16);
        let _ = self.oe_pwm.set_duty_cycle_percent(duty as u8);
    }

    /// Apply a full frame: brightness first (takes effect immediately),
    /// then the pattern.
    pub fn update(&mut self, pattern: u16, brightness: u8) {
        self.set_brightness(brightness);
        self.write(pattern);
    }

    /// Hardware clear via the SRCLR line, latched to the outputs.
    pub fn clear(&mut self) {
        let _ = self.srclr.set_low();
        nop_delay();
        let _ = self.srclr.set_high();
        self.pulse_latch();
        self.pattern = 0;
    }

    /// Force all LEDs dark without losing the stored brightness.
    pub fn disable_output(&mut self) {
        let _ = self.oe_pwm.set_duty_cycle_percent(100);
        self.enabled = false;
    }

    /// Restore the previously set brightness.
    pub fn enable_output(&mut self) {
        self.set_brightness(self.brightness);
        self.enabled = true;
    }

    pub fn pattern(&self) -> u16 {
        self.pattern
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn pulse_clock(&mut self) {
        let _ = self.srclk.set_high();
        nop_delay();
        let _ = self.srclk.set_low();
    }

    fn pulse_latch(&mut self) {
        let _ = self.rclk.set_high();
        nop_delay();
        let _ = self.rclk.set_low();
    }
}

/// A couple of cycles of setup time for the 595 at 96 MHz core clock.
fn nop_delay() {
    cortex_m::asm::nop();
    cortex_m::asm::nop();
}
