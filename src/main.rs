//! ledmenu firmware entry point (STM32F411).
//!
//! Wires up the three concurrent units and the two bounded channels:
//!
//!   buttons → sampler task → event channel → menu task
//!                                              ↓
//!                       shift register ← display task ← command channel
//!
//! All decision logic lives in the library modules; this file only
//! creates the tasks and hands out the hardware.

#![no_std]
#![no_main]

mod config;
mod display;
mod error;
mod input;
mod menu;

use defmt::{info, unwrap};
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level as PinLevel, Output, OutputType, Pull, Speed};
use embassy_stm32::time::khz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use static_cell::StaticCell;

use crate::config::{DISPLAY_QUEUE_DEPTH, EVENT_QUEUE_DEPTH};
use crate::display::shift_register::Sn74hc595;
use crate::display::ShiftRegisterMutex;
use crate::input::event::ButtonEvent;
use crate::input::ButtonPins;
use crate::menu::pages::DisplayCommand;

/// Classified button events, sampler → menu.
static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH> =
    Channel::new();

/// Display frames, menu → display manager.
static DISPLAY_CHANNEL: Channel<CriticalSectionRawMutex, DisplayCommand, DISPLAY_QUEUE_DEPTH> =
    Channel::new();

static SHIFT_REGISTER: StaticCell<ShiftRegisterMutex> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("ledmenu starting");

    let buttons = ButtonPins {
        next: Input::new(p.PA0, Pull::Up),
        enter: Input::new(p.PA1, Pull::Up),
        back: Input::new(p.PA4, Pull::Up),
    };

    // OE dimming PWM: 1 kHz on TIM1 CH1.
    let oe_pin = PwmPin::new_ch1(p.PA8, OutputType::PushPull);
    let pwm = SimplePwm::new(p.TIM1, Some(oe_pin), None, None, None, khz(1), Default::default());
    let mut oe_channel = pwm.split().ch1;
    oe_channel.enable();

    let shift_register = Sn74hc595::new(
        Output::new(p.PB3, PinLevel::Low, Speed::VeryHigh),
        Output::new(p.PB4, PinLevel::Low, Speed::VeryHigh),
        Output::new(p.PB5, PinLevel::Low, Speed::VeryHigh),
        Output::new(p.PB6, PinLevel::High, Speed::VeryHigh),
        oe_channel,
    );
    let hardware = SHIFT_REGISTER.init(Mutex::new(shift_register));

    unwrap!(spawner.spawn(input::sampler_task(buttons, EVENT_CHANNEL.sender())));
    unwrap!(spawner.spawn(menu::menu_task(
        EVENT_CHANNEL.receiver(),
        DISPLAY_CHANNEL.sender()
    )));
    unwrap!(spawner.spawn(display::display_task(
        DISPLAY_CHANNEL.receiver(),
        hardware
    )));

    // Heartbeat on the user LED (Nucleo LD2).
    let mut led = Output::new(p.PA5, PinLevel::Low, Speed::Low);
    loop {
        led.toggle();
        Timer::after_secs(1).await;
    }
}
