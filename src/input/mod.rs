//! Button input subsystem.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - BTN1 (next)  - advance / increase; long press powers on
//!   - BTN2 (enter) - confirm / enter sub-page
//!   - BTN3 (back)  - back / cancel; long press powers off
//!
//! A single sampler task polls all pins at a fixed cadence and runs one
//! `ButtonClassifier` per button. Classified events go to the menu task
//! through a bounded channel; when the channel is full the event is
//! dropped (best-effort, no backpressure on the sampler).

pub mod classifier;
pub mod event;

use crate::config::{EVENT_QUEUE_DEPTH, SAMPLE_PERIOD_MS};
use crate::input::classifier::ButtonClassifier;
use crate::input::event::{ButtonEvent, ButtonId, Level};
use defmt::{info, warn};
use embassy_stm32::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Ticker};

/// The three button inputs, already configured with pull-ups.
pub struct ButtonPins {
    pub next: Input<'static>,
    pub enter: Input<'static>,
    pub back: Input<'static>,
}

fn read_level(pin: &Input<'static>) -> Level {
    if pin.is_low() {
        Level::Low
    } else {
        Level::High
    }
}

/// Poll every button at the sampling cadence and classify presses.
#[embassy_executor::task]
pub async fn sampler_task(
    pins: ButtonPins,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH>,
) -> ! {
    let now = Instant::now().as_millis();
    let mut buttons = [
        (pins.next, ButtonId::Next),
        (pins.enter, ButtonId::Enter),
        (pins.back, ButtonId::Back),
    ]
    .map(|(pin, id)| {
        let level = read_level(&pin);
        (pin, ButtonClassifier::new(id, level, now))
    });

    info!("sampler started, period {} ms", SAMPLE_PERIOD_MS);

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));
    loop {
        ticker.next().await;
        let now = Instant::now().as_millis();

        for (pin, classifier) in buttons.iter_mut() {
            if let Some(ev) = classifier.sample(read_level(pin), now) {
                info!("button {} -> {}", ev.button, ev.kind);
                if tx.try_send(ev).is_err() {
                    warn!("event queue full, dropping {}", ev);
                }
            }
        }
    }
}
