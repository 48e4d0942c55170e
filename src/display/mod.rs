//! Display subsystem - applies menu commands to the LED bank.
//!
//! The display task is the sole consumer of the command channel and
//! delivers commands strictly in order. The shift register + PWM timer
//! is the one resource in the system needing a lock; acquisition is
//! bounded so a wedged hardware access can never stall the pipeline -
//! the frame is dropped, logged, and the next command repaints from
//! full current state.

pub mod shift_register;

use crate::config::{DISPLAY_MUTEX_TIMEOUT_MS, DISPLAY_QUEUE_DEPTH, MAX_BRIGHTNESS};
use crate::error::Error;
use crate::menu::pages::DisplayCommand;
use defmt::{debug, error};
use embassy_stm32::gpio::Output;
use embassy_stm32::peripherals::TIM1;
use embassy_stm32::timer::simple_pwm::SimplePwmChannel;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Receiver;
use embassy_sync::mutex::Mutex;
use embassy_time::{with_timeout, Duration};
use crate::display::shift_register::Sn74hc595;

/// The board's concrete shift-register driver: four GPIO control lines
/// plus TIM1 CH1 on the OE pin.
pub type BoardShiftRegister = Sn74hc595<
    Output<'static>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
    SimplePwmChannel<'static, TIM1>,
>;

/// Mutex guarding the shift-register hardware.
pub type ShiftRegisterMutex = Mutex<CriticalSectionRawMutex, BoardShiftRegister>;

/// Drain the command channel onto the hardware.
#[embassy_executor::task]
pub async fn display_task(
    rx: Receiver<'static, CriticalSectionRawMutex, DisplayCommand, DISPLAY_QUEUE_DEPTH>,
    hardware: &'static ShiftRegisterMutex,
) -> ! {
    loop {
        let cmd = rx.receive().await;
        match apply(hardware, cmd).await {
            Ok(()) => debug!("applied {}", cmd),
            Err(e) => error!("display update failed: {}, dropping {}", e, cmd),
        }
    }
}

/// Apply one command under the hardware lock, within the mutex budget.
async fn apply(hardware: &'static ShiftRegisterMutex, cmd: DisplayCommand) -> Result<(), Error> {
    let budget = Duration::from_millis(DISPLAY_MUTEX_TIMEOUT_MS);
    let mut sr = with_timeout(budget, hardware.lock())
        .await
        .map_err(|_| Error::DisplayBusy)?;

    // Out-of-range brightness is clamped, never rejected.
    sr.update(cmd.pattern, cmd.brightness.min(MAX_BRIGHTNESS));
    Ok(())
}
