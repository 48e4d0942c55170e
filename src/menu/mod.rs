//! Menu subsystem - consumes button events, produces display commands.
//!
//! The menu task is the only writer of the controller state, so the
//! state itself needs no locking. The task alternates between waiting
//! (bounded) for a button event and servicing the auto-cycle timer, so
//! Auto mode keeps animating with no button activity.

pub mod auto_cycle;
pub mod controller;
pub mod pages;

use crate::config::{AUTO_CYCLE_MS, DISPLAY_QUEUE_DEPTH, DISPLAY_SEND_BUDGET_MS, EVENT_QUEUE_DEPTH, MENU_EVENT_WAIT_MS};
use crate::input::event::ButtonEvent;
use crate::menu::auto_cycle::auto_cycle_due;
use crate::menu::controller::MenuController;
use crate::menu::pages::DisplayCommand;
use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_time::{with_timeout, Duration, Instant, Timer};

type CommandSender =
    Sender<'static, CriticalSectionRawMutex, DisplayCommand, DISPLAY_QUEUE_DEPTH>;

/// Run the menu state machine.
#[embassy_executor::task]
pub async fn menu_task(
    rx: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, EVENT_QUEUE_DEPTH>,
    tx: CommandSender,
) -> ! {
    let mut menu = MenuController::new();

    // Startup frame goes out with zero wait - init must not block.
    if tx.try_send(menu.startup_command()).is_err() {
        warn!("display queue full at startup");
    }
    info!("menu ready on {}", menu.page());

    // Reference instant for the auto-cycle cadence. Reset while auto
    // mode is inactive so re-entry waits one full interval.
    let mut cycle_ref = Instant::now();

    loop {
        let wake = select(
            rx.receive(),
            Timer::after(Duration::from_millis(MENU_EVENT_WAIT_MS)),
        )
        .await;

        if let Either::First(event) = wake {
            info!("{} {} at {} ms", event.button, event.kind, event.at_ms);
            if let Some(cmd) = menu.handle_event(&event) {
                send_command(&tx, cmd).await;
            }
        }

        if !menu.auto_active() {
            cycle_ref = Instant::now();
        } else if auto_cycle_due(true, cycle_ref.elapsed().as_millis(), AUTO_CYCLE_MS) {
            cycle_ref = Instant::now();
            if let Some(cmd) = menu.auto_cycle() {
                send_command(&tx, cmd).await;
            }
        }
    }
}

/// Forward a command within the send budget; a stalled display consumer
/// costs at most one dropped frame, and the next command carries full
/// current state anyway.
async fn send_command(tx: &CommandSender, cmd: DisplayCommand) {
    let budget = Duration::from_millis(DISPLAY_SEND_BUDGET_MS);
    if with_timeout(budget, tx.send(cmd)).await.is_err() {
        warn!("display queue full, dropping {}", cmd);
    }
}
