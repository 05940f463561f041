//! Button task
//!
//! Debounces the active-low push-button and requests a one-shot
//! conversion for every clean press. While the settle timer runs the task
//! is not waiting on the edge, which is the async equivalent of keeping
//! the edge interrupt disabled for the whole window.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};

use dyad_core::button::{Debouncer, EdgeResponse};

use crate::channels::SAMPLE_REQUEST;

/// Contact settle window
pub const SETTLE_WINDOW: Duration = Duration::from_millis(5);

/// Button task - debounced falling edges trigger a conversion
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    let mut debouncer = Debouncer::new();

    loop {
        button.wait_for_falling_edge().await;

        if debouncer.on_edge() == EdgeResponse::StartSettle {
            Timer::after(SETTLE_WINDOW).await;

            // Re-sample the line; active-low, so low = still pressed
            if debouncer.on_settle_timeout(button.is_low()).is_some() {
                debug!("button press");
                SAMPLE_REQUEST.signal(());
            } else {
                trace!("bounce rejected");
            }
        }
    }
}
