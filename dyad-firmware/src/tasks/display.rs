//! Display refresh task
//!
//! Ticks the multiplexer at the fixed refresh period. Both digit select
//! lines and the seven segment lines are plain GPIO outputs; the select
//! lines are active-low (common-anode module), the segment lines
//! active-high.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use dyad_core::display::{Digit, Multiplexer};
use dyad_core::traits::DisplayPins;

use crate::channels::DIGITS;

/// Multiplexing tick period. 5 ms per digit = 100 Hz per digit combined
/// refresh, comfortably above the flicker threshold.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(5);

/// GPIO-backed display pins
pub struct GpioDisplay {
    /// Select lines, index 0 = tens, 1 = units; low = digit lit
    selects: [Output<'static>; 2],
    /// Segment lines a-g; high = segment lit
    segments: [Output<'static>; 7],
}

impl GpioDisplay {
    /// Take ownership of the display pins, all digits dark
    pub fn new(mut selects: [Output<'static>; 2], segments: [Output<'static>; 7]) -> Self {
        for select in &mut selects {
            select.set_high();
        }
        Self { selects, segments }
    }

    fn select_index(digit: Digit) -> usize {
        match digit {
            Digit::Tens => 0,
            Digit::Units => 1,
        }
    }
}

impl DisplayPins for GpioDisplay {
    fn deselect(&mut self, digit: Digit) {
        self.selects[Self::select_index(digit)].set_high();
    }

    fn select(&mut self, digit: Digit) {
        self.selects[Self::select_index(digit)].set_low();
    }

    fn write_segments(&mut self, pattern: u8) {
        for (bit, segment) in self.segments.iter_mut().enumerate() {
            if pattern & (1 << bit) != 0 {
                segment.set_high();
            } else {
                segment.set_low();
            }
        }
    }
}

/// Display task - alternates the two digits, one tick each
#[embassy_executor::task]
pub async fn display_task(mut pins: GpioDisplay) {
    info!("Display task started");

    let mut mux = Multiplexer::new();
    let mut ticker = Ticker::every(REFRESH_PERIOD);

    loop {
        ticker.next().await;
        mux.on_tick(&DIGITS, &mut pins);
    }
}
