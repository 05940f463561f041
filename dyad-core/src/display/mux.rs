//! Display multiplexer state machine.
//!
//! Driven by the periodic refresh timer, one transition per tick. The pin
//! ordering on every transition is mandatory: deselect the digit that was
//! lit, write the segment pattern for the digit about to be shown, then
//! select it. Writing segments while the old digit is still selected
//! produces visible glitching; selecting before writing flashes the wrong
//! pattern.

use crate::display::segments;
use crate::shared::DigitCells;
use crate::traits::DisplayPins;

/// The two display positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    /// Left position, shows the tens digit
    Tens,
    /// Right position, shows the units digit
    Units,
}

impl Digit {
    /// The other display position
    pub fn other(self) -> Self {
        match self {
            Digit::Tens => Digit::Units,
            Digit::Units => Digit::Tens,
        }
    }
}

/// Alternates the two digit positions, one refresh tick each.
#[derive(Debug, Clone)]
pub struct Multiplexer {
    active: Digit,
}

impl Default for Multiplexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplexer {
    /// Create a multiplexer; the first tick lights the tens digit
    pub fn new() -> Self {
        Self {
            active: Digit::Units,
        }
    }

    /// The digit position currently lit
    pub fn active(&self) -> Digit {
        self.active
    }

    /// Advance one refresh tick.
    ///
    /// Reads the published digit buffer and lights the other position.
    /// The two cells are loaded independently, so a publish racing this
    /// tick can show one old and one new digit for a single tick.
    pub fn on_tick<P: DisplayPins>(&mut self, digits: &DigitCells, pins: &mut P) {
        let next = self.active.other();
        let (tens, units) = digits.snapshot();
        let value = match next {
            Digit::Tens => tens,
            Digit::Units => units,
        };

        pins.deselect(self.active);
        pins.write_segments(segments::pattern(value));
        pins.select(next);

        self.active = next;
    }
}
