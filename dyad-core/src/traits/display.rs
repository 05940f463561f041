//! Display pin abstraction for the multiplexed two-digit display.

use crate::display::Digit;

/// Trait for the select lines and segment bus of a two-digit display.
///
/// Implementations map these calls onto the actual select pins (typically
/// active-low on common-anode modules) and the seven shared segment lines.
/// The multiplexer calls them in a fixed order every tick - deselect the
/// previously lit digit, write the new segment pattern, select the digit
/// about to be shown - and the implementation must apply each call
/// immediately, without reordering or batching, or the display glitches.
pub trait DisplayPins {
    /// Drive the select line of `digit` inactive (digit dark)
    fn deselect(&mut self, digit: Digit);

    /// Drive the select line of `digit` active (digit lit)
    fn select(&mut self, digit: Digit);

    /// Write a segment pattern to the shared a-g lines.
    ///
    /// Bit 0 is segment `a` through bit 6 for segment `g`; a set bit means
    /// the segment is lit.
    fn write_segments(&mut self, pattern: u8);
}
