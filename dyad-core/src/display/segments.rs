//! Segment patterns for decimal digits.

/// Segment patterns for digits 0-9, one bit per segment, bit 0 = `a`
/// through bit 6 = `g`.
///
/// ```text
///      aaa
///     f   b
///      ggg
///     e   c
///      ddd
/// ```
pub const SEGMENTS: [u8; 10] = [
    0x3f, // 0: abcdef
    0x06, // 1: bc
    0x5b, // 2: abdeg
    0x4f, // 3: abcdg
    0x66, // 4: bcfg
    0x6d, // 5: acdfg
    0x7d, // 6: acdefg
    0x07, // 7: abc
    0x7f, // 8: abcdefg
    0x6f, // 9: abcdfg
];

/// Look up the segment pattern for a digit.
///
/// The producer side is documented to deliver only 0-9; anything else
/// renders blank rather than indexing out of the table, keeping the device
/// live on corrupt input.
pub fn pattern(digit: u8) -> u8 {
    SEGMENTS.get(usize::from(digit)).copied().unwrap_or(0)
}
