//! Wire format constants and the packet type.

/// Packet start-of-frame byte (`'s'`)
pub const PACKET_START: u8 = b's';

/// Packet end-of-frame byte (`'t'`)
pub const PACKET_END: u8 = b't';

/// Complete packet size on the wire (START + 2 digits + END)
pub const PACKET_LEN: usize = 4;

/// An accepted host packet.
///
/// Holds the two digit bytes exactly as they arrived on the wire, so the
/// echo reply can reproduce the original packet bit-for-bit even when the
/// payload bytes were not ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// First payload byte (tens position), raw wire value
    pub digit1: u8,
    /// Second payload byte (units position), raw wire value
    pub digit2: u8,
}

impl Packet {
    /// Create a packet from the two raw payload bytes
    pub fn new(digit1: u8, digit2: u8) -> Self {
        Self { digit1, digit2 }
    }

    /// Build a packet carrying two decimal digits as ASCII
    pub fn from_digits(tens: u8, units: u8) -> Self {
        Self {
            digit1: tens.wrapping_add(b'0'),
            digit2: units.wrapping_add(b'0'),
        }
    }

    /// Decode the payload bytes to numeric digits.
    ///
    /// No bounds check is performed: a payload byte outside `'0'..='9'`
    /// yields a value outside 0-9 and shows up as a wrong (blank) display
    /// position rather than an error.
    pub fn digits(&self) -> (u8, u8) {
        (
            self.digit1.wrapping_sub(b'0'),
            self.digit2.wrapping_sub(b'0'),
        )
    }

    /// Encode the full four-byte envelope
    pub fn encode(&self) -> [u8; PACKET_LEN] {
        [PACKET_START, self.digit1, self.digit2, PACKET_END]
    }
}
