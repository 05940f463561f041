//! Single-writer cells crossing the interrupt/main-loop boundary.
//!
//! Each field here has exactly one producer role and one consumer role; no
//! field is read-modify-written from two execution contexts. That single
//! writer discipline is what makes the lock-free sharing safe - an
//! extension that added a second writer to any cell would need a scoped
//! critical section instead.
//!
//! Publication uses atomic load/store only (no compare-and-swap), so the
//! cells work on targets without CAS; `portable-atomic` fills in where the
//! architecture lacks even that.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use dyad_protocol::Packet;

use crate::bcd;

/// The two display digit cells.
///
/// Written by the serial receive side (or the BCD encoder at boot), read by
/// the display multiplexer on every refresh tick. The two cells are
/// published as two separate stores: a reader that lands between them sees
/// one old and one new digit for at most one tick. That weak consistency is
/// the documented contract; the pair is never torn below digit granularity.
#[derive(Debug)]
pub struct DigitCells {
    tens: AtomicU8,
    units: AtomicU8,
}

impl DigitCells {
    /// Create cells showing 0 / 0
    pub const fn new() -> Self {
        Self {
            tens: AtomicU8::new(0),
            units: AtomicU8::new(0),
        }
    }

    /// Publish a new digit pair (writer side)
    pub fn publish(&self, tens: u8, units: u8) {
        self.tens.store(tens, Ordering::Relaxed);
        self.units.store(units, Ordering::Relaxed);
    }

    /// BCD-encode a value and publish its two digits (writer side)
    pub fn publish_value(&self, value: u16) {
        let digits = bcd::encode(value);
        self.publish(digits.tens, digits.units);
    }

    /// Read the current digit pair (reader side)
    pub fn snapshot(&self) -> (u8, u8) {
        (
            self.tens.load(Ordering::Relaxed),
            self.units.load(Ordering::Relaxed),
        )
    }
}

impl Default for DigitCells {
    fn default() -> Self {
        Self::new()
    }
}

/// Packet-arrived latch.
///
/// Set by the serial receive side when a packet completes decoding, taken
/// by the main loop to arm the echo transmitter. Last-write-wins: if a new
/// packet finishes before the previous one was taken, the previous one is
/// simply overwritten. There is no queue.
#[derive(Debug)]
pub struct PacketLatch {
    arrived: AtomicBool,
    digit1: AtomicU8,
    digit2: AtomicU8,
}

impl PacketLatch {
    /// Create an empty latch
    pub const fn new() -> Self {
        Self {
            arrived: AtomicBool::new(false),
            digit1: AtomicU8::new(0),
            digit2: AtomicU8::new(0),
        }
    }

    /// Store a freshly decoded packet (writer side).
    ///
    /// The payload bytes are written before the flag is released so the
    /// consumer never observes the flag without the matching payload.
    pub fn store(&self, packet: Packet) {
        self.digit1.store(packet.digit1, Ordering::Relaxed);
        self.digit2.store(packet.digit2, Ordering::Relaxed);
        self.arrived.store(true, Ordering::Release);
    }

    /// Whether a packet is pending
    pub fn is_set(&self) -> bool {
        self.arrived.load(Ordering::Acquire)
    }

    /// Consume the pending packet, if any (reader side).
    ///
    /// Plain load-then-store, no read-modify-write: with a single consumer
    /// the clear cannot race another taker. The payload is loaded before
    /// the flag is cleared, so a [`PacketLatch::store`] overlapping this
    /// take can at worst be folded into it (its flag set is consumed by
    /// the clear and its payload was already, or is about to be, the one
    /// returned) - a packet may be lost to overwrite, never taken twice.
    /// Clearing first would invert that: the overlapping store's flag
    /// would survive the clear and the next take would return the same
    /// payload again, echoing one packet twice.
    pub fn take(&self) -> Option<Packet> {
        if self.arrived.load(Ordering::Acquire) {
            let packet = Packet::new(
                self.digit1.load(Ordering::Relaxed),
                self.digit2.load(Ordering::Relaxed),
            );
            self.arrived.store(false, Ordering::Release);
            Some(packet)
        } else {
            None
        }
    }
}

impl Default for PacketLatch {
    fn default() -> Self {
        Self::new()
    }
}
