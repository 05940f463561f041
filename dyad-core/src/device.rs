//! The poll/dispatch device loop.
//!
//! Ties the serial state machines to the shared cells the way the firmware
//! wires them on hardware: the receive interrupt feeds [`Device::on_rx_byte`],
//! which publishes accepted digits and raises the packet latch; the main
//! loop calls [`Device::poll`] to notice the latch and arm the echo; the
//! transmit-ready interrupt drains [`Device::on_tx_ready`] until the echo
//! envelope is complete. What the main loop does between polls (busy spin
//! or a low-power wait) is the platform's choice.
//!
//! This is the host-testable model of that loop. The RP2040 firmware
//! realizes the same shape with an async serial task: an embassy `Signal`
//! stands in for [`PacketLatch`] (identical last-write-wins contract) and
//! buffered UART reads/writes stand in for the interrupt hooks, so the
//! end-to-end behavior is exercised here, off target.

use dyad_protocol::{Echo, Framer};

use crate::shared::{DigitCells, PacketLatch};

/// Serial-side event dispatcher.
///
/// Owns the receive framer and the echo transmitter; the shared cells are
/// passed in because they are `static` on hardware, shared with the
/// display refresh context.
#[derive(Debug, Default)]
pub struct Device {
    framer: Framer,
    echo: Echo,
}

impl Device {
    /// Create a device with both state machines idle
    pub fn new() -> Self {
        Self {
            framer: Framer::new(),
            echo: Echo::new(),
        }
    }

    /// Handle one received byte (receive interrupt context).
    ///
    /// On a completed packet, publishes the decoded digits to the display
    /// buffer and raises the packet-arrived latch. A packet completing
    /// before the previous latch was polled overwrites it.
    pub fn on_rx_byte(&mut self, byte: u8, digits: &DigitCells, latch: &PacketLatch) {
        if let Some(packet) = self.framer.feed(byte) {
            let (tens, units) = packet.digits();
            digits.publish(tens, units);
            latch.store(packet);
        }
    }

    /// Poll pending flags (main loop context).
    ///
    /// If a packet has arrived, arms the echo transmitter and returns the
    /// first reply byte for immediate transmission; the rest of the reply
    /// is pulled by [`Device::on_tx_ready`].
    pub fn poll(&mut self, latch: &PacketLatch) -> Option<u8> {
        latch.take().map(|packet| self.echo.arm(packet))
    }

    /// Handle a transmit-ready event (transmit interrupt context).
    ///
    /// Returns the next echo byte, or `None` once the envelope is done and
    /// the transmitter has disarmed itself.
    pub fn on_tx_ready(&mut self) -> Option<u8> {
        self.echo.on_tx_ready()
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    /// Feed a byte stream, then drain whatever reply the device produces
    fn run(bytes: &[u8]) -> (DigitCells, Vec<u8>) {
        let digits = DigitCells::new();
        let latch = PacketLatch::new();
        let mut device = Device::new();

        for &byte in bytes {
            device.on_rx_byte(byte, &digits, &latch);
        }

        let mut reply = Vec::new();
        if let Some(first) = device.poll(&latch) {
            reply.push(first);
            while let Some(byte) = device.on_tx_ready() {
                reply.push(byte);
            }
        }
        (digits, reply)
    }

    #[test]
    fn test_accepted_packet_end_to_end() {
        // "s25t" -> display (2, 5), reply bit-for-bit
        let (digits, reply) = run(&[0x73, 0x32, 0x35, 0x74]);
        assert_eq!(digits.snapshot(), (2, 5));
        assert_eq!(reply, &[0x73, 0x32, 0x35, 0x74]);
    }

    #[test]
    fn test_garbage_then_packet() {
        // Leading 0x41 is discarded, then "s90t" is accepted
        let (digits, reply) = run(&[0x41, 0x73, 0x39, 0x30, 0x74]);
        assert_eq!(digits.snapshot(), (9, 0));
        assert_eq!(reply, b"s90t");
    }

    #[test]
    fn test_malformed_packet_no_reply() {
        let (digits, reply) = run(b"s25x");
        assert_eq!(digits.snapshot(), (0, 0));
        assert!(reply.is_empty());
    }

    #[test]
    fn test_unpolled_packet_overwritten() {
        // Two packets before the main loop polls: only the last is echoed,
        // and the display already shows it
        let (digits, reply) = run(b"s11ts42t");
        assert_eq!(digits.snapshot(), (4, 2));
        assert_eq!(reply, b"s42t");
    }

    #[test]
    fn test_poll_without_packet_is_quiet() {
        let latch = PacketLatch::new();
        let mut device = Device::new();
        assert_eq!(device.poll(&latch), None);
        assert_eq!(device.on_tx_ready(), None);
    }
}
