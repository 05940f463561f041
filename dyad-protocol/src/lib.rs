//! Host link protocol for the dyad firmware
//!
//! This crate defines the UART-based packet exchange between a host PC and
//! the display board. The protocol is deliberately tiny: fixed-size packets,
//! no length field, no checksum, ASCII payload.
//!
//! # Protocol overview
//!
//! Every packet is exactly four raw bytes:
//! ```text
//! ┌───────┬────────┬────────┬─────┐
//! │ START │ DIGIT1 │ DIGIT2 │ END │
//! │ 's'   │ '0'-'9'│ '0'-'9'│ 't' │
//! └───────┴────────┴────────┴─────┘
//! ```
//!
//! The board displays the two digits and replies with a bit-for-bit echo of
//! the accepted packet. Malformed packets are dropped silently; the only
//! resynchronization mechanism is waiting for the next START byte.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod echo;
pub mod framer;
pub mod wire;

pub use echo::{Echo, TransmitState};
pub use framer::{Framer, FramerState};
pub use wire::{Packet, PACKET_END, PACKET_LEN, PACKET_START};
