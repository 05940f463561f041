//! Shared cells and signals between tasks
//!
//! Single-writer discipline throughout: each static has exactly one
//! producing task and one consuming task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use dyad_core::shared::DigitCells;
use dyad_protocol::Packet;

/// The published display digits.
///
/// Written by the serial receive task, read by the display refresh task
/// every multiplexing tick.
pub static DIGITS: DigitCells = DigitCells::new();

/// Packet-arrived latch.
///
/// A `Signal` has exactly the latch contract the link needs: last-write-wins,
/// no queueing - an unconsumed packet is overwritten by the next one.
pub static PACKET_ARRIVED: Signal<CriticalSectionRawMutex, Packet> = Signal::new();

/// Debounced button press requesting a one-shot conversion
pub static SAMPLE_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();
