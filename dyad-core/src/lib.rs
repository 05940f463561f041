//! Board-agnostic core logic for the dyad firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display pins, PWM channel)
//! - BCD encoder (double-dabble)
//! - Display multiplexer state machine
//! - Button debouncer state machine
//! - Sampler-to-PWM coupler
//! - Single-writer shared cells crossing the interrupt/main-loop boundary
//! - The poll/dispatch device loop
//!
//! # Concurrency model
//!
//! The target has one execution context plus preemptive, fixed-priority
//! interrupt handlers and no locking primitives. Every shared cell in this
//! crate is written by exactly one producer role and read by exactly one
//! consumer role; nothing is read-modify-written from two contexts. The
//! state machines themselves are plain `&mut self` values owned by a single
//! context (an interrupt handler or the main loop); only [`shared`] crosses
//! the boundary.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bcd;
pub mod button;
pub mod device;
pub mod display;
pub mod sampler;
pub mod shared;
pub mod traits;
