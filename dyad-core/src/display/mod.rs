//! Two-digit multiplexed display
//!
//! The display shares one set of segment lines between two digit positions
//! and lights them alternately, one refresh tick each. At the reference
//! 5 ms tick that gives each digit a 100 Hz refresh at 50% duty - fast
//! enough that both appear continuously lit.

pub mod mux;
pub mod segments;

pub use mux::{Digit, Multiplexer};
pub use segments::pattern;
