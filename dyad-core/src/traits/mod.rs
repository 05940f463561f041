//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic and
//! hardware-specific implementations. They are the only place the core
//! crate touches pins or timer registers; everything above them is a pure
//! state machine.

pub mod display;
pub mod pwm;

pub use display::DisplayPins;
pub use pwm::PwmChannel;
