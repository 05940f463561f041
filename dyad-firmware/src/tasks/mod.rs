//! Embassy async tasks
//!
//! One task per hardware concern; they communicate only through the
//! statics in `channels`.

pub mod button;
pub mod display;
pub mod sampler;
pub mod serial;

pub use button::button_task;
pub use display::display_task;
pub use sampler::{sampler_task, SamplerConfig};
pub use serial::{serial_rx_task, serial_tx_task};
