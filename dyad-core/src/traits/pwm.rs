//! PWM compare channel abstraction.

/// Trait for a PWM channel with a fixed period and a writable compare
/// point.
///
/// The coupler writes the compare value while the timer is running; the
/// implementation is expected to be hardware double-buffered, so a new
/// compare value takes effect at the next period boundary. That external
/// guarantee is what makes the mid-period write safe.
pub trait PwmChannel {
    /// The fixed timer period in counts
    fn period(&self) -> u16;

    /// Set the compare value (duty point) in counts
    fn set_compare(&mut self, compare: u16);
}
