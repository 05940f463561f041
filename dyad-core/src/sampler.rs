//! Analog sampler to PWM coupler.
//!
//! Every completed conversion is linearly rescaled to the PWM compare
//! range and written straight to the compare channel. The write happens
//! while the timer runs; compare registers are hardware double-buffered,
//! so the new duty point takes effect at the next period boundary.
//!
//! The coupler does not care what started the conversion - a software
//! one-shot after a debounced button press or a periodic hardware timer
//! behave identically. Which one is wired up is a configuration choice.

use crate::traits::PwmChannel;

/// ADC resolution of the configured channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 8-bit conversions, raw range 0-255
    Bits8,
    /// 10-bit conversions, raw range 0-1023
    Bits10,
    /// 12-bit conversions, raw range 0-4095
    Bits12,
}

impl Resolution {
    /// Number of result bits
    pub const fn bits(self) -> u32 {
        match self {
            Resolution::Bits8 => 8,
            Resolution::Bits10 => 10,
            Resolution::Bits12 => 12,
        }
    }

    /// One past the largest representable raw sample
    pub const fn full_scale(self) -> u32 {
        1 << self.bits()
    }
}

/// Conversion trigger source.
///
/// Configuration only - the coupler logic has no behavioral branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerSource {
    /// Single conversion started by software (post-debounce)
    SoftwareOneShot,
    /// Continuous conversions started by a periodic hardware timer
    PeriodicTimer,
}

/// Couples conversion results to the PWM compare register.
#[derive(Debug, Clone)]
pub struct PwmCoupler {
    resolution: Resolution,
    last_raw: u16,
    last_duty: u16,
}

impl PwmCoupler {
    /// Create a coupler for a channel of the given resolution
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            last_raw: 0,
            last_duty: 0,
        }
    }

    /// The most recent raw sample
    pub fn last_raw(&self) -> u16 {
        self.last_raw
    }

    /// The most recent compare value written
    pub fn last_duty(&self) -> u16 {
        self.last_duty
    }

    /// Rescale a raw sample to a compare value for the given period.
    ///
    /// `duty = raw * period / full_scale`; the raw sample is masked to the
    /// configured resolution first, so `0 <= duty < period` always holds.
    pub fn duty_for(&self, raw: u16, period: u16) -> u16 {
        let full_scale = self.resolution.full_scale();
        let raw = u32::from(raw) & (full_scale - 1);
        (raw * u32::from(period) / full_scale) as u16
    }

    /// Handle a conversion-complete event.
    ///
    /// Writes the rescaled duty to the compare channel and returns it.
    pub fn on_conversion<P: PwmChannel>(&mut self, raw: u16, pwm: &mut P) -> u16 {
        let duty = self.duty_for(raw, pwm.period());
        pwm.set_compare(duty);
        self.last_raw = raw;
        self.last_duty = duty;
        duty
    }
}
