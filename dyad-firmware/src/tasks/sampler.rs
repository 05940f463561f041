//! Sampler task
//!
//! Converts the potentiometer channel and couples every completed
//! conversion to the PWM compare value. The trigger source is a
//! configuration choice: a debounced button press (software one-shot) or
//! a periodic timer. The coupling itself is identical either way.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Ticker};

use dyad_core::sampler::{PwmCoupler, Resolution, TriggerSource};
use dyad_core::traits::PwmChannel;

use crate::channels::SAMPLE_REQUEST;

/// PWM counter top value; the period is `top + 1` counts.
///
/// Must stay below `u16::MAX` or [`PwmOut::period`] would overflow.
pub const PWM_TOP: u16 = 999;
const _: () = assert!(PWM_TOP < u16::MAX);

/// Periodic trigger rate when configured, matching the reference 16 Hz
pub const PERIODIC_INTERVAL: Duration = Duration::from_micros(62_500);

/// Sampler configuration
pub struct SamplerConfig {
    /// What starts each conversion
    pub trigger: TriggerSource,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            trigger: TriggerSource::SoftwareOneShot,
        }
    }
}

/// PWM slice behind the [`PwmChannel`] trait.
///
/// The compare write lands in the hardware's double-buffered register, so
/// it is safe mid-period; the new duty takes effect at the next wrap.
pub struct PwmOut {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl PwmOut {
    /// Configure the slice for a fixed period, duty 0
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl PwmChannel for PwmOut {
    fn period(&self) -> u16 {
        self.config.top + 1
    }

    fn set_compare(&mut self, compare: u16) {
        self.config.compare_a = compare;
        self.pwm.set_config(&self.config);
    }
}

/// Sampler task - one conversion per trigger, straight into the compare
/// register
#[embassy_executor::task]
pub async fn sampler_task(
    mut adc: Adc<'static, Async>,
    mut pot: Channel<'static>,
    mut pwm: PwmOut,
    config: SamplerConfig,
) {
    info!("Sampler task started");

    // RP2040 conversions are 12-bit
    let mut coupler = PwmCoupler::new(Resolution::Bits12);
    let mut ticker = Ticker::every(PERIODIC_INTERVAL);

    loop {
        match config.trigger {
            TriggerSource::SoftwareOneShot => SAMPLE_REQUEST.wait().await,
            TriggerSource::PeriodicTimer => ticker.next().await,
        }

        match adc.read(&mut pot).await {
            Ok(raw) => {
                let duty = coupler.on_conversion(raw, &mut pwm);
                trace!("sample {} -> duty {}", raw, duty);
            }
            Err(e) => {
                warn!("ADC read error: {:?}", e);
            }
        }
    }
}
