//! Dyad - Two-digit serial display firmware
//!
//! RP2040 firmware that drives a two-digit multiplexed 7-segment display
//! from four-byte host packets, echoes every accepted packet, and couples
//! a potentiometer to a PWM output, with a debounced button triggering
//! one-shot conversions.
//!
//! Named after the Greek "dyad" (a pair) for the two digits it drives.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::tasks::sampler::PwmOut;
use crate::tasks::SamplerConfig;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 32]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 32]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dyad firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Host link: 9600 baud, 8 data bits, no parity, 1 stop bit
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = 9600;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 32]);
    let rx_buf = RX_BUF.init([0u8; 32]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for host link");

    // Display pins: select lines idle high (digits dark), segments low
    let selects = [
        Output::new(p.PIN_2, Level::High), // SEL tens
        Output::new(p.PIN_3, Level::High), // SEL units
    ];
    let segments = [
        Output::new(p.PIN_4, Level::Low),  // a
        Output::new(p.PIN_5, Level::Low),  // b
        Output::new(p.PIN_6, Level::Low),  // c
        Output::new(p.PIN_7, Level::Low),  // d
        Output::new(p.PIN_8, Level::Low),  // e
        Output::new(p.PIN_9, Level::Low),  // f
        Output::new(p.PIN_10, Level::Low), // g
    ];
    let display = tasks::display::GpioDisplay::new(selects, segments);

    // Push-button: active-low, pull-up biased
    let button = Input::new(p.PIN_15, Pull::Up);

    // Potentiometer on ADC0, PWM out on PIN_16 (slice 0, channel A)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let pot = Channel::new_pin(p.PIN_26, Pull::None);
    let pwm = PwmOut::new(Pwm::new_output_a(
        p.PWM_SLICE0,
        p.PIN_16,
        embassy_rp::pwm::Config::default(),
    ));

    info!("Peripherals initialized");

    // Show 00 until the first packet arrives
    channels::DIGITS.publish_value(0);

    // Spawn tasks
    spawner.spawn(tasks::display_task(display)).unwrap();
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner
        .spawn(tasks::sampler_task(adc, pot, pwm, SamplerConfig::default()))
        .unwrap();

    info!("All tasks spawned");
}
