//! Host link tasks
//!
//! The receive task feeds every UART byte to the packet framer; an
//! accepted packet publishes its digits and raises the packet-arrived
//! latch. The transmit task waits on the latch and drives the echo state
//! machine, one byte per completed write.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embedded_io_async::{Read, Write};

use dyad_protocol::{Echo, Framer};

use crate::channels::{DIGITS, PACKET_ARRIVED};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// Serial RX task - frames incoming bytes into packets
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut framer = Framer::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    if let Some(packet) = framer.feed(byte) {
                        let (tens, units) = packet.digits();
                        debug!("packet accepted: ({}, {})", tens, units);
                        DIGITS.publish(tens, units);
                        PACKET_ARRIVED.signal(packet);
                    }
                }
            }
            Ok(_) => {
                // No bytes read, keep waiting
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Serial TX task - echoes every accepted packet back to the host
#[embassy_executor::task]
pub async fn serial_tx_task(mut tx: BufferedUartTx) {
    info!("Serial TX task started");

    let mut echo = Echo::new();

    loop {
        let packet = PACKET_ARRIVED.wait().await;

        // The start byte goes out immediately on arming; each completed
        // write is the transmit-ready event that pulls the next byte.
        let mut byte = echo.arm(packet);
        loop {
            if let Err(e) = tx.write_all(&[byte]).await {
                warn!("UART write error: {:?}", e);
                break;
            }
            match echo.on_tx_ready() {
                Some(next) => byte = next,
                None => break,
            }
        }
    }
}
