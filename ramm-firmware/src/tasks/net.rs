//! Wi-Fi and network stack tasks

use cyw43_pio::PioSpi;
use defmt::*;
use embassy_net::Stack;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{DMA_CH0, PIO0};
use embassy_time::Timer;

use crate::config::{WifiConfig, JOIN_RETRY_MS};

/// CYW43 radio driver
#[embassy_executor::task]
pub async fn cyw43_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

/// embassy-net stack driver
#[embassy_executor::task]
pub async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

/// Join the configured network, retrying until it succeeds, then wait for DHCP
pub async fn join(control: &mut cyw43::Control<'static>, stack: Stack<'static>, wifi: WifiConfig) {
    loop {
        info!("Joining \"{}\"", wifi.ssid);
        let options = if wifi.is_open() {
            cyw43::JoinOptions::new_open()
        } else {
            cyw43::JoinOptions::new(wifi.password.as_bytes())
        };
        match control.join(wifi.ssid, options).await {
            Ok(()) => break,
            Err(e) => {
                warn!("Join failed with status {}", e.status);
                Timer::after_millis(JOIN_RETRY_MS).await;
            }
        }
    }

    info!("Waiting for DHCP...");
    stack.wait_config_up().await;
    if let Some(config) = stack.config_v4() {
        info!("Control page at http://{}/", config.address.address());
    }
}
