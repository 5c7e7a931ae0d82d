//! RAMM - Multi-mode Vacuum Robot Firmware
//!
//! Firmware for a Raspberry Pi Pico W driving a 128x64 SSD1306 OLED. A
//! simulated vacuum robot sweeps a field of dust tiles on the display, or
//! follows commands from a control page served over Wi-Fi.

#![no_std]
#![no_main]

use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::*;
use embassy_executor::Spawner;
use embassy_net::StackResources;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::{self, Pio};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use ramm_core::config::PacingConfig;
use ramm_core::traits::ModeIndicators;
use ramm_display::Ssd1306;

use crate::config::{WifiConfig, I2C_FREQUENCY_HZ, NET_SEED};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// Static cells for driver state (must live forever)
static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();
static NET_RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("RAMM firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Mode LEDs, both off until the first mode change
    let manual_led = Output::new(p.PIN_12, Level::Low);
    let auto_led = Output::new(p.PIN_11, Level::Low);
    let Ok(indicators) = ModeIndicators::new(manual_led, auto_led);

    // OLED on I2C1 (SDA=GPIO14, SCL=GPIO15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    let mut display = Ssd1306::new(i2c);
    match display.init().await {
        Ok(()) => info!("Display initialized"),
        Err(e) => warn!("Display init failed: {:?}", e),
    }

    spawner.spawn(unwrap!(tasks::control_task(
        display,
        indicators,
        PacingConfig::default()
    )));

    // CYW43 Wi-Fi over PIO0
    let fw = cyw43_firmware::CYW43_43439A0;
    let clm = cyw43_firmware::CYW43_43439A0_CLM;

    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    let state = CYW43_STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    spawner.spawn(unwrap!(tasks::cyw43_task(runner)));

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;
    info!("Wi-Fi chip initialized");

    let (stack, net_runner) = embassy_net::new(
        net_device,
        embassy_net::Config::dhcpv4(Default::default()),
        NET_RESOURCES.init(StackResources::new()),
        NET_SEED,
    );
    spawner.spawn(unwrap!(tasks::net_task(net_runner)));

    tasks::join(&mut control, stack, WifiConfig::from_env()).await;

    spawner.spawn(unwrap!(tasks::http_task(stack)));
    info!("All tasks spawned, firmware running");

    // Everything else happens in the spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
