//! Board and network settings
//!
//! Pin assignments for the Pico W wiring:
//!
//! | Function           | GPIO |
//! |--------------------|------|
//! | OLED SDA (I2C1)    | 14   |
//! | OLED SCL (I2C1)    | 15   |
//! | Manual mode LED    | 12   |
//! | Automatic mode LED | 11   |
//!
//! Wi-Fi credentials are baked in at build time:
//!
//! ```text
//! RAMM_WIFI_SSID=home RAMM_WIFI_PASSWORD=secret cargo build -p ramm-firmware --release
//! ```

/// OLED bus speed
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Port the control page is served on
pub const HTTP_PORT: u16 = 80;

/// Idle timeout for a single HTTP connection
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Delay between failed join attempts
pub const JOIN_RETRY_MS: u64 = 2_000;

/// Seed for the network stack's port and sequence randomization
pub const NET_SEED: u64 = 0x7a3d_91c4_5e0b_28f6;

/// Wi-Fi station credentials
#[derive(Debug, Clone, Copy)]
pub struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

impl WifiConfig {
    /// Credentials from `RAMM_WIFI_SSID` / `RAMM_WIFI_PASSWORD`
    pub fn from_env() -> Self {
        Self {
            ssid: option_env!("RAMM_WIFI_SSID").unwrap_or("ramm"),
            password: option_env!("RAMM_WIFI_PASSWORD").unwrap_or(""),
        }
    }

    /// An empty password joins an open network
    pub fn is_open(&self) -> bool {
        self.password.is_empty()
    }
}
