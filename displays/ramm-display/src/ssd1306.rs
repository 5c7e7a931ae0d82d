//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. The panel runs in
//! vertical addressing mode so the framebuffer's column-major bytes can be
//! streamed as-is.

use embedded_hal_async::i2c::I2c;
use ramm_core::Framebuffer;

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Panel height in rows
const HEIGHT: u8 = 64;

/// Control byte for a single command
const CONTROL_COMMAND: u8 = 0x80;

/// Control byte for a run of display data
const CONTROL_DATA: u8 = 0x40;

/// Data bytes sent per I2C write
const DATA_CHUNK: usize = 32;

/// SSD1306 commands
#[allow(dead_code)]
pub mod cmd {
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_ENTIRE_ON: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEM_ADDR: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_OUT_DIR: u8 = 0xC0;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;

    /// Memory addressing mode argument: column first, then page
    pub const ADDR_MODE_VERTICAL: u8 = 0x01;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SSD1306_ADDR)
    }

    /// Create a new SSD1306 driver at a custom address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEM_ADDR,
            cmd::ADDR_MODE_VERTICAL,
            cmd::SET_START_LINE,
            cmd::SET_SEG_REMAP | 0x01, // Column 127 mapped to SEG0
            cmd::SET_MUX_RATIO,
            HEIGHT - 1,
            cmd::SET_COM_OUT_DIR | 0x08, // Scan from COM[N-1] to COM0
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::SET_ENTIRE_ON, // Follow RAM content
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd]).await
    }

    /// Send the framebuffer to the display
    ///
    /// Sets the column and page window to the whole buffer, then streams
    /// the packed bytes.
    pub async fn present<const W: usize, const P: usize>(
        &mut self,
        fb: &Framebuffer<W, P>,
    ) -> Result<(), I2C::Error> {
        let last_column = u8::try_from(fb.width().saturating_sub(1)).unwrap_or(u8::MAX);
        let last_page = u8::try_from(fb.pages().saturating_sub(1)).unwrap_or(u8::MAX);

        self.command(cmd::SET_COL_ADDR).await?;
        self.command(0).await?;
        self.command(last_column).await?;
        self.command(cmd::SET_PAGE_ADDR).await?;
        self.command(0).await?;
        self.command(last_page).await?;

        let mut data = [0u8; DATA_CHUNK + 1];
        data[0] = CONTROL_DATA;
        for chunk in fb.as_bytes().chunks(DATA_CHUNK) {
            data[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(self.address, &data[..=chunk.len()]).await?;
        }

        Ok(())
    }

    /// Set display contrast (0-255)
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST).await?;
        self.command(contrast).await
    }

    /// Turn display on/off
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON).await
        } else {
            self.command(cmd::DISPLAY_OFF).await
        }
    }

    /// Invert display colors
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), I2C::Error> {
        if inverted {
            self.command(cmd::SET_INVERSE).await
        } else {
            self.command(cmd::SET_NORMAL).await
        }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};
    use ramm_core::Oled128x64;

    /// Records every write; fails once `fail_after` writes have gone through
    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail_after: Option<usize>,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations.iter_mut() {
                if let Operation::Write(bytes) = op {
                    if self.fail_after == Some(self.writes.len()) {
                        return Err(ErrorKind::Bus);
                    }
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    fn commands(writes: &[(u8, Vec<u8>)]) -> Vec<u8> {
        writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == CONTROL_COMMAND)
            .map(|(_, bytes)| bytes[1])
            .collect()
    }

    fn data(writes: &[(u8, Vec<u8>)]) -> Vec<u8> {
        writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == CONTROL_DATA)
            .flat_map(|(_, bytes)| bytes[1..].to_vec())
            .collect()
    }

    #[test]
    fn test_init_sequence() {
        let mut display = Ssd1306::new(MockI2c::default());
        block_on(display.init()).unwrap();

        let writes = display.release().writes;
        assert!(writes.iter().all(|(addr, bytes)| *addr == SSD1306_ADDR && bytes.len() == 2));

        let cmds = commands(&writes);
        assert_eq!(cmds.first(), Some(&cmd::DISPLAY_OFF));
        assert_eq!(cmds.last(), Some(&cmd::DISPLAY_ON));
        assert_eq!(&cmds[1..3], &[cmd::SET_MEM_ADDR, cmd::ADDR_MODE_VERTICAL]);
        assert!(cmds.windows(2).any(|w| w == [cmd::SET_MUX_RATIO, 63]));
        assert!(cmds.windows(2).any(|w| w == [cmd::SET_CHARGE_PUMP, 0x14]));
    }

    #[test]
    fn test_present_sets_window_then_streams_buffer() {
        let mut fb = Oled128x64::new();
        fb.draw_square(8, 8, 8);
        fb.set_pixel(127, 63, true);

        let mut display = Ssd1306::new(MockI2c::default());
        block_on(display.present(&fb)).unwrap();
        let writes = display.release().writes;

        assert_eq!(
            commands(&writes),
            vec![cmd::SET_COL_ADDR, 0, 127, cmd::SET_PAGE_ADDR, 0, 7]
        );
        let streamed = data(&writes);
        assert_eq!(streamed.len(), 128 * 8);
        assert_eq!(streamed.as_slice(), fb.as_bytes());
        assert!(writes.iter().all(|(_, bytes)| bytes.len() <= DATA_CHUNK + 1));
    }

    #[test]
    fn test_present_smaller_buffer() {
        let fb = ramm_core::Framebuffer::<40, 2>::new();
        let mut display = Ssd1306::new(MockI2c::default());
        block_on(display.present(&fb)).unwrap();
        let writes = display.release().writes;

        assert_eq!(
            commands(&writes),
            vec![cmd::SET_COL_ADDR, 0, 39, cmd::SET_PAGE_ADDR, 0, 1]
        );
        assert_eq!(data(&writes).len(), 80);
    }

    #[test]
    fn test_bus_error_is_propagated() {
        let mut display = Ssd1306::new(MockI2c {
            fail_after: Some(3),
            ..Default::default()
        });
        let fb = Oled128x64::new();
        assert_eq!(block_on(display.present(&fb)), Err(ErrorKind::Bus));
        assert_eq!(display.release().writes.len(), 3);
    }

    #[test]
    fn test_custom_address() {
        let mut display = Ssd1306::with_address(MockI2c::default(), 0x3D);
        block_on(display.set_display_on(false)).unwrap();
        block_on(display.set_inverted(true)).unwrap();
        block_on(display.set_contrast(0x7F)).unwrap();

        let writes = display.release().writes;
        assert!(writes.iter().all(|(addr, _)| *addr == 0x3D));
        assert_eq!(
            commands(&writes),
            vec![cmd::DISPLAY_OFF, cmd::SET_INVERSE, cmd::SET_CONTRAST, 0x7F]
        );
    }
}
