//! Page-packed monochrome framebuffer
//!
//! Pixels are stored one bit each. Rows are grouped into 8-pixel pages and
//! the bytes are laid out column by column, which is what the display
//! controller expects in vertical addressing mode:
//!
//! ```text
//! byte index = (y / 8) + x * PAGES
//! bit        = y % 8
//! ```
//!
//! Coordinates outside the buffer are ignored by every operation.

use super::font::{self, GLYPH_SIZE};

/// Rows per page
pub const PAGE_HEIGHT: usize = 8;

/// Side of the cross marker drawn by [`Framebuffer::draw_cross`]
pub const CROSS_SIZE: u16 = 8;

/// Framebuffer for the 128x64 OLED on the robot board
pub type Oled128x64 = Framebuffer<128, 8>;

/// Monochrome framebuffer `WIDTH` pixels wide and `PAGES * 8` pixels high
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer<const WIDTH: usize, const PAGES: usize> {
    /// One `[u8; PAGES]` column per x coordinate
    columns: [[u8; PAGES]; WIDTH],
}

impl<const WIDTH: usize, const PAGES: usize> Default for Framebuffer<WIDTH, PAGES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const PAGES: usize> Framebuffer<WIDTH, PAGES> {
    /// Create a cleared framebuffer
    pub const fn new() -> Self {
        Self {
            columns: [[0; PAGES]; WIDTH],
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        PAGES * PAGE_HEIGHT
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> usize {
        PAGES
    }

    /// Packed buffer in transfer order
    pub fn as_bytes(&self) -> &[u8] {
        self.columns.as_flattened()
    }

    /// Locate the byte and bit mask holding a pixel
    fn locate(&self, x: u16, y: u16) -> Option<(usize, usize, u8)> {
        let (x, y) = (usize::from(x), usize::from(y));
        if x >= WIDTH || y >= self.height() {
            return None;
        }
        Some((x, y / PAGE_HEIGHT, 1 << (y % PAGE_HEIGHT)))
    }

    /// Set or clear a single pixel
    pub fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        let Some((column, page, mask)) = self.locate(x, y) else {
            return;
        };

        let byte = &mut self.columns[column][page];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read a single pixel (false outside the buffer)
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        self.locate(x, y)
            .is_some_and(|(column, page, mask)| self.columns[column][page] & mask != 0)
    }

    /// Set every pixel to `value`
    pub fn fill(&mut self, value: bool) {
        let byte = if value { 0xFF } else { 0x00 };
        for column in self.columns.iter_mut() {
            column.fill(byte);
        }
    }

    /// Set a `side` x `side` block with its top-left corner at `(x, y)`
    pub fn draw_square(&mut self, side: u16, x: u16, y: u16) {
        self.paint_square(side, x, y, true);
    }

    /// Clear a `side` x `side` block with its top-left corner at `(x, y)`
    pub fn erase_square(&mut self, side: u16, x: u16, y: u16) {
        self.paint_square(side, x, y, false);
    }

    fn paint_square(&mut self, side: u16, x: u16, y: u16, on: bool) {
        for i in 0..side {
            let Some(row) = y.checked_add(i) else { break };
            for j in 0..side {
                let Some(col) = x.checked_add(j) else { break };
                self.set_pixel(col, row, on);
            }
        }
    }

    /// Draw both diagonals of the 8x8 box at `(x, y)`
    pub fn draw_cross(&mut self, x: u16, y: u16) {
        for i in 0..CROSS_SIZE {
            let row = y.saturating_add(i);
            self.set_pixel(x.saturating_add(i), row, true);
            self.set_pixel(x.saturating_add(CROSS_SIZE - 1 - i), row, true);
        }
    }

    /// Render one character into the 5x5 cell at `(x, y)`
    ///
    /// The whole cell is overwritten. Characters without a glyph render as
    /// a blank cell.
    pub fn draw_char(&mut self, c: char, x: u16, y: u16) {
        let glyph = font::glyph(c).unwrap_or(&font::BLANK);

        for (i, column) in (0u16..).zip(glyph.iter()) {
            for j in 0..u16::from(GLYPH_SIZE) {
                self.set_pixel(
                    x.saturating_add(i),
                    y.saturating_add(j),
                    column & (1 << j) != 0,
                );
            }
        }
    }

    /// Render a string left to right, wrapping at the right edge
    ///
    /// The cursor advances 5 pixels per character. When the next cell would
    /// touch the right edge the cursor wraps to `x = 0` one line (5 pixels)
    /// down; once a line would touch the bottom edge rendering stops.
    pub fn draw_string(&mut self, s: &str, x: u16, y: u16) {
        let advance = u16::from(GLYPH_SIZE);
        let (mut x, mut y) = (x, y);

        for c in s.chars() {
            self.draw_char(c, x, y);

            x = x.saturating_add(advance);
            if usize::from(x) + usize::from(advance) >= WIDTH {
                x = 0;
                y = y.saturating_add(advance);
            }
            if usize::from(y) + usize::from(advance) >= self.height() {
                break;
            }
        }
    }
}

impl<const WIDTH: usize, const PAGES: usize> core::fmt::Debug for Framebuffer<WIDTH, PAGES> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self
            .as_bytes()
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum::<usize>();
        f.debug_struct("Framebuffer")
            .field("width", &WIDTH)
            .field("height", &self.height())
            .field("lit", &lit)
            .finish()
    }
}
