//! Monochrome pixel graphics
//!
//! A page-packed framebuffer in the layout used by SSD1306-class OLED
//! controllers, plus the small shape and glyph primitives the robot scene
//! is built from.

pub mod font;
pub mod framebuffer;

#[cfg(any(feature = "graphics", test))]
mod draw_target;

pub use font::{glyph, Glyph, GLYPH_SIZE};
pub use framebuffer::{Framebuffer, Oled128x64, CROSS_SIZE, PAGE_HEIGHT};
