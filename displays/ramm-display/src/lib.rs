//! OLED transport for the RAMM framebuffer
//!
//! The core crate renders into a page-packed [`Framebuffer`]; this crate
//! owns the I2C link to the panel and is the only place that touches it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  &Framebuffer  ┌──────────────┐  I2C  ┌────────┐
//! │ control loop │ ─────────────► │ Ssd1306      │ ────► │ panel  │
//! └──────────────┘    present()   └──────────────┘       └────────┘
//! ```
//!
//! [`Framebuffer`]: ramm_core::Framebuffer

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ssd1306;

pub use ssd1306::{Ssd1306, SSD1306_ADDR};
