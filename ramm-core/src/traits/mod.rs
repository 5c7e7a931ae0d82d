//! Hardware abstraction traits
//!
//! These define the interface between the application logic and board
//! outputs. Pins come from `embedded-hal`, so any HAL can drive them.

pub mod indicator;

pub use indicator::{IndicatorLevels, ModeIndicators};
