//! Configuration types
//!
//! Board-agnostic configuration structures. There is no configuration file:
//! the defaults describe the 128x64 display the robot lives on.

pub mod types;

pub use types::*;
