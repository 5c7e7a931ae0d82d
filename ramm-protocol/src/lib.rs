//! RAMM control protocol
//!
//! This crate defines the HTTP surface between a browser (phone or laptop)
//! and the robot. The protocol is deliberately tiny: every button on the
//! control page is a form that issues `GET /<command>`, and every response is
//! the same control page.
//!
//! # Protocol Overview
//!
//! ```text
//! ┌──────────┐  GET /up?  ┌──────────────┐  Command::Up  ┌──────────────┐
//! │ browser  │ ─────────► │ request line │ ────────────► │ control loop │
//! │          │ ◄───────── │   decoder    │               │              │
//! └──────────┘  200 page  └──────────────┘               └──────────────┘
//! ```
//!
//! Unknown paths decode to `None` and are ignored; the page is served anyway.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod page;

pub use command::{headers_complete, Command, RequestLine};
pub use page::{CONTROL_PAGE, PAGE_TITLE};
