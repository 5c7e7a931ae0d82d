//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod control;
pub mod http;
pub mod net;

pub use control::{control_task, Display, Indicators};
pub use http::http_task;
pub use net::{cyw43_task, join, net_task};
