//! Inter-task communication channels
//!
//! The HTTP task never touches robot state. It queues decoded commands here
//! and the control task, the only consumer, applies them in order.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use ramm_protocol::Command;

/// Channel capacity for commands from the control page
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Commands decoded from HTTP requests
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE> =
    Channel::new();
