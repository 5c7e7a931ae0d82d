//! HTTP task
//!
//! Serves the control page and turns form submissions into commands.

use defmt::*;
use embassy_net::tcp::{self, TcpSocket};
use embassy_net::Stack;
use embassy_time::{Duration, Timer};
use embedded_io_async::Write;

use ramm_protocol::{headers_complete, Command, CONTROL_PAGE};

use crate::channels::COMMAND_CHANNEL;
use crate::config::{HTTP_PORT, HTTP_TIMEOUT_SECS};

/// Request buffer size; only the request line is decoded
const REQUEST_BUFFER_SIZE: usize = 1024;

/// HTTP task - one connection at a time
#[embassy_executor::task]
pub async fn http_task(stack: Stack<'static>) -> ! {
    info!("HTTP task started on port {}", HTTP_PORT);

    let mut rx_buffer = [0u8; 1024];
    let mut tx_buffer = [0u8; 2048];
    let mut request = [0u8; REQUEST_BUFFER_SIZE];

    loop {
        let mut socket = TcpSocket::new(stack, &mut rx_buffer, &mut tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)));

        if let Err(e) = socket.accept(HTTP_PORT).await {
            warn!("HTTP accept error: {:?}", e);
            Timer::after_millis(200).await;
            continue;
        }
        debug!("HTTP client {:?}", socket.remote_endpoint());

        match serve(&mut socket, &mut request).await {
            Ok(Some(command)) => info!("HTTP command: {:?}", command),
            Ok(None) => debug!("HTTP request without command"),
            Err(e) => warn!("HTTP error: {:?}", e),
        }

        socket.close();
        if let Err(e) = socket.flush().await {
            trace!("HTTP flush on close: {:?}", e);
        }
    }
}

/// Handle one request: queue its command and answer with the page
async fn serve(
    socket: &mut TcpSocket<'_>,
    request: &mut [u8],
) -> Result<Option<Command>, tcp::Error> {
    let len = read_headers(socket, request).await?;
    if len == 0 {
        return Ok(None);
    }

    let command = Command::from_request(&request[..len]);
    if let Some(command) = command {
        COMMAND_CHANNEL.send(command).await;
    }

    socket.write_all(CONTROL_PAGE.as_bytes()).await?;
    socket.flush().await?;

    Ok(command)
}

/// Read until the end of the headers, the peer closes, or the buffer fills
async fn read_headers(socket: &mut TcpSocket<'_>, buf: &mut [u8]) -> Result<usize, tcp::Error> {
    let mut total = 0;

    while total < buf.len() {
        let n = socket.read(&mut buf[total..]).await?;
        if n == 0 {
            break;
        }
        total += n;
        if headers_complete(&buf[..total]) {
            break;
        }
    }

    Ok(total)
}
