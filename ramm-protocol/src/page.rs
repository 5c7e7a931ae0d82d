//! Control page served for every request
//!
//! The page is a static response: the robot state is visible on the OLED,
//! so the browser only needs the buttons.

/// Title shown in the browser tab and page header
pub const PAGE_TITLE: &str = "RAMM";

/// Complete HTTP response carrying the control page
///
/// Each button is a form whose action is one of the command paths, so the
/// browser issues `GET /<command>?` when it is pressed.
pub const CONTROL_PAGE: &str = concat!(
    "HTTP/1.1 200 OK\r\n",
    "Content-Type: text/html\r\n",
    "Connection: close\r\n",
    "\r\n",
    "<!DOCTYPE html><html><head><title>RAMM</title><style>",
    "body{background:#c2f016;font-family:sans-serif;text-align:center;margin-top:30px;}",
    "h1{font-size:48px;margin-bottom:20px;}",
    ".r{display:flex;justify-content:center;align-items:center;margin:10px 0;}",
    "button{font-size:28px;font-weight:bold;border-radius:8px;border:none;padding:15px 30px;margin:8px;cursor:pointer;}",
    ".a{background:#28a745;color:#fff;}",
    ".v{background:#fff;color:#00aaff;border:4px solid #00aaff;width:80px;height:80px;margin:8px;}",
    "</style></head><body><h1>RAMM</h1>",
    "<div class=r><form action=\"/auto\"><button class=a>Auto</button></form></div>",
    "<div class=r><div style=\"width:240px;display:flex;justify-content:center;\">",
    "<form action=\"/up\"><button class=v>W</button></form>",
    "</div></div>",
    "<div class=r><div style=\"width:240px;display:flex;justify-content:space-between;\">",
    "<form action=\"/left\"><button class=v>A</button></form>",
    "<form action=\"/down\"><button class=v>S</button></form>",
    "<form action=\"/right\"><button class=v>D</button></form>",
    "</div></div>",
    "</body></html>",
);
