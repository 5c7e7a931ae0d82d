//! Commands issued from the control page

/// Commands accepted from the control page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Move one cell towards the top of the display (W)
    Up,
    /// Move one cell left (A)
    Left,
    /// Move one cell right (D)
    Right,
    /// Move one cell towards the bottom of the display (S)
    Down,
    /// Start the automatic sweep
    Auto,
}

// Wire format paths
const PATH_UP: &str = "/up";
const PATH_LEFT: &str = "/left";
const PATH_RIGHT: &str = "/right";
const PATH_DOWN: &str = "/down";
const PATH_AUTO: &str = "/auto";

impl Command {
    /// All commands, in control page order
    pub const ALL: [Command; 5] = [
        Command::Auto,
        Command::Up,
        Command::Left,
        Command::Down,
        Command::Right,
    ];

    /// Parse a command from a request path
    ///
    /// The query string is ignored, so the `/up?` that an empty HTML form
    /// submits decodes the same as `/up`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.split_once('?') {
            Some((path, _query)) => path,
            None => path,
        };

        match path {
            PATH_UP => Some(Command::Up),
            PATH_LEFT => Some(Command::Left),
            PATH_RIGHT => Some(Command::Right),
            PATH_DOWN => Some(Command::Down),
            PATH_AUTO => Some(Command::Auto),
            _ => None,
        }
    }

    /// Decode a command from raw request bytes
    ///
    /// Only the request line is inspected. Anything that is not a `GET` for
    /// one of the command paths yields `None`.
    pub fn from_request(request: &[u8]) -> Option<Self> {
        let text = core::str::from_utf8(request).ok()?;
        let line = RequestLine::parse(text)?;
        if line.method != "GET" {
            return None;
        }
        Self::from_path(line.path)
    }

    /// Request path for this command
    pub fn path(self) -> &'static str {
        match self {
            Command::Up => PATH_UP,
            Command::Left => PATH_LEFT,
            Command::Right => PATH_RIGHT,
            Command::Down => PATH_DOWN,
            Command::Auto => PATH_AUTO,
        }
    }

    /// Returns true for the four movement commands
    pub fn is_directional(&self) -> bool {
        !matches!(self, Command::Auto)
    }
}

/// Blank line separating request headers from the body
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Check if a partially received request contains all of its headers
pub fn headers_complete(request: &[u8]) -> bool {
    request
        .windows(HEADER_TERMINATOR.len())
        .any(|window| window == HEADER_TERMINATOR)
}

/// The first line of an HTTP request, borrowed from the receive buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub version: &'a str,
}

impl<'a> RequestLine<'a> {
    /// Split `METHOD SP PATH SP VERSION` out of a request
    pub fn parse(request: &'a str) -> Option<Self> {
        let line = request.lines().next()?;
        let mut parts = line.split_ascii_whitespace();

        let method = parts.next()?;
        let path = parts.next()?;
        let version = parts.next()?;
        if parts.next().is_some() || !path.starts_with('/') {
            return None;
        }

        Some(Self {
            method,
            path,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_path_roundtrip() {
        for command in Command::ALL {
            assert_eq!(Command::from_path(command.path()), Some(command));
        }
    }

    #[test]
    fn test_form_query_is_ignored() {
        assert_eq!(Command::from_path("/left?"), Some(Command::Left));
        assert_eq!(Command::from_path("/auto?x=1"), Some(Command::Auto));
    }

    #[test]
    fn test_headers_complete() {
        assert!(headers_complete(b"GET /up HTTP/1.1\r\nHost: ramm\r\n\r\n"));
        assert!(headers_complete(b"GET / HTTP/1.0\r\n\r\nbody"));
        assert!(!headers_complete(b"GET /up HTTP/1.1\r\nHost: ramm\r\n"));
        assert!(!headers_complete(b"\r\n\r"));
        assert!(!headers_complete(b""));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Command::from_path("/"), None);
        assert_eq!(Command::from_path("/favicon.ico"), None);
        assert_eq!(Command::from_path("/upper"), None);
        assert_eq!(Command::from_path("/UP"), None);
        assert_eq!(Command::from_path(""), None);
    }

    #[test]
    fn test_from_request() {
        let request = b"GET /right? HTTP/1.1\r\nHost: 192.168.0.10\r\nAccept: */*\r\n\r\n";
        assert_eq!(Command::from_request(request), Some(Command::Right));

        let request = b"GET /down HTTP/1.1\r\n\r\n";
        assert_eq!(Command::from_request(request), Some(Command::Down));
    }

    #[test]
    fn test_request_for_page_only() {
        let request = b"GET / HTTP/1.1\r\nHost: ramm\r\n\r\n";
        assert_eq!(Command::from_request(request), None);
    }

    #[test]
    fn test_non_get_is_ignored() {
        let request = b"POST /up HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
        assert_eq!(Command::from_request(request), None);
    }

    #[test]
    fn test_command_in_header_is_ignored() {
        let request = b"GET / HTTP/1.1\r\nReferer: http://ramm/up\r\n\r\n";
        assert_eq!(Command::from_request(request), None);
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(Command::from_request(&[0x47, 0x45, 0x54, 0x20, 0xFF, 0xFE]), None);
    }

    #[test]
    fn test_malformed_request_line() {
        assert!(RequestLine::parse("GET").is_none());
        assert!(RequestLine::parse("GET /up").is_none());
        assert!(RequestLine::parse("GET up HTTP/1.1").is_none());
        assert!(RequestLine::parse("GET /up HTTP/1.1 extra").is_none());
        assert!(RequestLine::parse("").is_none());
    }

    #[test]
    fn test_request_line_fields() {
        let line = RequestLine::parse("GET /auto? HTTP/1.0\r\n").unwrap();
        assert_eq!(line.method, "GET");
        assert_eq!(line.path, "/auto?");
        assert_eq!(line.version, "HTTP/1.0");
    }

    #[test]
    fn test_is_directional() {
        assert!(Command::Up.is_directional());
        assert!(Command::Down.is_directional());
        assert!(Command::Left.is_directional());
        assert!(Command::Right.is_directional());
        assert!(!Command::Auto.is_directional());
    }

    proptest! {
        #[test]
        fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let _ = Command::from_request(&bytes);
        }

        #[test]
        fn unknown_paths_decode_to_none(path in "/[a-z]{6,12}") {
            prop_assert_eq!(Command::from_path(&path), None);
        }
    }
}
