use tokio::io::AsyncRead;

use crate::error::Failure;
use crate::http::line::LineReader;

/// The only supported request method, compared case-insensitively.
pub const RETRIEVAL_METHOD: &str = "GET";

/// Represents a parsed HTTP request line.
///
/// Header lines are read and discarded; nothing else about the request
/// influences the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method as sent by the client (e.g. "GET", "get")
    pub method: String,
    /// The raw, still percent-encoded path bytes (e.g. b"/docs/a%20b.html")
    pub path: Vec<u8>,
    /// Protocol token (typically "HTTP/1.0" or "HTTP/1.1")
    pub protocol: String,
}

impl Request {
    /// Splits a request line into exactly three space separated tokens.
    ///
    /// The path is kept as raw bytes, so unescaped non-ASCII names still
    /// reach the resolver.
    ///
    /// # Example
    ///
    /// ```
    /// # use microhttpd::http::request::Request;
    /// let req = Request::parse_line(b"GET /index.html HTTP/1.0").unwrap();
    /// assert_eq!(req.path, b"/index.html");
    /// assert!(Request::parse_line(b"GET /index.html").is_err());
    /// ```
    pub fn parse_line(line: &[u8]) -> Result<Self, Failure> {
        let parts: Vec<&[u8]> = line.split(|&c| c == b' ').collect();
        match parts.as_slice() {
            [method, path, protocol]
                if !method.is_empty() && !path.is_empty() && !protocol.is_empty() =>
            {
                Ok(Self {
                    method: String::from_utf8_lossy(method).into_owned(),
                    path: path.to_vec(),
                    protocol: String::from_utf8_lossy(protocol).into_owned(),
                })
            }
            _ => Err(Failure::unparseable_request()),
        }
    }

    /// Whether the method is the retrieval verb, in any letter case.
    pub fn is_retrieval(&self) -> bool {
        self.method.eq_ignore_ascii_case(RETRIEVAL_METHOD)
    }
}

/// Reads the request line, drains the header block and checks the method.
pub async fn read_request<R>(lines: &mut LineReader<R>) -> Result<Request, Failure>
where
    R: AsyncRead + Unpin,
{
    let line = lines.read_line().await?;
    if line.is_empty() {
        return Err(Failure::no_request());
    }

    let request = Request::parse_line(&line)?;
    tracing::debug!(
        method = %request.method,
        path = %String::from_utf8_lossy(&request.path),
        protocol = %request.protocol,
        "request line received"
    );

    while !lines.read_line().await?.is_empty() {}

    if !request.is_retrieval() {
        return Err(Failure::not_implemented());
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = Request::parse_line(b"GET / HTTP/1.0").unwrap();

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, b"/");
        assert_eq!(req.protocol, "HTTP/1.0");
        assert!(req.is_retrieval());
    }

    #[test]
    fn lowercase_method_is_retrieval() {
        let req = Request::parse_line(b"get / HTTP/1.0").unwrap();
        assert!(req.is_retrieval());
    }
}
