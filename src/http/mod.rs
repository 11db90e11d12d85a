//! HTTP/1.0 request handling.
//!
//! One request comes in, one response goes out, then the process exits.
//!
//! # Architecture
//!
//! - **`line`**: Reads bounded CRLF/LF terminated lines from the input
//! - **`request`**: Parses the request line and drains the headers
//! - **`codec`**: Percent-decoding of paths, percent-encoding of link targets
//! - **`path`**: Traversal checks and mapping of the path to a file or directory
//! - **`response`**: Status codes and response metadata
//! - **`writer`**: Header block serialization and file body streaming
//! - **`mime`**: MIME type detection based on file extensions
//! - **`date`**: RFC 1123 and listing timestamps
//! - **`listing`**: HTML index of a directory
//! - **`report`**: HTML error pages
//! - **`connection`**: Drives the pipeline and turns failures into error pages
//!
//! # Pipeline
//!
//! ```text
//!        ┌─────────────┐
//!        │    line     │ ← Request line + headers
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   request   │ ← Method / path / protocol
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │    path     │ ← Decode, reject traversal, stat
//!        └──────┬──────┘
//!               ├─ File → writer (headers + body)
//!               └─ Directory → listing
//!
//!  Any failure ───────────► report (error page, failure outcome)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use microhttpd::config::Settings;
//! use microhttpd::http::connection::Connection;
//!
//! let mut conn = Connection::new(&b"GET / HTTP/1.0\r\n\r\n"[..], Vec::new(), "/srv/www", &Settings::default());
//! let outcome = conn.run().await;
//! ```

pub mod codec;
pub mod connection;
pub mod date;
pub mod line;
pub mod listing;
pub mod mime;
pub mod page;
pub mod path;
pub mod report;
pub mod request;
pub mod response;
pub mod writer;
