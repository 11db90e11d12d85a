//! micro_httpd - one-shot static HTTP/1.0 responder
//!
//! Reads a single request from an input stream, writes a single response to
//! an output stream and reports whether the request was served.

pub mod config;
pub mod error;
pub mod http;
