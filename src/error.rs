//! Terminal request outcomes
//!
//! Every stage of the pipeline returns `Result<_, Failure>`. A `Failure`
//! is never recovered from: it propagates to `Connection::run`, which is the
//! only place that turns it into an HTML error response.

use std::io;

use thiserror::Error;

use crate::http::response::StatusCode;

/// A request that cannot be served, with everything the error page needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} {title}: {text}", .status.as_u16())]
pub struct Failure {
    pub status: StatusCode,
    pub title: &'static str,
    pub extra_header: Option<String>,
    pub text: &'static str,
}

/// Result of handling exactly one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(Failure),
}

impl Failure {
    pub fn new(status: StatusCode, text: &'static str) -> Self {
        Self {
            status,
            title: status.reason_phrase(),
            extra_header: None,
            text,
        }
    }

    fn configuration(text: &'static str) -> Self {
        Self {
            title: "Internal Error",
            ..Self::new(StatusCode::InternalServerError, text)
        }
    }

    pub fn no_directory() -> Self {
        Self::configuration("Configuration error - no directory specified.")
    }

    pub fn directory_not_accessible() -> Self {
        Self::configuration("Configuration error - directory not accessible.")
    }

    pub fn invalid_settings() -> Self {
        Self::configuration("Configuration error - invalid settings file.")
    }

    pub fn no_request() -> Self {
        Self::new(StatusCode::BadRequest, "No request found.")
    }

    pub fn unparseable_request() -> Self {
        Self::new(StatusCode::BadRequest, "Can't parse request.")
    }

    pub fn not_implemented() -> Self {
        Self::new(StatusCode::NotImplemented, "That method is not implemented.")
    }

    pub fn bad_filename() -> Self {
        Self::new(StatusCode::BadRequest, "Bad filename.")
    }

    pub fn illegal_filename() -> Self {
        Self::new(StatusCode::BadRequest, "Illegal filename.")
    }

    pub fn line_too_long() -> Self {
        Self::new(StatusCode::EntityTooLarge, "Request line too long.")
    }

    pub fn malformed_line_ending() -> Self {
        Self::new(StatusCode::BadRequest, "Unexpected byte sequence in headers.")
    }

    /// Redirect for a directory requested without its trailing slash.
    pub fn moved_permanently(raw_path: &[u8]) -> Self {
        Self {
            extra_header: Some(format!("Location: {}/", String::from_utf8_lossy(raw_path))),
            ..Self::new(StatusCode::MovedPermanently, "Directories must end with a slash.")
        }
    }

    /// Maps a file system error onto 404, 403 or a generic 500.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::new(StatusCode::NotFound, "File not found."),
            io::ErrorKind::PermissionDenied => Self::new(StatusCode::Forbidden, "Access denied."),
            _ => Self::new(
                StatusCode::InternalServerError,
                "An unexpected error occurred while trying to handle your request.",
            ),
        }
    }
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Self::from_io(&err)
    }
}
