use std::time::SystemTime;

/// HTTP status codes the server can emit.
///
/// - `Ok` (200): File or listing served
/// - `MovedPermanently` (301): Directory requested without a trailing slash
/// - `BadRequest` (400): Malformed or illegal request
/// - `Forbidden` (403): Permission denied by the file system
/// - `NotFound` (404): Resource not found
/// - `EntityTooLarge` (413): Request line too long
/// - `InternalServerError` (500): Configuration or unexpected I/O error
/// - `NotImplemented` (501): Method other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 Ok
    Ok,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 413 Entity Too Large
    EntityTooLarge,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use microhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::EntityTooLarge.as_u16(), 413);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::EntityTooLarge => 413,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase written on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use microhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "Ok");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "Ok",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::EntityTooLarge => "Entity Too Large",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Everything needed to emit a response header block.
///
/// `content_length` and `last_modified` are optional; `None` means the
/// corresponding header is left out entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// The HTTP status code
    pub status: StatusCode,
    /// Title written after the numeric status
    pub title: &'static str,
    /// Extra header line written verbatim, e.g. `Location: /dir/`
    pub extra_header: Option<String>,
    /// Value of the `Content-Type` header
    pub mime_type: Option<&'static str>,
    /// Value of the `Content-Length` header
    pub content_length: Option<u64>,
    /// Source of the `Last-Modified` header
    pub last_modified: Option<SystemTime>,
}

/// Builder for constructing response heads in a fluent style.
///
/// # Example
///
/// ```ignore
/// let head = ResponseBuilder::new(StatusCode::Ok)
///     .mime_type(Some("text/html"))
///     .last_modified(meta.modified().ok())
///     .build();
/// ```
pub struct ResponseBuilder {
    head: ResponseHead,
}

impl ResponseBuilder {
    /// Creates a builder whose title defaults to the status reason phrase.
    pub fn new(status: StatusCode) -> Self {
        Self {
            head: ResponseHead {
                status,
                title: status.reason_phrase(),
                extra_header: None,
                mime_type: None,
                content_length: None,
                last_modified: None,
            },
        }
    }

    pub fn title(mut self, title: &'static str) -> Self {
        self.head.title = title;
        self
    }

    pub fn extra_header(mut self, line: Option<String>) -> Self {
        self.head.extra_header = line;
        self
    }

    pub fn mime_type(mut self, mime_type: Option<&'static str>) -> Self {
        self.head.mime_type = mime_type;
        self
    }

    pub fn content_length(mut self, length: u64) -> Self {
        self.head.content_length = Some(length);
        self
    }

    pub fn last_modified(mut self, modified: Option<SystemTime>) -> Self {
        self.head.last_modified = modified;
        self
    }

    pub fn build(self) -> ResponseHead {
        self.head
    }
}
