//! MIME type detection based on file extensions.

/// Extension table, matched case-sensitively against the text after the
/// last `.` of the name.
const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html; charset=UTF-8"),
    ("htm", "text/html; charset=UTF-8"),
    ("xhtml", "application/xhtml+xml; charset=UTF-8"),
    ("xht", "application/xhtml+xml; charset=UTF-8"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("png", "image/png"),
    ("css", "text/css"),
    ("xml", "text/xml; charset=UTF-8"),
    ("xsl", "text/xml; charset=UTF-8"),
    ("au", "audio/basic"),
    ("wav", "audio/wav"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("qt", "video/quicktime"),
    ("mpeg", "video/mpeg"),
    ("mpe", "video/mpeg"),
    ("vrml", "model/vrml"),
    ("wrl", "model/vrml"),
    ("midi", "audio/midi"),
    ("mid", "audio/midi"),
    ("mp3", "audio/mpeg"),
    ("ogg", "application/ogg"),
    ("pac", "application/x-ns-proxy-autoconfig"),
];

/// Looks up the content type for a file name.
///
/// Returns `None` for names without a dot or with an unknown extension;
/// callers then omit `Content-Type` altogether.
///
/// # Example
///
/// ```
/// # use microhttpd::http::mime::get_mime_type;
/// assert_eq!(get_mime_type("photo.jpg"), Some("image/jpeg"));
/// assert_eq!(get_mime_type("photo.JPG"), None);
/// ```
pub fn get_mime_type(name: impl AsRef<[u8]>) -> Option<&'static str> {
    let name = name.as_ref();
    let dot = name.iter().rposition(|&c| c == b'.')?;
    let ext = &name[dot + 1..];

    MIME_TYPES
        .iter()
        .find(|(known, _)| known.as_bytes() == ext)
        .map(|(_, mime)| *mime)
}
