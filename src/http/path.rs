//! Request path to file system mapping.
//!
//! The raw path is decoded and checked for traversal before anything touches
//! the file system. Paths are byte strings throughout, since a percent escape
//! may decode to bytes that are not valid UTF-8.

use std::ffi::OsStr;
use std::fs::Metadata;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::error::Failure;
use crate::http::codec;

/// Relative path served when the request is for `/`.
pub const ROOT_MARKER: &[u8] = b"./";

/// Name probed inside a directory before falling back to a listing.
pub const INDEX_FILE: &str = "index.html";

/// A file system entry that exists and can be served.
#[derive(Debug)]
pub struct Entry {
    /// Decoded path relative to the document root (e.g. `docs/`, `a.png`)
    pub name: Vec<u8>,
    /// Location on disk
    pub path: PathBuf,
    pub metadata: Metadata,
}

impl Entry {
    /// The decoded request path, lossily converted for display.
    pub fn display_name(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }
}

/// What a request path resolved to.
#[derive(Debug)]
pub enum Target {
    /// A regular file, or a directory's `index.html`
    File(Entry),
    /// A directory without an index file, to be listed
    Directory(Entry),
}

/// Whether a decoded path could escape the document root.
pub fn is_traversal(name: &[u8]) -> bool {
    name.starts_with(b"/")
        || name == b".."
        || name.starts_with(b"../")
        || name.windows(4).any(|w| w == b"/../")
        || name.ends_with(b"/..")
}

/// Strips the leading slash from the raw path and percent-decodes it.
///
/// An empty result becomes [`ROOT_MARKER`]. Never touches the file system.
pub fn decode_request_path(raw: &[u8]) -> Result<Vec<u8>, Failure> {
    let rest = raw.strip_prefix(b"/").ok_or_else(Failure::bad_filename)?;

    let name = codec::decode(rest);
    if name.is_empty() {
        return Ok(ROOT_MARKER.to_vec());
    }

    if is_traversal(&name) {
        return Err(Failure::illegal_filename());
    }

    Ok(name)
}

/// Resolves a raw request path under `root`.
///
/// Directories requested without a trailing slash fail with a 301 pointing
/// at `raw` plus `/`.
pub async fn resolve(root: &Path, raw: &[u8]) -> Result<Target, Failure> {
    let name = decode_request_path(raw)?;
    let path = root.join(OsStr::from_bytes(&name));

    let metadata = tokio::fs::metadata(&path).await?;
    if !metadata.is_dir() {
        return Ok(Target::File(Entry { name, path, metadata }));
    }

    if !name.ends_with(b"/") {
        return Err(Failure::moved_permanently(raw));
    }

    let index = path.join(INDEX_FILE);
    if let Ok(index_metadata) = tokio::fs::metadata(&index).await {
        let mut index_name = name;
        index_name.extend_from_slice(INDEX_FILE.as_bytes());
        return Ok(Target::File(Entry {
            name: index_name,
            path: index,
            metadata: index_metadata,
        }));
    }

    Ok(Target::Directory(Entry { name, path, metadata }))
}
