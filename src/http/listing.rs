//! Generated HTML index for directories without an `index.html`.
//!
//! Headers go out before the directory is read, so nothing that fails after
//! that point can change the status. Enumeration and per-entry stat failures
//! are logged and the document is finished anyway.

use std::ffi::{OsStr, OsString};
use std::fs::Metadata;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tokio::io::AsyncWrite;

use crate::http::codec::{self, MAX_ENCODED_NAME};
use crate::http::date::ListingDate;
use crate::http::page;
use crate::http::path::Entry;
use crate::http::response::{ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// Width the entry name is padded or truncated to.
pub const NAME_COLUMN: usize = 32;

/// Renders one `<pre>` row for a directory entry.
///
/// `metadata` is `None` when the entry could not be stat'ed, in which case
/// date and size are replaced by `???`.
pub fn render_entry(name: &OsStr, encoded: &str, metadata: Option<&Metadata>) -> String {
    let name = name.to_string_lossy();
    match metadata {
        Some(meta) => {
            let date = meta
                .modified()
                .map(|t| ListingDate(t).to_string())
                .unwrap_or_default();
            format!(
                "<a href=\"{encoded}\">{name:<width$.width$}</a>\t{date:>15} {size:>14}\n",
                width = NAME_COLUMN,
                size = meta.len(),
            )
        }
        None => format!(
            "<a href=\"{encoded}\">{name:<width$.width$}</a>\t???\n",
            width = NAME_COLUMN
        ),
    }
}

/// Names in the directory, `.` and `..` included, sorted bytewise.
pub async fn list_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = vec![OsString::from("."), OsString::from("..")];

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name());
    }

    names.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    Ok(names)
}

/// Writes the full listing response for `dir`.
///
/// Only output errors are returned; file system errors end up in the log.
pub async fn write_listing<W>(writer: &mut ResponseWriter<W>, dir: &Entry) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let head = ResponseBuilder::new(StatusCode::Ok)
        .mime_type(Some("text/html"))
        .last_modified(dir.metadata.modified().ok())
        .build();
    writer.write_head(&head).await?;

    let title = format!("Index of {}", dir.display_name());
    let mut body = page::header(&title, page::LISTING_BGCOLOR);
    body.push_str("\t\t<pre>\n");
    writer.write_body(body.as_bytes()).await?;

    match list_names(&dir.path).await {
        Ok(names) => {
            for name in names {
                let encoded = match codec::encode(name.as_bytes(), MAX_ENCODED_NAME) {
                    Ok(encoded) => encoded,
                    Err(e) => {
                        tracing::warn!(name = ?name, error = %e, "skipping listing entry");
                        continue;
                    }
                };

                let metadata = match tokio::fs::symlink_metadata(dir.path.join(&name)).await {
                    Ok(meta) => Some(meta),
                    Err(e) => {
                        tracing::warn!(name = ?name, error = %e, "stat failed for listing entry");
                        None
                    }
                };

                let row = render_entry(&name, &encoded, metadata.as_ref());
                writer.write_body(row.as_bytes()).await?;
            }
        }
        Err(e) => {
            tracing::warn!(dir = %dir.path.display(), error = %e, "directory listing failed");
        }
    }

    let mut tail = String::from("\t\t</pre>\n");
    tail.push_str(&page::footer(writer.server()));
    writer.write_body(tail.as_bytes()).await
}
