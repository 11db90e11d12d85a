//! HTML error pages.

use std::io;

use tokio::io::AsyncWrite;

use crate::config::ServerInfo;
use crate::error::Failure;
use crate::http::page;
use crate::http::response::ResponseBuilder;
use crate::http::writer::ResponseWriter;

/// Renders the error page body for `failure`.
pub fn error_body(failure: &Failure, server: &ServerInfo) -> String {
    let title = format!("{} {}", failure.status.as_u16(), failure.title);
    let mut body = page::header(&title, page::ERROR_BGCOLOR);
    body.push_str(failure.text);
    body.push('\n');
    body.push_str(&page::footer(server));
    body
}

/// Writes the complete error response: headers without length or
/// modification time, then the HTML page.
pub async fn report<W>(writer: &mut ResponseWriter<W>, failure: &Failure) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let head = ResponseBuilder::new(failure.status)
        .title(failure.title)
        .extra_header(failure.extra_header.clone())
        .mime_type(Some("text/html"))
        .build();
    writer.write_head(&head).await?;

    let body = error_body(failure, writer.server());
    writer.write_body(body.as_bytes()).await
}
