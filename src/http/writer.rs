use std::io;
use std::time::SystemTime;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::ServerInfo;
use crate::http::date::HttpDate;
use crate::http::response::ResponseHead;

const HTTP_VERSION: &str = "HTTP/1.0";

/// Default size of the chunks a file body is copied in.
pub const CHUNK_SIZE: usize = 8192;

/// Renders the status line and header block, including the blank line.
pub fn serialize_head(head: &ResponseHead, server_name: &str, now: SystemTime) -> Vec<u8> {
    let mut buf = String::new();

    // Status line
    buf.push_str(&format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.title
    ));

    buf.push_str(&format!("Server: {server_name}\r\n"));
    buf.push_str(&format!("Date: {}\r\n", HttpDate(now)));

    if let Some(extra) = &head.extra_header {
        buf.push_str(extra);
        buf.push_str("\r\n");
    }
    if let Some(mime_type) = head.mime_type {
        buf.push_str(&format!("Content-Type: {mime_type}\r\n"));
    }
    if let Some(length) = head.content_length {
        buf.push_str(&format!("Content-Length: {length}\r\n"));
    }
    if let Some(modified) = head.last_modified {
        buf.push_str(&format!("Last-Modified: {}\r\n", HttpDate(modified)));
    }

    buf.push_str("Connection: close\r\n");

    // Header/body separator
    buf.push_str("\r\n");

    buf.into_bytes()
}

/// Writes one response to the output stream.
pub struct ResponseWriter<W> {
    stream: W,
    server: ServerInfo,
    chunk_size: usize,
    written: u64,
}

impl<W: AsyncWrite + Unpin> ResponseWriter<W> {
    pub fn new(stream: W, server: ServerInfo) -> Self {
        Self {
            stream,
            server,
            chunk_size: CHUNK_SIZE,
            written: 0,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn server(&self) -> &ServerInfo {
        &self.server
    }

    /// Total bytes written so far, headers included.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub async fn write_head(&mut self, head: &ResponseHead) -> io::Result<()> {
        let bytes = serialize_head(head, &self.server.name, SystemTime::now());
        self.write_body(&bytes).await
    }

    pub async fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.stream.write_all(body).await?;
        self.written += body.len() as u64;
        Ok(())
    }

    /// Copies `source` to the output in bounded chunks.
    ///
    /// Stops quietly when either side fails: a peer that stopped reading is
    /// not an application error. Returns the number of body bytes sent.
    pub async fn copy_body<R>(&mut self, source: &mut R) -> u64
    where
        R: AsyncRead + Unpin,
    {
        let mut buf = BytesMut::with_capacity(self.chunk_size);
        let mut sent = 0;

        loop {
            buf.clear();
            let n = match source.read_buf(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    tracing::debug!(error = %e, sent, "body read aborted");
                    break;
                }
            };

            if let Err(e) = self.write_body(&buf[..n]).await {
                tracing::debug!(error = %e, sent, "body write aborted");
                break;
            }
            sent += n as u64;
        }

        sent
    }

    pub async fn flush(&mut self) -> io::Result<()> {
        self.stream.flush().await
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}
