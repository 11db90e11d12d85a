use std::path::PathBuf;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::config::Settings;
use crate::error::{Failure, Outcome};
use crate::http::line::LineReader;
use crate::http::listing;
use crate::http::mime::get_mime_type;
use crate::http::path::{self, Entry, Target};
use crate::http::report::report;
use crate::http::request::read_request;
use crate::http::response::{ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// Serves exactly one request from `R` to `W`.
pub struct Connection<R, W> {
    lines: LineReader<R>,
    writer: ResponseWriter<W>,
    root: PathBuf,
}

impl<R, W> Connection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, root: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self {
            lines: LineReader::new(reader, settings.max_line_len),
            writer: ResponseWriter::new(writer, settings.server_info())
                .with_chunk_size(settings.chunk_size),
            root: root.into(),
        }
    }

    /// Reads the request, writes the response and flushes the output.
    ///
    /// Any failure along the way is turned into an error page here.
    pub async fn run(&mut self) -> Outcome {
        match self.handle().await {
            Ok(()) => {
                self.flush().await;
                tracing::debug!(bytes = self.writer.written(), "response written");
                Outcome::Success
            }
            Err(failure) => self.reject(failure).await,
        }
    }

    /// Answers with the error page for `failure` without reading a request.
    pub async fn reject(&mut self, failure: Failure) -> Outcome {
        tracing::info!(status = failure.status.as_u16(), text = failure.text, "request failed");

        if let Err(e) = report(&mut self.writer, &failure).await {
            tracing::warn!(error = %e, "could not write error response");
        }
        self.flush().await;

        Outcome::Failure(failure)
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    async fn handle(&mut self) -> Result<(), Failure> {
        let request = read_request(&mut self.lines).await?;

        match path::resolve(&self.root, &request.path).await? {
            Target::File(entry) => self.serve_file(&entry).await,
            Target::Directory(entry) => {
                tracing::debug!(dir = %entry.path.display(), "listing directory");
                if let Err(e) = listing::write_listing(&mut self.writer, &entry).await {
                    tracing::debug!(error = %e, "listing output aborted");
                }
                Ok(())
            }
        }
    }

    async fn serve_file(&mut self, entry: &Entry) -> Result<(), Failure> {
        let mut file = File::open(&entry.path).await?;
        tracing::debug!(file = %entry.path.display(), size = entry.metadata.len(), "serving file");

        let head = ResponseBuilder::new(StatusCode::Ok)
            .mime_type(get_mime_type(&entry.name))
            .content_length(entry.metadata.len())
            .last_modified(entry.metadata.modified().ok())
            .build();

        if let Err(e) = self.writer.write_head(&head).await {
            tracing::debug!(error = %e, "header write aborted");
            return Ok(());
        }
        let sent = self.writer.copy_body(&mut file).await;
        if sent < entry.metadata.len() {
            tracing::debug!(sent, expected = entry.metadata.len(), "body truncated");
        }

        Ok(())
    }

    async fn flush(&mut self) {
        if let Err(e) = self.writer.flush().await {
            tracing::debug!(error = %e, "flush failed");
        }
    }
}
