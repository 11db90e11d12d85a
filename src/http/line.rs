use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::Failure;

/// Default upper bound for a single request or header line.
pub const MAX_LINE_LEN: usize = 8192;

/// Reads CRLF or LF terminated lines one byte at a time.
///
/// The reader never consumes past the terminator of the line it returns,
/// so wrap unbuffered sources in a `BufReader`.
pub struct LineReader<R> {
    reader: R,
    max_len: usize,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self { reader, max_len }
    }

    /// Returns the next line without its terminator.
    ///
    /// End of stream also ends a line, so an empty result means either a
    /// blank line or nothing left to read. Fails with 413 once `max_len`
    /// bytes are consumed without a terminator, and with 400 on a `\r`
    /// that is not followed by `\n`.
    pub async fn read_line(&mut self) -> Result<Vec<u8>, Failure> {
        let mut line = Vec::new();

        loop {
            if line.len() == self.max_len {
                return Err(Failure::line_too_long());
            }

            match self.next_byte().await {
                Some(b'\r') => {
                    if self.next_byte().await != Some(b'\n') {
                        return Err(Failure::malformed_line_ending());
                    }
                    return Ok(line);
                }
                Some(b'\n') | None => return Ok(line),
                Some(c) => line.push(c),
            }
        }
    }

    async fn next_byte(&mut self) -> Option<u8> {
        match self.reader.read_u8().await {
            Ok(c) => Some(c),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => None,
            Err(e) => {
                // a broken input stream reads as end of stream
                tracing::debug!(error = %e, "input read failed");
                None
            }
        }
    }
}
