//! Percent-encoding for request paths and generated links.

use thiserror::Error;

/// Output bound used when encoding file names for listing links.
pub const MAX_ENCODED_NAME: usize = 1000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("encoded output does not fit in {0} bytes")]
    BufferTooSmall(usize),
}

/// Value of a single hexadecimal digit, or `None` if `c` is not one.
pub fn hexit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 0xa),
        b'A'..=b'F' => Some(c - b'A' + 0xa),
        _ => None,
    }
}

/// Decodes `%XY` escapes. A `%` not followed by two hex digits is kept as is,
/// so decoding never fails.
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        if input[i] == b'%' {
            let hi = input.get(i + 1).copied().and_then(hexit);
            let lo = input.get(i + 2).copied().and_then(hexit);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(input[i]);
        i += 1;
    }

    out
}

fn is_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || b"/_.-~".contains(&c)
}

/// Encodes `input` for use as a link target. Unreserved bytes are copied,
/// everything else becomes lowercase `%xx`.
///
/// `max_len` counts a terminating byte, so the encoded text must be strictly
/// shorter than it.
pub fn encode(input: &[u8], max_len: usize) -> Result<String, CodecError> {
    let mut out = String::with_capacity(input.len());

    for &c in input {
        let width = if is_unreserved(c) { 1 } else { 3 };
        if out.len() + width >= max_len {
            return Err(CodecError::BufferTooSmall(max_len));
        }

        if width == 1 {
            out.push(c as char);
        } else {
            out.push_str(&format!("%{c:02x}"));
        }
    }

    if out.len() >= max_len {
        return Err(CodecError::BufferTooSmall(max_len));
    }

    Ok(out)
}
