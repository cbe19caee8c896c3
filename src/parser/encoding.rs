//! Character encoding detection and decoding
//!
//! The encoding is taken from a byte order mark, from the first bytes of a
//! UTF-16 document without one, or from the `encoding` pseudo-attribute of
//! the XML declaration. Anything else is read as UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use tracing::debug;

use super::find;
use crate::error::{Error, ErrorKind, IOError, Result};

// An XML declaration longer than this is not looked for
const DECLARATION_SCAN_LIMIT: usize = 1024;

/// Encoding of `bytes` and the length of its byte order mark, if any.
pub fn detect(bytes: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, bom_len);
    }
    if bytes.starts_with(&[0x3C, 0x00, 0x3F, 0x00]) {
        return (UTF_16LE, 0);
    }
    if bytes.starts_with(&[0x00, 0x3C, 0x00, 0x3F]) {
        return (UTF_16BE, 0);
    }
    (declared_encoding(bytes).unwrap_or(UTF_8), 0)
}

/// Decodes a whole file. Malformed byte sequences are an error, not
/// replacement characters.
#[allow(clippy::indexing_slicing)]
pub fn decode(bytes: &[u8], display: &str) -> Result<String> {
    let (encoding, bom_len) = detect(bytes);
    debug!("Decoding as {}", encoding.name());

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(Cow::into_owned)
        .ok_or_else(|| {
            Error::new(ErrorKind::IO(IOError::ReadError(format!(
                "{} is not valid {}",
                display,
                encoding.name()
            ))))
        })
}

#[allow(clippy::indexing_slicing)]
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(DECLARATION_SCAN_LIMIT)];
    if !head.starts_with(b"<?xml") {
        return None;
    }
    let declaration = &head[..find(head, b"?>")?];

    let at = find(declaration, b"encoding")?;
    let rest = declaration[at + b"encoding".len()..].trim_ascii_start();
    let rest = rest.strip_prefix(b"=")?.trim_ascii_start();
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let label = &rest[..rest.iter().position(|&b| b == quote)?];

    let encoding = Encoding::for_label(label)?;
    // The declaration was readable as ASCII, so the bytes cannot be UTF-16
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return None;
    }
    Some(encoding)
}
