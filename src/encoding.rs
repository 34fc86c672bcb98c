//! Character decoding for snapshot pages.
//!
//! Pages are read as bytes. A charset declared in the page head selects
//! the decoder, otherwise UTF-8. Decoding is strict: a byte sequence that
//! is invalid in the chosen encoding is an error, since a replaced
//! character would silently drop the row containing it.

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Bytes of the page searched for a charset declaration.
const PRESCAN_LEN: usize = 1024;

/// `charset=LABEL` inside a `<meta>` tag. Covers both
/// `<meta charset="...">` and the `http-equiv` content form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("META_CHARSET regex")
});

/// Encoding declared in the page head, if it names a known label.
///
/// UTF-16 and `replacement` labels resolve to UTF-8: a page whose head is
/// readable as ASCII cannot actually be UTF-16.
#[must_use]
pub fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(PRESCAN_LEN)];
    let label = META_CHARSET.captures(head)?.get(1)?;
    Encoding::for_label(label.as_bytes()).map(Encoding::output_encoding)
}

/// Decode page bytes to text, failing on any malformed sequence.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let encoding = declared_encoding(bytes).unwrap_or(UTF_8);

    if encoding == UTF_8 {
        return std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| {
                log::debug!("Invalid UTF-8 at byte {}", e.valid_up_to());
                invalid(encoding)
            });
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| invalid(encoding))
}

fn invalid(encoding: &'static Encoding) -> Error {
    Error::InvalidEncoding {
        encoding: encoding.name(),
        path: None,
    }
}
