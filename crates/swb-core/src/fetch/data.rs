//! `data:` retrieval: strip the media/encoding header and percent-decode.

use percent_encoding::percent_decode_str;

/// Decodes the part of a `data:` locator after the prefix.
///
/// Everything before the first comma is the media/encoding header and is
/// discarded. `+` is left as-is and malformed escapes pass through.
pub fn decode(stored: &str) -> String {
    let content = match stored.split_once(',') {
        Some((_header, content)) => content,
        None => stored,
    };
    unescape(content)
}

/// Percent-decodes `content`; invalid UTF-8 becomes U+FFFD.
pub fn unescape(content: &str) -> String {
    percent_decode_str(content).decode_utf8_lossy().into_owned()
}
