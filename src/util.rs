//! Small utility helpers for URL encoding and character-based text handling.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free; they sit on the hot path between keystrokes and the
//! network layer.

use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// Count characters (Unicode scalar values) in a string.
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// What: Truncate a string to at most `max` characters.
///
/// Inputs:
/// - `s`: Source string.
/// - `max`: Maximum number of characters to keep.
///
/// Output:
/// - A prefix of `s` containing at most `max` characters, cut on a char boundary.
#[must_use]
pub fn clamp_chars(s: &str, max: usize) -> &str {
    s.char_indices()
        .nth(max)
        .map_or(s, |(idx, _)| s.get(..idx).unwrap_or(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Unreserved characters pass through while spaces and symbols are escaped.
    ///
    /// - Input: Mixed ASCII string with spaces and punctuation
    /// - Output: RFC 3986 escaping with `%20` for spaces
    #[test]
    fn percent_encode_escapes_reserved() {
        assert_eq!(percent_encode("Hello world"), "Hello%20world");
        assert_eq!(percent_encode("a+b&c=d"), "a%2Bb%26c%3Dd");
        assert_eq!(percent_encode("safe-._~"), "safe-._~");
    }

    /// What: Non-ASCII input is escaped byte-wise in UTF-8.
    ///
    /// - Input: "é" (two UTF-8 bytes)
    /// - Output: `%C3%A9`
    #[test]
    fn percent_encode_handles_utf8() {
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    /// What: Clamping cuts on character boundaries, not bytes.
    ///
    /// - Input: Multibyte string clamped to two characters
    /// - Output: First two characters intact
    #[test]
    fn clamp_chars_respects_boundaries() {
        assert_eq!(clamp_chars("héllo", 2), "hé");
        assert_eq!(clamp_chars("ab", 5), "ab");
        assert_eq!(char_count("héllo"), 5);
    }
}
