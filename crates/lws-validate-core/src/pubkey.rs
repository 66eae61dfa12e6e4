//! Hex-format predicate for public-key fields.

use std::sync::OnceLock;

use regex::Regex;

fn hex_digits() -> &'static Regex {
    static HEX_DIGITS: OnceLock<Regex> = OnceLock::new();
    HEX_DIGITS
        .get_or_init(|| Regex::new(r"^[0-9a-fA-F]+$").expect("static hex pattern compiles"))
}

/// True when `s` is exactly `len` characters, all in `[0-9a-fA-F]`.
///
/// The length is counted in characters, not bytes, so a multi-byte character
/// is never mistaken for a pair of hex digits.
pub fn is_valid_hex(s: &str, len: usize) -> bool {
    s.chars().count() == len && hex_digits().is_match(s)
}

/// Lowercase hex of the UTF-8 encoding of `s`.
pub fn byte_dump(s: &str) -> String {
    ::hex::encode(s.as_bytes())
}
