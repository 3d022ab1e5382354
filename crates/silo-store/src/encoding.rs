//! Text payload decoding for string writes.
//!
//! A raw string written to the store is decoded as Base64 when it has the
//! Base64 shape: non-empty, length a multiple of four, alphabet
//! `[A-Za-z0-9+/]` with at most two trailing `=` padding characters, and
//! no whitespace. Anything else is stored as its UTF-8 bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Base64 shape predicate.
pub fn is_base64(value: &str) -> bool {
    if value.is_empty() || value.len() % 4 != 0 {
        return false;
    }
    let bytes = value.as_bytes();
    let mut end = bytes.len();
    // At most two trailing padding characters.
    for _ in 0..2 {
        if end > 0 && bytes[end - 1] == b'=' {
            end -= 1;
        }
    }
    bytes[..end]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
}

/// Decode a string payload to bytes.
///
/// Base64-shaped strings are decoded; everything else — including the
/// rare base64-shaped string that strict decoding rejects over non-zero
/// padding bits — is stored as literal UTF-8.
pub fn decode_text(value: &str) -> Vec<u8> {
    if is_base64(value) {
        if let Ok(decoded) = STANDARD.decode(value) {
            return decoded;
        }
    }
    value.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_base64_shapes() {
        assert!(is_base64("SGVsbG8="));
        assert!(is_base64("SGVsbG8gV29ybGQ="));
        assert!(is_base64("AAAAAAAAAAAAAAAA"));
        assert!(is_base64("ab+/0129"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_base64("abc"));
        assert!(!is_base64("abcde"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_base64(""));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_base64("SGVs bG8="));
        assert!(!is_base64("SGVs\tbG8="));
        assert!(!is_base64("SGVs\nbG8="));
    }

    #[test]
    fn rejects_out_of_alphabet_characters() {
        assert!(!is_base64("SGVsbG8!"));
        assert!(!is_base64("SGVsbG8-"));
    }

    #[test]
    fn rejects_interior_padding() {
        assert!(!is_base64("SG=sbG8="));
        assert!(!is_base64("===="));
    }

    #[test]
    fn accepts_up_to_two_trailing_pads() {
        assert!(is_base64("SGVsbA=="));
        assert!(!is_base64("SGVsb==="));
    }

    #[test]
    fn decodes_base64_text() {
        assert_eq!(decode_text("SGVsbG8="), b"Hello");
    }

    #[test]
    fn stores_plain_text_as_utf8() {
        assert_eq!(decode_text("hello world"), b"hello world");
        assert_eq!(decode_text("not base64!"), b"not base64!");
    }

    #[test]
    fn short_plain_words_stay_literal() {
        // Length not a multiple of four, so never decoded.
        assert_eq!(decode_text("hello"), b"hello");
    }
}
