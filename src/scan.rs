/*!
Whole-buffer helpers built on the validator.
*/

use crate::util::nt_window;
use crate::util::utf8::is_ascii;
use crate::validate::validate_char;

/// Counts the characters in `bytes`, counting every byte that does not start
/// a valid character as one character of its own.
///
/// A malformed multi-byte sequence therefore counts once per byte.
pub fn count_chars(bytes: &[u8]) -> usize {
    let mut at = 0;
    let mut count = 0;
    while at < bytes.len() {
        at += validate_char(&bytes[at..]).unwrap_or(1);
        count += 1;
    }
    count
}

/// Null-terminated version of [`count_chars`]. The terminator is not counted.
pub fn count_chars_nt(bytes: &[u8]) -> usize {
    count_chars(nt_window(bytes))
}

/// Returns true if every byte of `bytes` is 7-bit ASCII.
pub fn is_ascii_string(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| is_ascii(b))
}

/// Null-terminated version of [`is_ascii_string`].
pub fn is_ascii_string_nt(bytes: &[u8]) -> bool {
    is_ascii_string(nt_window(bytes))
}
