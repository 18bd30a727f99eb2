/*!
Validation of single encoded characters and of whole buffers.

A character is valid when its lead byte announces a length that the window
can hold, every following byte is a continuation byte, and it is neither an
overlong encoding nor above U+10FFFF. Nothing is cached between calls: every
routine here is a pure function of the bytes it is given.
*/

use log::trace;

use crate::error::{Utf8Error, Utf8ErrorKind};
use crate::util::{nt_char_window, nt_window};
use crate::util::utf8::{is_ascii, is_continuation, is_valid_lead, length_from_lead};

/// Returns true if the character at the start of `window` is an overlong
/// encoding, i.e. a multi-byte encoding of a codepoint that fits in fewer
/// bytes.
///
/// This assumes the lead and continuation bytes were already checked. Only
/// the lead and the first continuation byte are inspected; a missing
/// continuation byte reads as zero.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_overlong(window: &[u8]) -> bool {
    let Some(&lead) = window.first() else {
        return false;
    };
    let next = window.get(1).copied().unwrap_or(0);
    // The continuation masks select the whole overlong range: testing 0x40
    // (always clear in a continuation byte) or 0x50 would also reject
    // U+0800..U+0FFF and U+20000..U+2FFFF. The 2 byte lead mask leaves out
    // bit 0x01 so that 0xC1 is rejected too.
    match length_from_lead(lead) {
        // 110x_xxxx: with lead bits 0x1E clear the value is below 0x80.
        2 => lead & 0x1E == 0,
        // 1110_xxxx: with lead bits 0x0F and continuation bit 0x20 clear the
        // value is below 0x800.
        3 => lead & 0x0F == 0 && next & 0x20 == 0,
        // 1111_0xxx: with lead bits 0x07 and continuation bits 0x30 clear the
        // value is below 0x10000.
        4 => lead & 0x07 == 0 && next & 0x30 == 0,
        _ => false,
    }
}

/// Returns true if the character at the start of `window` is a 4 byte
/// encoding of a value above U+10FFFF.
///
/// Same assumptions as [`is_overlong`].
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_oversize(window: &[u8]) -> bool {
    let Some(&lead) = window.first() else {
        return false;
    };
    if length_from_lead(lead) != 4 {
        return false;
    }
    let next = window.get(1).copied().unwrap_or(0);
    // Lead bit 0x04 puts the value at 0x100000 or above. Any of lead bits 0x03
    // or continuation bits 0x30 on top of that reaches 0x110000.
    lead & 0x04 != 0 && (lead & 0x03 != 0 || next & 0x30 != 0)
}

/// Validates the character at the start of `window` and returns its length.
///
/// Bytes past the character are ignored.
pub fn validate_char(window: &[u8]) -> Result<usize, Utf8ErrorKind> {
    let Some(&lead) = window.first() else {
        return Err(Utf8ErrorKind::Truncated);
    };
    let len = length_from_lead(lead);
    // 0xF8 passes the loose lead check but does not start any sequence, and
    // as a length 1 lead it would otherwise decode as itself.
    if !is_valid_lead(lead) || (len == 1 && !is_ascii(lead)) {
        return Err(Utf8ErrorKind::InvalidLead);
    }
    let available = &window[1..len.min(window.len())];
    if !available.iter().all(|&b| is_continuation(b)) {
        return Err(Utf8ErrorKind::BadContinuation);
    }
    if len > window.len() {
        return Err(Utf8ErrorKind::Truncated);
    }
    if is_overlong(window) {
        return Err(Utf8ErrorKind::Overlong);
    }
    if is_oversize(window) {
        return Err(Utf8ErrorKind::Oversize);
    }
    Ok(len)
}

/// Null-terminated version of [`validate_char`].
///
/// A zero byte before the announced length is reached makes the character
/// truncated. A zero byte at the start is a valid one byte character.
pub fn validate_char_nt(bytes: &[u8]) -> Result<usize, Utf8ErrorKind> {
    match bytes.first() {
        Some(0) => Ok(1),
        _ => validate_char(nt_char_window(bytes)),
    }
}

/// Returns true if `window` starts with one valid encoded character.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_valid_char(window: &[u8]) -> bool {
    validate_char(window).is_ok()
}

/// Null-terminated version of [`is_valid_char`].
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_valid_char_nt(bytes: &[u8]) -> bool {
    validate_char_nt(bytes).is_ok()
}

/// Checks that `bytes` consists only of valid encoded characters.
///
/// On failure the error reports the offset of the first invalid character.
/// An empty buffer is valid.
pub fn validate_string(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut at = 0;
    while at < bytes.len() {
        match validate_char(&bytes[at..]) {
            Ok(len) => at += len,
            Err(kind) => {
                trace!("invalid UTF-8 at offset {} of {}: {}", at, bytes.len(), kind);
                return Err(Utf8Error::new(at, kind));
            }
        }
    }
    Ok(())
}

/// Null-terminated version of [`validate_string`]. Only the bytes before the
/// first zero byte are checked.
pub fn validate_string_nt(bytes: &[u8]) -> Result<(), Utf8Error> {
    validate_string(nt_window(bytes))
}

/// Returns true if `bytes` consists only of valid encoded characters.
pub fn is_valid_string(bytes: &[u8]) -> bool {
    validate_string(bytes).is_ok()
}

/// Null-terminated version of [`is_valid_string`].
pub fn is_valid_string_nt(bytes: &[u8]) -> bool {
    validate_string_nt(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlong_masks() {
        assert!(is_overlong(&[0xC0, 0x80]));
        assert!(is_overlong(&[0xC1, 0xBF]));
        assert!(!is_overlong(&[0xC2, 0x80]));
        assert!(is_overlong(&[0xE0, 0x80, 0x80]));
        assert!(is_overlong(&[0xE0, 0x9F, 0xBF]));
        assert!(!is_overlong(&[0xE0, 0xA0, 0x80]));
        assert!(!is_overlong(&[0xE1, 0x80, 0x80]));
        assert!(is_overlong(&[0xF0, 0x80, 0x80, 0x80]));
        assert!(is_overlong(&[0xF0, 0x8F, 0xBF, 0xBF]));
        assert!(!is_overlong(&[0xF0, 0x90, 0x80, 0x80]));
        assert!(!is_overlong(&[0xF0, 0xA0, 0x80, 0x80]));
        assert!(!is_overlong(b"a"));
        assert!(!is_overlong(&[]));
    }

    #[test]
    fn oversize_masks() {
        assert!(!is_oversize(&[0xF4, 0x8F, 0xBF, 0xBF]));
        assert!(is_oversize(&[0xF4, 0x90, 0x80, 0x80]));
        assert!(is_oversize(&[0xF5, 0x80, 0x80, 0x80]));
        assert!(is_oversize(&[0xF7, 0xBF, 0xBF, 0xBF]));
        assert!(!is_oversize(&[0xF3, 0xBF, 0xBF, 0xBF]));
        assert!(!is_oversize(&[0xEF, 0xBF, 0xBF]));
    }

    #[test]
    fn single_chars() {
        assert_eq!(validate_char(b"a"), Ok(1));
        assert_eq!(validate_char(&[0x00]), Ok(1));
        assert_eq!(validate_char("é".as_bytes()), Ok(2));
        assert_eq!(validate_char("€".as_bytes()), Ok(3));
        assert_eq!(validate_char("😂".as_bytes()), Ok(4));
        assert_eq!(validate_char("😂abc".as_bytes()), Ok(4));
        assert_eq!(validate_char(&[]), Err(Utf8ErrorKind::Truncated));
        assert_eq!(validate_char(&[0x80]), Err(Utf8ErrorKind::InvalidLead));
        assert_eq!(validate_char(&[0xF8, 0x80]), Err(Utf8ErrorKind::InvalidLead));
        assert_eq!(validate_char(&[0xFF]), Err(Utf8ErrorKind::InvalidLead));
        assert_eq!(validate_char(&[0xE2, 0x82]), Err(Utf8ErrorKind::Truncated));
        assert_eq!(validate_char(&[0xE2, 0x41, 0xAC]), Err(Utf8ErrorKind::BadContinuation));
        assert_eq!(validate_char(&[0xC0, 0xAF]), Err(Utf8ErrorKind::Overlong));
        assert_eq!(validate_char(&[0xF4, 0x90, 0x80, 0x80]), Err(Utf8ErrorKind::Oversize));
    }

    #[test]
    fn single_chars_nt() {
        assert!(is_valid_char_nt(&[0x00]));
        assert!(!is_valid_char_nt(&[]));
        assert!(is_valid_char_nt(&[0xE2, 0x82, 0xAC, 0x00]));
        assert_eq!(validate_char_nt(&[0xE2, 0x00, 0xAC]), Err(Utf8ErrorKind::Truncated));
        assert_eq!(validate_char_nt(&[0xE2, 0x82, 0x00]), Err(Utf8ErrorKind::Truncated));
        assert!(!is_valid_char_nt(&[0xE2, 0x82]));
    }

    #[test]
    fn strings() {
        assert!(is_valid_string(b""));
        assert!(is_valid_string("abc€😂é".as_bytes()));
        let err = validate_string(b"ab\xE2\x82").unwrap_err();
        assert_eq!(err.valid_up_to(), 2);
        assert_eq!(err.kind(), Utf8ErrorKind::Truncated);
        assert!(is_valid_string_nt(b"abc\0\xFF"));
        assert!(!is_valid_string(b"abc\0\xFF"));
        assert!(is_valid_string_nt(b"\0"));
        assert!(!is_valid_string_nt(b"\xE2\x82\0\xAC"));
    }
}
