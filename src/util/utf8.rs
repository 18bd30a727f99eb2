/*!
Byte-level UTF-8 primitives.

Everything in this module looks at a single byte (or a single codepoint) and
never at the bytes around it. The validator and the codec are built on top of
these.
*/

use crate::consts::{INVALID_CODEPOINT, MAX_CODEPOINT};

/// Returns true if and only if the given byte is a continuation byte, i.e. it
/// has the form `0b10xx_xxxx`.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Returns true if the given byte may start an encoded character.
///
/// This is deliberately loose. It rejects continuation bytes and everything
/// above `0xF8`, but leaves `0xC0`, `0xC1` and `0xF5..=0xF8` to the overlong
/// and oversize checks of the validator.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_valid_lead(byte: u8) -> bool {
    byte <= 0xF8 && !is_continuation(byte)
}

/// Returns true if and only if the given byte is 7-bit ASCII.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_ascii(byte: u8) -> bool {
    byte < 0x80
}

/// Given a UTF-8 leading byte, this returns the total number of code units
/// in the following encoded codepoint.
///
/// Anything that is not a lead byte (a continuation byte, or one of
/// `0xF8..=0xFF`) yields 1, so that callers scanning corrupt input always
/// make progress.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn length_from_lead(byte: u8) -> usize {
    if byte & 0b1000_0000 == 0b0000_0000 {
        1
    } else if byte & 0b1110_0000 == 0b1100_0000 {
        2
    } else if byte & 0b1111_0000 == 0b1110_0000 {
        3
    } else if byte & 0b1111_1000 == 0b1111_0000 {
        4
    } else {
        1
    }
}

/// Returns the number of bytes needed to encode `codepoint`, or
/// [`INVALID_CODEPOINT`] if it is greater than U+10FFFF.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn length_for_codepoint(codepoint: u32) -> u32 {
    if codepoint < 0x80 {
        1
    } else if codepoint < 0x800 {
        2
    } else if codepoint < 0x10000 {
        3
    } else if codepoint <= MAX_CODEPOINT {
        4
    } else {
        INVALID_CODEPOINT
    }
}

/// Returns true if `codepoint` is no greater than U+10FFFF.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn is_valid_codepoint(codepoint: u32) -> bool {
    codepoint <= MAX_CODEPOINT
}

/// Walks backwards from `pos` to the first byte of the character containing
/// it and returns that offset.
///
/// Offsets past the end of `bytes` are clamped to `bytes.len()`, which is
/// always a boundary. The scan never goes below 0.
///
/// If `bytes` is not valid UTF-8, then the result of this routine is
/// unspecified (but it never panics).
pub fn seek_to_char_start(bytes: &[u8], pos: usize) -> usize {
    let mut pos = pos.min(bytes.len());
    // Other than ASCII (where the most significant bit is never set), valid
    // starting bytes always have their most significant two bits set, where
    // as continuation bytes never have their second most significant bit set.
    while pos > 0 && bytes.get(pos).map_or(false, |&b| is_continuation(b)) {
        pos -= 1;
    }
    pos
}
