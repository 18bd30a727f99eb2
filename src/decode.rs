/*!
Decoding of single characters into codepoints.

The decoder never fails loudly. Any malformed character decodes to
[`DecodeResult::REPLACEMENT`], which reports a length of 1 so that callers can
resynchronise one byte at a time. A buffer that genuinely contains U+FFFD
decodes to the same codepoint (with length 3); use [`try_decode`] when the two
must be told apart.
*/

use core::iter::FusedIterator;

use crate::consts::{MAX_UTF8_LEN, REPLACEMENT_CHAR};
use crate::error::Utf8Error;
use crate::util::{nt_char_window, nt_window};
use crate::validate::validate_char;

/// A decoded codepoint and the number of bytes it was decoded from.
///
/// The layout is two 32-bit fields, codepoint first.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodeResult {
    /// The decoded codepoint, or U+FFFD on error.
    pub codepoint: u32,
    /// The number of bytes consumed, 1 on error.
    pub len: u32,
}

impl DecodeResult {
    /// The result of decoding a malformed character.
    pub const REPLACEMENT: DecodeResult = DecodeResult::new(REPLACEMENT_CHAR, 1);

    /// The result of decoding at the terminator of a null-terminated string.
    pub const END: DecodeResult = DecodeResult::new(0, 1);

    /// Creates a result from a codepoint and the number of bytes it took.
    pub const fn new(codepoint: u32, len: u32) -> DecodeResult {
        DecodeResult { codepoint, len }
    }

    /// Returns true if the codepoint is U+FFFD, whether it was decoded from
    /// the input or substituted for an error.
    pub fn is_replacement(&self) -> bool {
        self.codepoint == REPLACEMENT_CHAR
    }

    /// Converts the codepoint into a `char`.
    ///
    /// This returns `None` for surrogate codepoints, which the validator
    /// accepts but `char` can not represent.
    pub fn to_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}

/// Assembles the codepoint of an already validated character of `len` bytes.
#[cfg_attr(feature = "perf-inline", inline(always))]
fn assemble(bytes: &[u8], len: usize) -> u32 {
    if len == 1 {
        return u32::from(bytes[0]);
    }
    let mut codepoint = u32::from(bytes[0]) & (0x7F >> len);
    for &byte in &bytes[1..len] {
        codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
    }
    codepoint
}

/// Decodes the character at the start of `bytes`, reporting why it is
/// invalid instead of substituting U+FFFD.
pub fn try_decode(bytes: &[u8]) -> Result<DecodeResult, Utf8Error> {
    let len = validate_char(bytes).map_err(|kind| Utf8Error::new(0, kind))?;
    Ok(DecodeResult::new(assemble(bytes, len), len as u32))
}

/// Null-terminated version of [`try_decode`].
///
/// An empty slice or a leading zero byte decodes to [`DecodeResult::END`].
pub fn try_decode_nt(bytes: &[u8]) -> Result<DecodeResult, Utf8Error> {
    match bytes.first() {
        None | Some(0) => Ok(DecodeResult::END),
        _ => try_decode(nt_char_window(bytes)),
    }
}

/// Decodes the character at the start of `bytes`.
///
/// Never consumes more than `bytes.len()` bytes. Malformed input (including
/// an empty slice) yields [`DecodeResult::REPLACEMENT`].
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn decode(bytes: &[u8]) -> DecodeResult {
    try_decode(bytes).unwrap_or(DecodeResult::REPLACEMENT)
}

/// Null-terminated version of [`decode`].
///
/// Returns [`DecodeResult::END`] at the terminator, which is distinct from
/// the error result.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn decode_nt(bytes: &[u8]) -> DecodeResult {
    try_decode_nt(bytes).unwrap_or(DecodeResult::REPLACEMENT)
}

/// An iterator over the characters of a buffer, yielding the offset of each
/// character along with its [`DecodeResult`].
///
/// Each step advances by the reported length, so malformed sequences are
/// walked one byte at a time.
#[derive(Clone, Debug)]
pub struct DecodeIter<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for DecodeIter<'a> {
    type Item = (usize, DecodeResult);

    fn next(&mut self) -> Option<(usize, DecodeResult)> {
        let rest = self.bytes.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let res = decode(rest);
        let at = self.pos;
        self.pos += res.len as usize;
        Some((at, res))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bytes.len().saturating_sub(self.pos);
        ((rest + MAX_UTF8_LEN - 1) / MAX_UTF8_LEN, Some(rest))
    }
}

impl FusedIterator for DecodeIter<'_> {}

/// Returns an iterator decoding every character of `bytes`.
pub fn decode_iter(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter { bytes, pos: 0 }
}

/// Returns an iterator decoding every character before the first zero byte
/// of `bytes`. The terminator itself is not yielded.
pub fn decode_iter_nt(bytes: &[u8]) -> DecodeIter<'_> {
    decode_iter(nt_window(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_length() {
        assert_eq!(decode(b"a"), DecodeResult::new(0x61, 1));
        assert_eq!(decode("é".as_bytes()), DecodeResult::new(0xE9, 2));
        assert_eq!(decode("€".as_bytes()), DecodeResult::new(0x20AC, 3));
        assert_eq!(decode("😂".as_bytes()), DecodeResult::new(0x1F602, 4));
        assert_eq!(decode(&[0xF4, 0x8F, 0xBF, 0xBF]), DecodeResult::new(0x10FFFF, 4));
    }

    #[test]
    fn errors_report_one_byte() {
        assert_eq!(decode(&[]), DecodeResult::REPLACEMENT);
        assert_eq!(decode(&[0xE2, 0x82]), DecodeResult::REPLACEMENT);
        assert_eq!(decode(&[0xF0, 0x9F, 0x98, 0x41]), DecodeResult::REPLACEMENT);
        assert_eq!(decode(&[0xC0, 0x80]), DecodeResult::REPLACEMENT);
        assert_eq!(decode(&[0xF5, 0x80, 0x80, 0x80]), DecodeResult::REPLACEMENT);
    }

    #[test]
    fn genuine_replacement_char() {
        let res = decode(&crate::consts::REPLACEMENT_CHAR_UTF8);
        assert!(res.is_replacement());
        assert_eq!(res.len, 3);
        assert!(try_decode(&crate::consts::REPLACEMENT_CHAR_UTF8).is_ok());
        assert!(try_decode(&[0xFF]).is_err());
    }

    #[test]
    fn null_terminated() {
        assert_eq!(decode_nt(b"\0abc"), DecodeResult::END);
        assert_eq!(decode_nt(b""), DecodeResult::END);
        assert_eq!(decode_nt(b"\xE2\x82\0"), DecodeResult::REPLACEMENT);
        assert_eq!(decode_nt("€\0".as_bytes()), DecodeResult::new(0x20AC, 3));
    }

    #[test]
    fn iterates_with_recovery() {
        let bytes = b"a\xF0\x9F\x98b\xC3\xA9";
        let res: Vec<_> = decode_iter(bytes).map(|(at, res)| (at, res.codepoint)).collect();
        assert_eq!(
            res,
            vec![(0, 0x61), (1, 0xFFFD), (2, 0xFFFD), (3, 0xFFFD), (4, 0x62), (5, 0xE9)]
        );
        assert_eq!(decode_iter_nt(b"ab\0cd").count(), 2);
        assert_eq!(decode_iter(b"").next(), None);
    }
}
