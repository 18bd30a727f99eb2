/*!
Named constants shared by the decoder and encoder.
*/

/// Returned by [`encode`](crate::encode) and
/// [`length_for_codepoint`](crate::length_for_codepoint) when the codepoint is
/// greater than [`MAX_CODEPOINT`].
///
/// This never collides with a real codepoint or an encoded length.
pub const INVALID_CODEPOINT: u32 = u32::MAX;

/// The Unicode replacement character U+FFFD, produced by the decoder for any
/// malformed input.
pub const REPLACEMENT_CHAR: u32 = 0xFFFD;

/// UTF-8 encoding of [`REPLACEMENT_CHAR`].
pub const REPLACEMENT_CHAR_UTF8: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// The largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// The longest UTF-8 encoding of a single codepoint, in bytes.
pub const MAX_UTF8_LEN: usize = 4;
