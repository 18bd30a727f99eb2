/*!
Encoding of codepoints into their shortest UTF-8 form.

The `try_` routines report failures as [`EncodeError`]. The plain routines
return the written length, `0` when the buffer is too small, or
[`INVALID_CODEPOINT`](crate::INVALID_CODEPOINT) for a codepoint above
U+10FFFF. Nothing is written on failure, except the terminator that the
null-terminated encoder leaves behind.
*/

use log::trace;

use crate::error::EncodeError;
use crate::util::utf8::{is_valid_codepoint, length_for_codepoint};

/// Writes the `len` byte encoding of `codepoint` to the front of `buf`.
///
/// Continuation bytes are filled from the back, six bits at a time, and the
/// lead byte takes whatever is left.
#[cfg_attr(feature = "perf-inline", inline(always))]
fn write_encoded(buf: &mut [u8], mut codepoint: u32, len: usize) {
    if len == 1 {
        buf[0] = codepoint as u8;
        return;
    }
    for byte in buf[1..len].iter_mut().rev() {
        *byte = (codepoint & 0x3F) as u8 | 0x80;
        codepoint >>= 6;
    }
    let lead_bits = (0xF0u32 << (4 - len)) as u8;
    buf[0] = lead_bits | codepoint as u8;
}

/// Returns the encoded length of `codepoint`, rejecting anything above
/// U+10FFFF.
fn checked_len(codepoint: u32) -> Result<usize, EncodeError> {
    if !is_valid_codepoint(codepoint) {
        trace!("refusing to encode codepoint {:#X}", codepoint);
        return Err(EncodeError::InvalidCodepoint { codepoint });
    }
    Ok(length_for_codepoint(codepoint) as usize)
}

/// Encodes `codepoint` into the front of `buf` and returns the number of
/// bytes written.
pub fn try_encode(buf: &mut [u8], codepoint: u32) -> Result<usize, EncodeError> {
    let len = checked_len(codepoint)?;
    if len > buf.len() {
        trace!("{} bytes needed to encode {:#X}, have {}", len, codepoint, buf.len());
        return Err(EncodeError::BufferTooSmall { needed: len, capacity: buf.len() });
    }
    write_encoded(buf, codepoint, len);
    Ok(len)
}

/// Null-terminated version of [`try_encode`]: a zero byte is written right
/// after the encoded character, and the returned length excludes it.
///
/// If `buf` can not hold the character and the terminator, a single zero
/// byte is written at the front (when `buf` is not empty) so that it still
/// holds a valid empty string.
pub fn try_encode_nt(buf: &mut [u8], codepoint: u32) -> Result<usize, EncodeError> {
    let len = checked_len(codepoint)?;
    let needed = len + 1;
    if needed > buf.len() {
        trace!("{} bytes needed to encode {:#X}, have {}", needed, codepoint, buf.len());
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        return Err(EncodeError::BufferTooSmall { needed, capacity: buf.len() });
    }
    write_encoded(buf, codepoint, len);
    buf[len] = 0;
    Ok(len)
}

/// Encodes `codepoint` into the front of `buf`.
///
/// Returns the number of bytes written (1 to 4), `0` if `buf` is too small,
/// or [`INVALID_CODEPOINT`](crate::INVALID_CODEPOINT) if `codepoint` is
/// greater than U+10FFFF.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn encode(buf: &mut [u8], codepoint: u32) -> u32 {
    match try_encode(buf, codepoint) {
        Ok(len) => len as u32,
        Err(err) => err.sentinel(),
    }
}

/// Null-terminated version of [`encode`]. See [`try_encode_nt`].
#[cfg_attr(feature = "perf-inline", inline(always))]
pub fn encode_nt(buf: &mut [u8], codepoint: u32) -> u32 {
    match try_encode_nt(buf, codepoint) {
        Ok(len) => len as u32,
        Err(err) => err.sentinel(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::INVALID_CODEPOINT;

    #[test]
    fn encodes_each_length() {
        let mut buf = [0u8; 4];
        assert_eq!(encode(&mut buf, 0x61), 1);
        assert_eq!(&buf[..1], b"a");
        assert_eq!(encode(&mut buf, 0xE9), 2);
        assert_eq!(&buf[..2], "é".as_bytes());
        assert_eq!(encode(&mut buf, 0x20AC), 3);
        assert_eq!(&buf[..3], "€".as_bytes());
        assert_eq!(encode(&mut buf, 0x1F602), 4);
        assert_eq!(&buf, "😂".as_bytes());
    }

    #[test]
    fn rejects_invalid_codepoints() {
        let mut buf = [0xAAu8; 4];
        assert_eq!(encode(&mut buf, 0x110000), INVALID_CODEPOINT);
        assert_eq!(encode(&mut buf, u32::MAX), INVALID_CODEPOINT);
        assert_eq!(encode_nt(&mut buf, 0x110000), INVALID_CODEPOINT);
        assert_eq!(buf, [0xAA; 4]);
        assert_eq!(
            try_encode(&mut buf, 0x110000),
            Err(EncodeError::InvalidCodepoint { codepoint: 0x110000 })
        );
    }

    #[test]
    fn buffer_too_small() {
        let mut buf = [0xAAu8; 4];
        assert_eq!(encode(&mut buf[..2], 0x20AC), 0);
        assert_eq!(buf, [0xAA; 4]);
        assert_eq!(encode(&mut [], 0x61), 0);
        assert_eq!(
            try_encode(&mut buf[..3], 0x1F602),
            Err(EncodeError::BufferTooSmall { needed: 4, capacity: 3 })
        );
    }

    #[test]
    fn null_terminated() {
        let mut buf = [0xAAu8; 5];
        assert_eq!(encode_nt(&mut buf, 0x1F602), 4);
        assert_eq!(&buf, "😂\0".as_bytes());

        let mut buf = [0xAAu8; 4];
        assert_eq!(encode_nt(&mut buf, 0x1F602), 0);
        assert_eq!(buf, [0x00, 0xAA, 0xAA, 0xAA]);

        let mut buf = [0xAAu8; 2];
        assert_eq!(encode_nt(&mut buf, 0x61), 1);
        assert_eq!(buf, [0x61, 0x00]);
        assert_eq!(encode_nt(&mut [], 0x61), 0);
    }
}
