use crate::consts::MAX_UTF8_LEN;

pub mod utf8;

/// Returns the part of `bytes` before the first zero byte.
///
/// Null-terminated routines run their bounded counterparts over this window.
/// A slice without any zero byte is treated as if it were terminated right
/// after its last byte, so nothing past the slice is ever read.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn nt_window(bytes: &[u8]) -> &[u8] {
    match memchr::memchr(0, bytes) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Like [`nt_window`], but only looks at the first `MAX_UTF8_LEN` bytes.
///
/// Single character routines never need more than that, so the search for
/// the terminator stays constant time however long the string is.
#[cfg_attr(feature = "perf-inline", inline(always))]
pub(crate) fn nt_char_window(bytes: &[u8]) -> &[u8] {
    nt_window(&bytes[..bytes.len().min(MAX_UTF8_LEN)])
}
