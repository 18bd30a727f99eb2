/*!
A strict UTF-8 codec over raw byte buffers.

This crate decodes UTF-8 into codepoints, encodes codepoints back into their
shortest UTF-8 form, and validates buffers against truncated, overlong and
out-of-range encodings. Every routine is a pure function of the buffer it is
given: nothing is allocated, cached or retained between calls.

Most routines come in two flavours. The bounded one looks at the whole slice.
The `_nt` one treats the first zero byte (or the end of the slice) as the end
of a null-terminated string.

# Example

```
use utf8_codec::{decode, encode, DecodeResult};

let mut buf = [0; 4];
let len = encode(&mut buf, 0x20AC);
assert_eq!(&buf[..len as usize], "€".as_bytes());
assert_eq!(decode(&buf), DecodeResult { codepoint: 0x20AC, len: 3 });

// Malformed input is replaced with U+FFFD, one byte at a time.
assert_eq!(decode(&[0xE2, 0x82]), DecodeResult::REPLACEMENT);
```
*/

pub use consts::{
    INVALID_CODEPOINT, MAX_CODEPOINT, MAX_UTF8_LEN, REPLACEMENT_CHAR, REPLACEMENT_CHAR_UTF8,
};
pub use decode::{
    decode, decode_iter, decode_iter_nt, decode_nt, try_decode, try_decode_nt, DecodeIter,
    DecodeResult,
};
pub use encode::{encode, encode_nt, try_encode, try_encode_nt};
pub use error::{EncodeError, Utf8Error, Utf8ErrorKind};
pub use scan::{count_chars, count_chars_nt, is_ascii_string, is_ascii_string_nt};
pub use util::utf8::{
    is_ascii, is_continuation, is_valid_codepoint, is_valid_lead, length_for_codepoint,
    length_from_lead, seek_to_char_start,
};
pub use validate::{
    is_overlong, is_oversize, is_valid_char, is_valid_char_nt, is_valid_string,
    is_valid_string_nt, validate_char, validate_char_nt, validate_string, validate_string_nt,
};

pub mod consts;
mod decode;
mod encode;
mod error;
mod scan;
mod util;
mod validate;
