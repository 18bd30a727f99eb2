/// The reason a single encoded character failed validation.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Utf8ErrorKind {
    /// The first byte is a continuation byte or greater than `0xF7`.
    InvalidLead,
    /// The lead byte announces more bytes than the window (or the string,
    /// before its terminator) holds.
    Truncated,
    /// One of the bytes following the lead is not of the form `0b10xx_xxxx`.
    BadContinuation,
    /// The character could have been encoded in fewer bytes.
    Overlong,
    /// The character decodes to a value above U+10FFFF.
    Oversize,
}

impl core::fmt::Display for Utf8ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match *self {
            Utf8ErrorKind::InvalidLead => "invalid lead byte",
            Utf8ErrorKind::Truncated => "truncated character",
            Utf8ErrorKind::BadContinuation => "invalid continuation byte",
            Utf8ErrorKind::Overlong => "overlong encoding",
            Utf8ErrorKind::Oversize => "codepoint above U+10FFFF",
        };
        f.write_str(msg)
    }
}

/// An error that occurs when a buffer does not hold valid UTF-8.
///
/// Besides the reason, this reports the offset of the first invalid
/// character, which is also the length of the longest valid prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Utf8Error {
    valid_up_to: usize,
    kind: Utf8ErrorKind,
}

impl Utf8Error {
    pub(crate) fn new(valid_up_to: usize, kind: Utf8ErrorKind) -> Utf8Error {
        Utf8Error { valid_up_to, kind }
    }

    /// The number of bytes before the first invalid character.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Why the character at [`Utf8Error::valid_up_to`] was rejected.
    pub fn kind(&self) -> Utf8ErrorKind {
        self.kind
    }
}

impl std::error::Error for Utf8Error {}

impl core::fmt::Display for Utf8Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid UTF-8 at offset {}: {}", self.valid_up_to, self.kind)
    }
}

/// An error that occurs when a codepoint can not be written to a buffer.
///
/// The two cases correspond to the two failure values of
/// [`encode`](crate::encode): [`INVALID_CODEPOINT`](crate::INVALID_CODEPOINT)
/// and `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The codepoint is greater than U+10FFFF.
    InvalidCodepoint { codepoint: u32 },
    /// The destination can not hold the encoded character (plus the
    /// terminator, for the null-terminated encoder).
    BufferTooSmall { needed: usize, capacity: usize },
}

impl EncodeError {
    /// The sentinel that the non-`Result` encoders return for this error.
    pub fn sentinel(&self) -> u32 {
        match *self {
            EncodeError::InvalidCodepoint { .. } => crate::consts::INVALID_CODEPOINT,
            EncodeError::BufferTooSmall { .. } => 0,
        }
    }
}

impl std::error::Error for EncodeError {}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            EncodeError::InvalidCodepoint { codepoint } => {
                write!(f, "codepoint {:#X} is greater than U+10FFFF", codepoint)
            }
            EncodeError::BufferTooSmall { needed, capacity } => {
                write!(f, "buffer of {} bytes is too small, {} bytes needed", capacity, needed)
            }
        }
    }
}
