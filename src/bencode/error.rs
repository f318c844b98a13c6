use thiserror::Error;

/// Errors produced by [`decode`](super::decode).
///
/// Decoding is all-or-nothing: on any of these, no partial tree is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before the current value was complete.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A byte that cannot start or continue the current production.
    #[error("unexpected token {0:?} at offset {1}")]
    UnexpectedToken(char, usize),

    /// A byte string length prefix that is not a decimal number, or one too
    /// large to represent.
    #[error("invalid string length at offset {0}")]
    InvalidLength(usize),

    /// A dictionary key position holding something other than a byte string.
    #[error("dictionary key at offset {0} is not a byte string")]
    InvalidKey(usize),

    /// An integer outside the signed 64-bit range.
    #[error("integer overflow at offset {0}")]
    IntegerOverflow(usize),

    /// A zero-padded integer such as `i04e`, or the non-value `i-0e`.
    #[error("leading zero in integer at offset {0}")]
    LeadingZero(usize),

    /// Nesting beyond the recursion ceiling.
    #[error("nesting too deep")]
    NestingTooDeep,
}
