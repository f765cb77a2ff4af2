use thiserror::Error;

use super::value::Kind;

/// Errors produced while decoding or encoding bencode.
///
/// Decoding is all-or-nothing: any of these aborts the whole value and no partial
/// tree is returned.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The input ended where a value was required.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// An integer literal was malformed.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// A byte string length prefix contained non-digit characters.
    #[error("string length had non-integer characters")]
    InvalidStringLength,

    /// A byte string declared more bytes than the input held.
    #[error("string had mismatched length: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A dictionary key decoded to something other than a byte string.
    #[error("dictionary keys must be strings, found {0}")]
    NonStringKey(Kind),

    /// The input ended before a list's closing marker.
    #[error("unterminated list")]
    UnterminatedList,

    /// The input ended before a dictionary's closing marker.
    #[error("unterminated dictionary")]
    UnterminatedDict,

    /// The first byte of a value was not a known type prefix.
    #[error("invalid type prefix: {0:#04x}")]
    InvalidPrefix(u8),

    /// Lists and dictionaries were nested deeper than the configured limit.
    #[error("nesting too deep")]
    NestingTooDeep,

    /// Bytes remained after a complete value was decoded from a buffer.
    #[error("trailing data after value")]
    TrailingData,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
