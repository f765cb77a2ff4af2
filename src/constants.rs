//! Grammar bytes and decoder tuning defaults.
//!
//! The bencode grammar is defined in [BEP-3]. Every marker is a single ASCII byte.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

// ============================================================================
// Type prefixes
// ============================================================================

/// Prefix of an integer literal (`i42e`)
pub const INTEGER_PREFIX: u8 = b'i';

/// Prefix of a list (`l...e`)
pub const LIST_PREFIX: u8 = b'l';

/// Prefix of a dictionary (`d...e`)
pub const DICT_PREFIX: u8 = b'd';

// ============================================================================
// Delimiters
// ============================================================================

/// Terminates integers, lists, and dictionaries
pub const END_SUFFIX: u8 = b'e';

/// Separates a byte string's length from its payload
pub const LENGTH_SEPARATOR: u8 = b':';

/// Sign of a negative integer
pub const MINUS_SIGN: u8 = b'-';

// ============================================================================
// Decoder defaults
// ============================================================================

/// Maximum nesting of lists and dictionaries before decoding is aborted
pub const DEFAULT_MAX_DEPTH: usize = 64;
