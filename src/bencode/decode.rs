use super::error::BencodeError;
use super::value::Value;
use crate::constants::{
    DEFAULT_MAX_DEPTH, DICT_PREFIX, END_SUFFIX, INTEGER_PREFIX, LENGTH_SEPARATOR, LIST_PREFIX,
    MINUS_SIGN,
};
use bytes::Bytes;
use num_bigint::BigInt;
use std::collections::HashMap;
use std::io::{BufRead, Read};
use tracing::{debug, trace};

/// Tuning knobs for a [`Decoder`].
///
/// # Examples
///
/// ```
/// use bendec::{Decoder, DecoderConfig};
///
/// let config = DecoderConfig::strict().with_max_depth(8);
/// let mut decoder = Decoder::with_config(&b"i03e"[..], config);
/// assert!(decoder.decode_value().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest allowed nesting of lists and dictionaries.
    pub max_depth: usize,
    /// Reject integers with leading zeros and `-0`.
    pub strict_integers: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_integers: false,
        }
    }
}

impl DecoderConfig {
    /// Default limits with canonical integer checking enabled.
    pub fn strict() -> Self {
        Self {
            strict_integers: true,
            ..Self::default()
        }
    }

    /// Sets the deepest allowed nesting of lists and dictionaries.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Turns rejection of leading zeros and `-0` on or off.
    pub fn with_strict_integers(mut self, strict: bool) -> Self {
        self.strict_integers = strict;
        self
    }
}

/// Decodes a single bencode value that must span the whole buffer.
///
/// # Errors
///
/// Returns [`BencodeError::TrailingData`] if bytes remain after the value, or any
/// other decode error if the input is malformed.
///
/// # Examples
///
/// ```
/// use bendec::{decode, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::integer(42));
/// assert!(decode(b"i42eextra").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let (value, consumed) = decode_prefix(data)?;

    if consumed != data.len() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

/// Decodes one value from the front of `data`, returning it with the number of bytes
/// it occupied. Anything after that is left alone.
///
/// # Examples
///
/// ```
/// use bendec::{decode_prefix, Value};
///
/// let (value, consumed) = decode_prefix(b"4:spamrest").unwrap();
/// assert_eq!(value, Value::string("spam"));
/// assert_eq!(consumed, 6);
/// ```
pub fn decode_prefix(data: &[u8]) -> Result<(Value, usize), BencodeError> {
    let mut decoder = Decoder::new(data);
    let value = decoder.decode_value()?;
    Ok((value, decoder.position() as usize))
}

/// Decodes one value from a buffered reader.
///
/// Only the bytes of that value are consumed. Pass `&mut reader` to keep using the
/// reader for whatever follows.
pub fn decode_from<R: BufRead>(reader: R) -> Result<Value, BencodeError> {
    Decoder::new(reader).decode_value()
}

/// A recursive-descent bencode decoder over any [`BufRead`] source.
///
/// Lookahead is a non-consuming peek at the reader's buffer, so the source is never
/// advanced past the end of the value being decoded.
///
/// # Examples
///
/// ```
/// use bendec::{Decoder, Value};
///
/// let mut decoder = Decoder::new(&b"i1e3:two"[..]);
/// assert_eq!(decoder.decode_value().unwrap(), Value::integer(1));
/// assert_eq!(decoder.decode_value().unwrap(), Value::string("two"));
/// assert_eq!(decoder.position(), 8);
/// ```
#[derive(Debug)]
pub struct Decoder<R> {
    reader: R,
    config: DecoderConfig,
    position: u64,
}

impl<R: BufRead> Decoder<R> {
    /// Creates a decoder with [`DecoderConfig::default`].
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DecoderConfig::default())
    }

    /// Creates a decoder with the given limits.
    pub fn with_config(reader: R, config: DecoderConfig) -> Self {
        Self {
            reader,
            config,
            position: 0,
        }
    }

    /// Number of bytes consumed from the reader so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The limits this decoder was created with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Borrows the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Returns the reader, positioned right after the last decoded value.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decodes exactly one value.
    pub fn decode_value(&mut self) -> Result<Value, BencodeError> {
        let start = self.position;
        match self.value(0) {
            Ok(value) => {
                trace!(
                    "Decoded bencode {} from {} bytes",
                    value.kind(),
                    self.position - start
                );
                Ok(value)
            }
            Err(e) => {
                debug!("Bencode decode failed at byte {}: {}", self.position, e);
                Err(e)
            }
        }
    }

    /// Decodes a bare byte string (`<length>:<bytes>`), rejecting any other type.
    pub fn decode_byte_string(&mut self) -> Result<Bytes, BencodeError> {
        self.byte_string()
    }

    fn peek(&mut self) -> Result<Option<u8>, BencodeError> {
        Ok(self.reader.fill_buf()?.first().copied())
    }

    fn advance(&mut self) {
        self.reader.consume(1);
        self.position += 1;
    }

    fn next_byte(&mut self) -> Result<Option<u8>, BencodeError> {
        let byte = self.peek()?;
        if byte.is_some() {
            self.advance();
        }
        Ok(byte)
    }

    fn value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        if depth > self.config.max_depth {
            return Err(BencodeError::NestingTooDeep);
        }

        match self.peek()? {
            None => Err(BencodeError::UnexpectedEof),
            Some(INTEGER_PREFIX) => {
                self.advance();
                self.integer()
            }
            Some(LIST_PREFIX) => {
                self.advance();
                self.list(depth)
            }
            Some(DICT_PREFIX) => {
                self.advance();
                self.dict(depth)
            }
            Some(b'0'..=b'9') => self.byte_string().map(Value::Bytes),
            Some(c) => Err(BencodeError::InvalidPrefix(c)),
        }
    }

    fn integer(&mut self) -> Result<Value, BencodeError> {
        let mut digits = Vec::new();
        loop {
            match self.next_byte()? {
                Some(END_SUFFIX) => break,
                Some(c @ b'0'..=b'9') => digits.push(c),
                Some(MINUS_SIGN) if digits.is_empty() => digits.push(MINUS_SIGN),
                Some(c) => {
                    return Err(BencodeError::InvalidInteger(format!(
                        "unexpected character {:?}",
                        c as char
                    )))
                }
                None => return Err(BencodeError::UnexpectedEof),
            }
        }

        let magnitude = digits.strip_prefix(&[MINUS_SIGN]).unwrap_or(&digits[..]);
        if magnitude.is_empty() {
            return Err(BencodeError::InvalidInteger("no digits".into()));
        }

        // Only "0" itself may start with a zero; this also rules out "-0".
        if self.config.strict_integers && magnitude[0] == b'0' && digits.len() > 1 {
            return Err(BencodeError::InvalidInteger(
                "leading zeros or negative zero".into(),
            ));
        }

        BigInt::parse_bytes(&digits, 10)
            .map(Value::Integer)
            .ok_or_else(|| BencodeError::InvalidInteger(String::from_utf8_lossy(&digits).into()))
    }

    fn byte_string(&mut self) -> Result<Bytes, BencodeError> {
        let mut len: usize = 0;
        let mut has_digits = false;
        loop {
            match self.next_byte()? {
                Some(LENGTH_SEPARATOR) if has_digits => break,
                Some(c @ b'0'..=b'9') => {
                    len = len
                        .checked_mul(10)
                        .and_then(|l| l.checked_add((c - b'0') as usize))
                        .ok_or(BencodeError::InvalidStringLength)?;
                    has_digits = true;
                }
                Some(_) => return Err(BencodeError::InvalidStringLength),
                None => return Err(BencodeError::UnexpectedEof),
            }
        }

        // Grows with the data actually read, so a huge declared length cannot force
        // a huge allocation up front.
        let mut buf = Vec::new();
        let read = (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;
        self.position += read as u64;

        if read != len {
            return Err(BencodeError::LengthMismatch {
                expected: len,
                actual: read,
            });
        }

        Ok(Bytes::from(buf))
    }

    fn list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let mut list = Vec::new();
        loop {
            match self.peek()? {
                None => return Err(BencodeError::UnterminatedList),
                Some(END_SUFFIX) => {
                    self.advance();
                    return Ok(Value::List(list));
                }
                Some(_) => list.push(self.value(depth + 1)?),
            }
        }
    }

    fn dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let mut dict = HashMap::new();
        loop {
            match self.peek()? {
                None => return Err(BencodeError::UnterminatedDict),
                Some(END_SUFFIX) => {
                    self.advance();
                    return Ok(Value::Dict(dict));
                }
                Some(_) => {
                    let key = match self.value(depth + 1)? {
                        Value::Bytes(b) => b,
                        other => return Err(BencodeError::NonStringKey(other.kind())),
                    };

                    let value = self.value(depth + 1)?;
                    // Repeated keys are not rejected; the later entry replaces the earlier.
                    dict.insert(key, value);
                }
            }
        }
    }
}
