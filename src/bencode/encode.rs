use super::error::BencodeError;
use super::value::{sorted_entries, Value};
use crate::constants::{DICT_PREFIX, END_SUFFIX, LENGTH_SEPARATOR, LIST_PREFIX};
use std::io::Write;
use tracing::trace;

/// Encodes a bencode value to a byte vector.
///
/// The output follows the canonical bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (keys sorted byte-wise)
///
/// # Errors
///
/// Writing into a `Vec` cannot fail, so in practice this always returns `Ok`.
///
/// # Examples
///
/// ```
/// use bendec::{encode, Value};
///
/// assert_eq!(encode(&Value::integer(42)).unwrap(), b"i42e");
/// assert_eq!(encode(&Value::string("hello")).unwrap(), b"5:hello");
///
/// let list = Value::List(vec![Value::integer(1), Value::string("two")]);
/// assert_eq!(encode(&list).unwrap(), b"li1e3:twoe");
///
/// let dict = Value::dict([("b", Value::integer(2)), ("a", Value::integer(1))]);
/// assert_eq!(encode(&dict).unwrap(), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Writes the canonical encoding of `value` to `writer`.
///
/// Nothing is buffered beyond what the writer does itself; wrap unbuffered sinks in a
/// [`std::io::BufWriter`].
///
/// # Errors
///
/// Returns [`BencodeError::Io`] if the writer fails. Output written before the
/// failure is not rolled back.
pub fn encode_to<W: Write>(value: &Value, mut writer: W) -> Result<(), BencodeError> {
    encode_value(value, &mut writer)?;
    trace!("Encoded bencode {}", value.kind());
    Ok(())
}

fn encode_value<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => encode_bytes(b, writer)?,
        Value::List(l) => {
            writer.write_all(&[LIST_PREFIX])?;
            for item in l {
                encode_value(item, writer)?;
            }
            writer.write_all(&[END_SUFFIX])?;
        }
        Value::Dict(d) => {
            writer.write_all(&[DICT_PREFIX])?;
            for (key, val) in sorted_entries(d) {
                encode_bytes(key, writer)?;
                encode_value(val, writer)?;
            }
            writer.write_all(&[END_SUFFIX])?;
        }
    }
    Ok(())
}

fn encode_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> Result<(), BencodeError> {
    write!(writer, "{}", bytes.len())?;
    writer.write_all(&[LENGTH_SEPARATOR])?;
    writer.write_all(bytes)?;
    Ok(())
}

fn decimal_len(mut n: usize) -> usize {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

fn bytes_len(bytes: &[u8]) -> usize {
    decimal_len(bytes.len()) + 1 + bytes.len()
}

impl Value {
    /// Encodes this value, see [`encode`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, BencodeError> {
        encode(self)
    }

    /// Exact length of this value's canonical encoding, computed without encoding it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bendec::Value;
    ///
    /// let value = Value::List(vec![Value::integer(-12), Value::string("spam")]);
    /// assert_eq!(value.encoded_len(), b"li-12e4:spame".len());
    /// ```
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Integer(i) => 2 + i.to_str_radix(10).len(),
            Value::Bytes(b) => bytes_len(b),
            Value::List(l) => 2 + l.iter().map(Value::encoded_len).sum::<usize>(),
            Value::Dict(d) => {
                2 + d
                    .iter()
                    .map(|(k, v)| bytes_len(k) + v.encoded_len())
                    .sum::<usize>()
            }
        }
    }
}
