//! Bencode decoding and canonical encoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and peer-wire
//! extension messages.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Integers have no size limit and are held as [`num_bigint::BigInt`]. Byte strings
//! are raw bytes; [`Value::as_str`] gives a UTF-8 view when one exists.
//!
//! # Examples
//!
//! ## Decoding
//!
//! ```
//! use bendec::{decode, Value};
//!
//! let value = decode(b"d3:foo3:bar4:spaml1:a1:bee").unwrap();
//! assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
//! assert_eq!(value.get(b"spam").and_then(|v| v.as_list()).map(|l| l.len()), Some(2));
//! ```
//!
//! ## Streaming
//!
//! A [`Decoder`] reads from any [`std::io::BufRead`] and stops right after the value,
//! leaving the rest of the stream untouched.
//!
//! ```
//! use bendec::{Decoder, Value};
//! use std::io::{BufRead, Cursor};
//!
//! let mut reader = Cursor::new(b"i7etail".to_vec());
//! let value = Decoder::new(&mut reader).decode_value().unwrap();
//! assert_eq!(value, Value::integer(7));
//! assert_eq!(reader.fill_buf().unwrap(), b"tail");
//! ```
//!
//! ## Encoding
//!
//! Dictionaries are kept unordered in memory and sorted by key when written, so
//! equal values always encode to the same bytes.
//!
//! ```
//! use bendec::{encode, Value};
//!
//! let value = Value::dict([
//!     ("key2", Value::dict(Vec::<(&str, Value)>::new())),
//!     ("key1", Value::string("tested")),
//! ]);
//! assert_eq!(encode(&value).unwrap(), b"d4:key16:tested4:key2dee");
//! ```
//!
//! # Error Handling
//!
//! Every failure is a [`BencodeError`]; decoding never returns a partial value.
//!
//! - [`BencodeError::InvalidInteger`] - Malformed integer literal
//! - [`BencodeError::InvalidStringLength`] - Non-digit in a string length
//! - [`BencodeError::LengthMismatch`] - String shorter than its declared length
//! - [`BencodeError::NonStringKey`] - Dictionary key that is not a string
//! - [`BencodeError::UnterminatedList`] / [`BencodeError::UnterminatedDict`]
//! - [`BencodeError::InvalidPrefix`] - Unknown type byte
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded
//! - [`BencodeError::TrailingData`] - Extra data after the value ([`decode`] only)
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_from, decode_prefix, Decoder, DecoderConfig};
pub use encode::{encode, encode_to};
pub use error::BencodeError;
pub use value::{Kind, Value};
