//! bendec - A bencode codec
//!
//! Decodes bencode ([BEP-3]) from byte slices or buffered readers into a [`Value`]
//! tree and writes values back out in canonical form.
//!
//! # Modules
//!
//! - [`bencode`] - Value model, decoder and encoder
//! - [`constants`] - Grammar bytes and decoder defaults
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod bencode;
pub mod constants;

pub use bencode::{
    decode, decode_from, decode_prefix, encode, encode_to, BencodeError, Decoder, DecoderConfig,
    Kind, Value,
};
