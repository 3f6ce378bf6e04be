#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod source;
pub mod value;

pub mod decode;
pub mod encode;

pub use crate::encode::normalize::normalize;
pub use crate::error::{Error, Result, codes};
pub use crate::options::{DecodeOptions, EncodeOptions, Flags};
pub use crate::source::{Entries, Serializable, Source};
pub use crate::value::{Number, Value};

/// Encodes `value` as JSON with the default options: slashes and non-ASCII
/// text are left unescaped.
pub fn encode(value: &Source) -> Result<String> {
    encode_with(value, &EncodeOptions::default())
}

pub fn encode_with(value: &Source, options: &EncodeOptions) -> Result<String> {
    crate::encode::encode_value_to_string(value, options)
}

/// Encodes `value` as JSON safe to embed in HTML markup or a `<script>`
/// block: `< > & " '` come out as Unicode escapes and `/` as `\/`.
pub fn html_encode(value: &Source) -> Result<String> {
    crate::encode::encode_value_to_string(value, &EncodeOptions::html())
}

/// Decodes a JSON document into a plain [`Value`] tree; object key order is
/// preserved. An empty input decodes to [`Value::Null`].
pub fn decode(json: &str) -> Result<Value> {
    decode_with(json, &DecodeOptions::default())
}

pub fn decode_with(json: &str, options: &DecodeOptions) -> Result<Value> {
    crate::decode::decode_str(json, options)
}
