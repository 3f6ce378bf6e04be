//! Encoding pipeline: normalize, verify depth and number finiteness, then
//! hand off to the serde_json text encoder.

pub(crate) mod formatter;
pub mod normalize;

use serde::Serialize;

use crate::error::{Error, Result, codes};
use crate::options::EncodeOptions;
use crate::source::Source;
use crate::value::Value;

pub fn encode_value_to_string(source: &Source, options: &EncodeOptions) -> Result<String> {
    let value = normalize::normalize(source)?;
    verify(&value, options.max_depth)?;

    let mut buf = Vec::with_capacity(128);
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, formatter::EscapeFormatter::new(options.flags));
    value
        .serialize(&mut ser)
        .map_err(|e| Error::from_codec(&e))?;
    String::from_utf8(buf).map_err(|_| Error::from_code(codes::UTF8))
}

/// Checks the plain tree against encoder limits before serialization: each
/// container consumes one level of `max_depth`, and every number must be
/// finite (JSON has no Inf/NaN).
pub(crate) fn verify(value: &Value, max_depth: usize) -> Result<()> {
    match value {
        Value::Number(n) if !n.is_finite() => Err(Error::from_code(codes::INF_OR_NAN)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
        Value::List(items) => {
            if max_depth == 0 {
                return Err(Error::from_code(codes::DEPTH));
            }
            for item in items {
                verify(item, max_depth - 1)?;
            }
            Ok(())
        }
        Value::Map(entries) => {
            if max_depth == 0 {
                return Err(Error::from_code(codes::DEPTH));
            }
            for (_, item) in entries {
                verify(item, max_depth - 1)?;
            }
            Ok(())
        }
    }
}
