//! Decoding pipeline: delegate parsing to serde_json, then convert to the
//! plain value tree and verify the depth limit.

use crate::error::{Error, Result};
use crate::options::DecodeOptions;
use crate::value::Value;

pub fn decode_str(json: &str, options: &DecodeOptions) -> Result<Value> {
    if json.is_empty() {
        return Ok(Value::Null);
    }
    let parsed: serde_json::Value =
        serde_json::from_str(json).map_err(|e| Error::from_codec(&e))?;
    let value = Value::from(parsed);
    crate::encode::verify(&value, options.max_depth)?;
    Ok(value)
}
