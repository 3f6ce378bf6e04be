//! The normalization core: rewrites a [`Source`] into a plain [`Value`]
//! tree of primitives, lists, and ordered maps.

use crate::error::{Error, Result, codes};
use crate::source::{Entries, Serializable, Source};
use crate::value::Value;

/// Replacement hops followed before a custom-serialization chain is treated
/// as cyclic.
const REPLACEMENT_BUDGET: usize = 128;

/// Rewrites `source` into a plain value tree. Primitives pass through;
/// containers are rebuilt element by element in order; object-typed values
/// are resolved through their capabilities, most specific first. Never
/// mutates the input, never fails on finite acyclic input.
pub fn normalize(source: &Source) -> Result<Value> {
    normalize_guarded(source, 0)
}

fn normalize_guarded(source: &Source, hops: usize) -> Result<Value> {
    match source {
        Source::Null => Ok(Value::Null),
        Source::Bool(b) => Ok(Value::Bool(*b)),
        Source::Number(n) => Ok(Value::Number(*n)),
        Source::String(s) => Ok(Value::String(s.clone())),
        Source::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(normalize_guarded(item, hops)?);
            }
            Ok(Value::List(out))
        }
        Source::Map(entries) => keyed(entries.iter(), hops),
        Source::Object(obj) => normalize_object(obj.as_ref(), hops),
    }
}

fn normalize_object(obj: &dyn Serializable, hops: usize) -> Result<Value> {
    // Priority: explicit serialization intent beats the date/time record
    // shape, which beats structural traversal, which beats plain field
    // enumeration.
    if let Some(replacement) = obj.json_replacement() {
        // The replacement may itself be custom-serializable; follow the
        // chain, but refuse unbounded ones.
        if hops >= REPLACEMENT_BUDGET {
            return Err(Error::from_code(codes::RECURSION));
        }
        return normalize_guarded(&replacement, hops + 1);
    }

    if let Some(record) = obj.datetime_record() {
        // Date/time values keep their own field set; generic enumeration
        // must not run for them.
        return keyed(record.iter(), hops);
    }

    if let Some(entries) = obj.entries() {
        return match entries {
            // An object-typed source with zero entries still encodes as
            // `{}`, not `[]`.
            Entries::Positional(items) if items.is_empty() => Ok(Value::Map(Vec::new())),
            Entries::Positional(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in &items {
                    out.push(normalize_guarded(item, hops)?);
                }
                Ok(Value::List(out))
            }
            Entries::Keyed(entries) => keyed(entries.iter(), hops),
        };
    }

    keyed(obj.fields().iter(), hops)
}

fn keyed<'a, I>(entries: I, hops: usize) -> Result<Value>
where
    I: Iterator<Item = &'a (String, Source)>,
{
    let mut out = Vec::new();
    for (key, value) in entries {
        out.push((key.clone(), normalize_guarded(value, hops)?));
    }
    Ok(Value::Map(out))
}
