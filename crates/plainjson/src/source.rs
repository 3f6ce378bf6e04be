//! Input model for encoding. A [`Source`] is either already plain (primitive
//! or container) or an object whose shape is discovered through the
//! [`Serializable`] capability set.

use core::fmt;

use crate::value::Number;

/// Capabilities an object-typed value may expose, probed by the normalizer
/// in a fixed priority order: replacement, date/time record, entry
/// traversal, then plain field enumeration. Every method has a default so a
/// type opts into exactly the capabilities it has; overlapping capabilities
/// resolve to the most specific one.
pub trait Serializable {
    /// Replacement value encoded instead of this object. The replacement is
    /// normalized in turn, so it may itself be custom-serializable.
    fn json_replacement(&self) -> Option<Source> {
        None
    }

    /// Field set for date/time values, emitted as a record with exactly
    /// these fields. Takes precedence over [`entries`](Self::entries) and
    /// [`fields`](Self::fields) so date/time values never fall through to
    /// generic enumeration.
    fn datetime_record(&self) -> Option<Vec<(String, Source)>> {
        None
    }

    /// Entry traversal for collection-shaped objects that are not native
    /// lists or maps. Entries must come back in the type's own iteration
    /// order (last-in-first-out for a stack); the normalizer never reorders
    /// them.
    fn entries(&self) -> Option<Entries> {
        None
    }

    /// Publicly visible fields in declaration order. Only list what external
    /// code may see; anything not listed stays out of the output, which is
    /// how non-public state is excluded.
    fn fields(&self) -> Vec<(String, Source)> {
        Vec::new()
    }
}

/// Materialized traversal of an iterable object.
pub enum Entries {
    Positional(Vec<Source>),
    Keyed(Vec<(String, Source)>),
}

/// An arbitrary caller-supplied value, before normalization.
pub enum Source {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Source>),
    Map(Vec<(String, Source)>),
    Object(Box<dyn Serializable>),
}

impl Source {
    pub fn object<T: Serializable + 'static>(value: T) -> Self {
        Source::Object(Box::new(value))
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Null => f.write_str("Null"),
            Source::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Source::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Source::String(s) => f.debug_tuple("String").field(s).finish(),
            Source::List(items) => f.debug_tuple("List").field(items).finish(),
            Source::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Source::Object(_) => f.write_str("Object(..)"),
        }
    }
}

impl From<bool> for Source {
    fn from(b: bool) -> Self {
        Source::Bool(b)
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Source::String(s.to_string())
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        Source::String(s)
    }
}

impl From<Vec<Source>> for Source {
    fn from(items: Vec<Source>) -> Self {
        Source::List(items)
    }
}

macro_rules! impl_source_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Source {
                fn from(n: $ty) -> Self {
                    Source::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_source_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<serde_json::Value> for Source {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Source::Null,
            serde_json::Value::Bool(b) => Source::Bool(b),
            serde_json::Value::Number(n) => Source::Number(Number::from(n)),
            serde_json::Value::String(s) => Source::String(s),
            serde_json::Value::Array(items) => {
                Source::List(items.into_iter().map(Source::from).collect())
            }
            serde_json::Value::Object(entries) => Source::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Source::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(feature = "chrono")]
mod datetime {
    use chrono::{DateTime, FixedOffset, Utc};

    use super::{Serializable, Source};

    const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

    impl Serializable for DateTime<Utc> {
        fn datetime_record(&self) -> Option<Vec<(String, Source)>> {
            Some(vec![
                (
                    "date".to_string(),
                    Source::from(self.format(DATE_FORMAT).to_string()),
                ),
                ("timezone_type".to_string(), Source::from(3)),
                ("timezone".to_string(), Source::from("UTC")),
            ])
        }
    }

    impl Serializable for DateTime<FixedOffset> {
        fn datetime_record(&self) -> Option<Vec<(String, Source)>> {
            Some(vec![
                (
                    "date".to_string(),
                    Source::from(self.format(DATE_FORMAT).to_string()),
                ),
                ("timezone_type".to_string(), Source::from(1)),
                ("timezone".to_string(), Source::from(self.offset().to_string())),
            ])
        }
    }

    impl From<DateTime<Utc>> for Source {
        fn from(dt: DateTime<Utc>) -> Self {
            Source::object(dt)
        }
    }

    impl From<DateTime<FixedOffset>> for Source {
        fn from(dt: DateTime<FixedOffset>) -> Self {
            Source::object(dt)
        }
    }
}
