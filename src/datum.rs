// Decoded value tree. Strongly-typed dates, everything else plain JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde_json::Value;

/// Output of a schema-directed decode: the shapes JSON can carry, plus a
/// concrete [`Datum::Date`] node for schema-dated fields.
///
/// Conversion from [`serde_json::Value`] is lossless and never guesses at
/// dates; `Date` nodes only arise when the transform engine applies a date
/// descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Datum>),
    Object(IndexMap<String, Datum>),
}

impl Datum {
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Datum]> {
        match self {
            Datum::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Datum>> {
        match self {
            Datum::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Datum::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Back to plain JSON. Dates render as RFC 3339 UTC, seconds precision
    /// when the instant is whole, milliseconds otherwise.
    pub fn into_value(self) -> Value {
        match self {
            Datum::Null => Value::Null,
            Datum::Bool(b) => Value::Bool(b),
            Datum::Number(n) => Value::Number(n),
            Datum::String(s) => Value::String(s),
            Datum::Date(d) => Value::String(render_date(&d)),
            Datum::Array(items) => Value::Array(items.into_iter().map(Datum::into_value).collect()),
            Datum::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k, v.into_value());
                }
                Value::Object(out)
            }
        }
    }
}

impl From<Value> for Datum {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Datum::Null,
            Value::Bool(b) => Datum::Bool(b),
            Value::Number(n) => Datum::Number(n),
            Value::String(s) => Datum::String(s),
            Value::Array(items) => Datum::Array(items.into_iter().map(Datum::from).collect()),
            Value::Object(map) => {
                let mut out = IndexMap::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k, Datum::from(v));
                }
                Datum::Object(out)
            }
        }
    }
}

pub(crate) fn render_date(date: &DateTime<Utc>) -> String {
    if date.timestamp_subsec_millis() == 0 {
        date.to_rfc3339_opts(SecondsFormat::Secs, true)
    } else {
        date.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
