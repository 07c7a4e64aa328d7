//! Schema-directed validation and conversion.
//!
//! One recursive procedure walks a value against a [`Descriptor`] and either
//! produces a normalized [`Datum`] tree or fails with a path-aware
//! diagnostic. The same procedure runs in both directions: decoding maps
//! wire keys to record keys and materializes dates, encoding maps record
//! keys back to wire keys and renders dates canonically.
//!
//! The walk is pure and all-or-nothing: inputs are never mutated, every
//! success returns a freshly built tree, and the first failure unwinds the
//! whole call.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use crate::datum::{render_date, Datum};
use crate::error::Error as CrateError;
use crate::schema::{Descriptor, Kind, Prop, TypeMap};

/// Defensive bound on value/schema nesting. Registry documents stay under
/// six levels; the guard exists for arbitrary maps fed by callers.
pub const MAX_DEPTH: usize = 64;

/// Selects which side of a [`Prop`] is the lookup key: the wire (JSON) key
/// when decoding, the record key when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Decode,
    Encode,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// A value did not match its descriptor. `key` and `parent` are empty
    /// at the root and omitted from the message when unset.
    #[error("Invalid value{}{}. Expected {} but got {}", key_clause(.key), parent_clause(.parent), .expected, .actual)]
    Invalid {
        expected: String,
        actual: String,
        key: String,
        parent: String,
    },
    /// A `Ref` named a descriptor missing from the type map. This is a
    /// configuration error, never a normal validation outcome, and unions
    /// do not swallow it.
    #[error("unresolved type reference {0:?}")]
    UnresolvedRef(String),
    #[error("value or reference nesting exceeds {MAX_DEPTH} levels")]
    TooDeep,
}

fn key_clause(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!(" for key \"{key}\"")
    }
}

fn parent_clause(parent: &str) -> String {
    if parent.is_empty() {
        String::new()
    } else {
        format!(" on {parent}")
    }
}

fn invalid(expected: impl Into<String>, actual: &Datum, key: &str, parent: &str) -> ConvertError {
    ConvertError::Invalid {
        expected: expected.into(),
        actual: render(actual),
        key: key.to_string(),
        parent: parent.to_string(),
    }
}

fn missing(expected: impl Into<String>, key: &str, parent: &str) -> ConvertError {
    ConvertError::Invalid {
        expected: expected.into(),
        actual: "absent".to_string(),
        key: key.to_string(),
        parent: parent.to_string(),
    }
}

/// JSON rendering of the offending value for the diagnostic echo.
fn render(value: &Datum) -> String {
    serde_json::to_string(&value.clone().into_value()).unwrap_or_else(|_| "<unprintable>".to_string())
}

// ----------------------------- facade ---------------------------------- //

/// Parse `text` and transform it against `map[root]`, wire keys in, record
/// keys out. JSON parse failures surface as [`CrateError::Parse`], schema
/// mismatches as [`CrateError::Convert`].
pub fn decode(text: &str, root: &str, map: &TypeMap) -> Result<Datum, CrateError> {
    let value: Value = serde_json::from_str(text).map_err(CrateError::Parse)?;
    let datum = Datum::from(value);
    let root_desc = Descriptor::Ref(root.to_string());
    Ok(transform(&datum, &root_desc, Direction::Decode, map, "", "", 0)?)
}

/// Transform `datum` against `map[root]` in the encode direction and render
/// it as pretty-printed JSON (2-space indentation, declared-prop order).
pub fn encode(datum: &Datum, root: &str, map: &TypeMap) -> Result<String, CrateError> {
    let root_desc = Descriptor::Ref(root.to_string());
    let out = transform(datum, &root_desc, Direction::Encode, map, "", "", 0)?;
    serde_json::to_string_pretty(&out.into_value()).map_err(CrateError::Parse)
}

// ----------------------------- engine ----------------------------------- //

/// Transform `val` against `desc`, returning the freshly built result tree.
/// `key` and `parent` seed diagnostics; pass empty strings at the root.
pub fn transform(
    val: &Datum,
    desc: &Descriptor,
    dir: Direction,
    map: &TypeMap,
    key: &str,
    parent: &str,
    depth: usize,
) -> Result<Datum, ConvertError> {
    if depth > MAX_DEPTH {
        return Err(ConvertError::TooDeep);
    }
    match desc {
        Descriptor::Any => Ok(val.clone()),
        Descriptor::Null => match val {
            Datum::Null => Ok(Datum::Null),
            _ => Err(invalid("null", val, key, parent)),
        },
        Descriptor::Never => Err(invalid("never", val, key, parent)),
        Descriptor::Absent => Err(invalid("absent", val, key, parent)),
        Descriptor::Primitive(kind) => transform_primitive(*kind, val, key, parent),
        Descriptor::Date => transform_date(val, dir, key, parent),
        Descriptor::Enum(literals) => transform_enum(literals, val, key, parent),
        Descriptor::Union(members) => transform_union(members, val, dir, map, key, parent, depth),
        Descriptor::Array(item) => transform_array(item, val, dir, map, key, parent, depth),
        Descriptor::Object { props, additional } => {
            transform_object(props, additional, None, val, dir, map, key, parent, depth)
        }
        Descriptor::Ref(name) => {
            let (resolved, ref_name) = deref(name, map)?;
            match resolved {
                Descriptor::Object { props, additional } => transform_object(
                    props,
                    additional,
                    Some(ref_name.as_str()),
                    val,
                    dir,
                    map,
                    key,
                    parent,
                    depth,
                ),
                other => transform(val, other, dir, map, key, parent, depth + 1),
            }
        }
    }
}

/// Chase a chain of references to its first non-`Ref` descriptor. The last
/// name in the chain tags "expected object" diagnostics and becomes the
/// parent of the object's property errors. A chain longer than the table is
/// a ref cycle.
fn deref<'a>(name: &str, map: &'a TypeMap) -> Result<(&'a Descriptor, String), ConvertError> {
    let mut name = name.to_string();
    let mut hops = 0usize;
    loop {
        let desc = map
            .resolve(&name)
            .ok_or_else(|| ConvertError::UnresolvedRef(name.clone()))?;
        match desc {
            Descriptor::Ref(next) => {
                hops += 1;
                if hops > map.len() {
                    return Err(ConvertError::TooDeep);
                }
                name = next.clone();
            }
            other => return Ok((other, name)),
        }
    }
}

fn transform_primitive(kind: Kind, val: &Datum, key: &str, parent: &str) -> Result<Datum, ConvertError> {
    let matches = matches!(
        (kind, val),
        (Kind::String, Datum::String(_))
            | (Kind::Number, Datum::Number(_))
            | (Kind::Boolean, Datum::Bool(_))
    );
    if matches {
        Ok(val.clone())
    } else {
        Err(invalid(kind_name(kind), val, key, parent))
    }
}

fn transform_date(val: &Datum, dir: Direction, key: &str, parent: &str) -> Result<Datum, ConvertError> {
    let parsed = match val {
        // Dates are nullable even without a union wrapper.
        Datum::Null => return Ok(Datum::Null),
        Datum::String(s) => parse_date(s),
        Datum::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Datum::Date(d) => Some(*d),
        _ => None,
    };
    match parsed {
        Some(date) => Ok(match dir {
            Direction::Decode => Datum::Date(date),
            Direction::Encode => Datum::String(render_date(&date)),
        }),
        None => Err(invalid("Date", val, key, parent)),
    }
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.frac]` (read as UTC),
/// or a bare `YYYY-MM-DD`.
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n));
    }
    None
}

fn transform_enum(literals: &[String], val: &Datum, key: &str, parent: &str) -> Result<Datum, ConvertError> {
    if let Datum::String(s) = val {
        if literals.iter().any(|l| l == s) {
            return Ok(val.clone());
        }
    }
    Err(invalid(
        format!("one of [{}]", literals.join(", ")),
        val,
        key,
        parent,
    ))
}

fn transform_union(
    members: &[Descriptor],
    val: &Datum,
    dir: Direction,
    map: &TypeMap,
    key: &str,
    parent: &str,
    depth: usize,
) -> Result<Datum, ConvertError> {
    for member in members {
        match transform(val, member, dir, map, key, parent, depth + 1) {
            Ok(out) => return Ok(out),
            // A failing member just means "try the next one"; configuration
            // errors still unwind.
            Err(ConvertError::Invalid { .. }) => continue,
            Err(fatal) => return Err(fatal),
        }
    }
    Err(invalid(describe_union(members), val, key, parent))
}

fn transform_array(
    item: &Descriptor,
    val: &Datum,
    dir: Direction,
    map: &TypeMap,
    key: &str,
    parent: &str,
    depth: usize,
) -> Result<Datum, ConvertError> {
    let Datum::Array(items) = val else {
        return Err(invalid("array", val, key, parent));
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, element) in items.iter().enumerate() {
        // Positional marker in the key slot; a nested object failure will
        // overwrite it with its own property key.
        out.push(transform(element, item, dir, map, &format!("[{i}]"), parent, depth + 1)?);
    }
    Ok(Datum::Array(out))
}

#[allow(clippy::too_many_arguments)]
fn transform_object(
    props: &[Prop],
    additional: &Descriptor,
    ref_name: Option<&str>,
    val: &Datum,
    dir: Direction,
    map: &TypeMap,
    key: &str,
    parent: &str,
    depth: usize,
) -> Result<Datum, ConvertError> {
    let Datum::Object(src) = val else {
        return Err(invalid(ref_name.unwrap_or("object"), val, key, parent));
    };
    let inner_parent = ref_name.unwrap_or("");
    let mut out = IndexMap::with_capacity(src.len());

    // Declared props first, in declaration order. Absent + non-optional is
    // a failure; absent + optional is simply omitted from the output.
    for p in props {
        let (source, dest) = prop_keys(p, dir);
        match src.get(source) {
            Some(v) => {
                let transformed = transform(v, &p.ty, dir, map, source, inner_parent, depth + 1)?;
                out.insert(dest.to_string(), transformed);
            }
            None => {
                if !accepts_absent(&p.ty, map, 0) {
                    return Err(missing(describe(&p.ty), source, inner_parent));
                }
            }
        }
    }

    // Then every input key that is not declared, against the additional
    // policy, in input iteration order. The registry table uses `Never`
    // here, so unknown keys are rejected with the key named.
    for (k, v) in src {
        if props.iter().any(|p| prop_keys(p, dir).0 == k.as_str()) {
            continue;
        }
        let transformed = transform(v, additional, dir, map, k, inner_parent, depth + 1)?;
        out.insert(k.clone(), transformed);
    }

    Ok(Datum::Object(out))
}

fn prop_keys(p: &Prop, dir: Direction) -> (&str, &str) {
    match dir {
        Direction::Decode => (&p.json, &p.rust),
        Direction::Encode => (&p.rust, &p.json),
    }
}

/// Whether a missing property satisfies `desc`: `Any`, `Absent`, a union
/// with an absent-accepting member, or a reference to one of those.
fn accepts_absent(desc: &Descriptor, map: &TypeMap, depth: usize) -> bool {
    if depth > MAX_DEPTH {
        return false;
    }
    match desc {
        Descriptor::Any | Descriptor::Absent => true,
        Descriptor::Union(members) => members.iter().any(|m| accepts_absent(m, map, depth + 1)),
        Descriptor::Ref(name) => match deref(name, map) {
            Ok((resolved, _)) => accepts_absent(resolved, map, depth + 1),
            Err(_) => false,
        },
        _ => false,
    }
}

// --------------------------- descriptions -------------------------------- //

fn kind_name(kind: Kind) -> &'static str {
    match kind {
        Kind::String => "string",
        Kind::Number => "number",
        Kind::Boolean => "boolean",
    }
}

/// Human rendering of an expected shape: `an optional X` for two-member
/// absent-first unions, `one of [..]` for other unions and enums, the
/// reference name for indirections, a type name otherwise.
pub fn describe(desc: &Descriptor) -> String {
    match desc {
        Descriptor::Any => "any".to_string(),
        Descriptor::Null => "null".to_string(),
        Descriptor::Never => "never".to_string(),
        Descriptor::Absent => "absent".to_string(),
        Descriptor::Primitive(kind) => kind_name(*kind).to_string(),
        Descriptor::Date => "Date".to_string(),
        Descriptor::Ref(name) => name.clone(),
        Descriptor::Array(_) => "array".to_string(),
        Descriptor::Union(members) => describe_union(members),
        Descriptor::Enum(literals) => format!("one of [{}]", literals.join(", ")),
        Descriptor::Object { .. } => "object".to_string(),
    }
}

fn describe_union(members: &[Descriptor]) -> String {
    if members.len() == 2 && members[0] == Descriptor::Absent {
        format!("an optional {}", describe(&members[1]))
    } else {
        let rendered: Vec<String> = members.iter().map(describe).collect();
        format!("one of [{}]", rendered.join(", "))
    }
}
