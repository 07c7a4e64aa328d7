//! Type descriptor model.
//!
//! A small closed set of descriptor constructors that together describe any
//! JSON shape the registry format needs. Pure data: nothing is validated at
//! construction time. A `Ref` to a name missing from its [`TypeMap`] only
//! surfaces when the transform engine tries to resolve it, and then as a
//! structured error rather than a panic.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    Boolean,
}

/// Declarative description of an expected JSON shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    /// Passthrough, no validation. Escape hatch for untyped fields.
    Any,
    /// Exactly `null`.
    Null,
    /// Always invalid. Marks unsupported shapes, and doubles as the strict
    /// additional-property policy of closed objects.
    Never,
    /// Matches only a *missing* object property. As the first member of a
    /// union this models an optional field.
    Absent,
    Primitive(Kind),
    /// ISO-8601-ish string or millisecond timestamp. `null` passes through
    /// even without a union wrapper.
    Date,
    /// Indirection resolved through a [`TypeMap`] at transform time, so
    /// mutually recursive definitions need no eager construction.
    Ref(String),
    Array(Box<Descriptor>),
    /// Members are tried in declaration order; the first structural match
    /// wins even if a later member would also accept the value.
    Union(Vec<Descriptor>),
    /// String-literal membership.
    Enum(Vec<String>),
    /// Closed property set: every declared prop is processed whether or not
    /// the input carries it. `additional` governs input keys that are not
    /// declared; `Never` rejects them outright.
    Object {
        props: Vec<Prop>,
        additional: Box<Descriptor>,
    },
}

/// One declared object property: the external (wire) key, the internal
/// (record) key, and the member descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub json: String,
    pub rust: String,
    pub ty: Descriptor,
}

// ---------------------------- constructors ----------------------------- //

pub fn string() -> Descriptor {
    Descriptor::Primitive(Kind::String)
}

pub fn number() -> Descriptor {
    Descriptor::Primitive(Kind::Number)
}

pub fn boolean() -> Descriptor {
    Descriptor::Primitive(Kind::Boolean)
}

pub fn date() -> Descriptor {
    Descriptor::Date
}

pub fn reference(name: &str) -> Descriptor {
    Descriptor::Ref(name.to_string())
}

pub fn array_of(item: Descriptor) -> Descriptor {
    Descriptor::Array(Box::new(item))
}

pub fn union_of(members: Vec<Descriptor>) -> Descriptor {
    Descriptor::Union(members)
}

/// `Union[Absent, inner]`: the field may be missing, otherwise it must
/// match `inner`.
pub fn optional(inner: Descriptor) -> Descriptor {
    Descriptor::Union(vec![Descriptor::Absent, inner])
}

pub fn enum_of(literals: &[&str]) -> Descriptor {
    Descriptor::Enum(literals.iter().map(|s| s.to_string()).collect())
}

pub fn object(props: Vec<Prop>) -> Descriptor {
    Descriptor::Object {
        props,
        additional: Box::new(Descriptor::Never),
    }
}

/// Object with no declared props: every key validates against `additional`.
pub fn map_of(additional: Descriptor) -> Descriptor {
    Descriptor::Object {
        props: Vec::new(),
        additional: Box::new(additional),
    }
}

pub fn prop(json: &str, rust: &str, ty: Descriptor) -> Prop {
    Prop {
        json: json.to_string(),
        rust: rust.to_string(),
        ty,
    }
}

// ------------------------------ type map ------------------------------- //

/// Name to descriptor table, resolved lazily via [`Descriptor::Ref`].
/// Populated once at startup and read-only thereafter; the engine takes it
/// by reference, so independent maps can coexist (tests build minimal ones).
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    defs: BTreeMap<String, Descriptor>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: &str, descriptor: Descriptor) {
        self.defs.insert(name.to_string(), descriptor);
    }

    pub fn resolve(&self, name: &str) -> Option<&Descriptor> {
        self.defs.get(name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_is_absent_first_union() {
        let d = optional(string());
        let Descriptor::Union(members) = &d else {
            panic!("expected union");
        };
        assert_eq!(members[0], Descriptor::Absent);
        assert_eq!(members[1], Descriptor::Primitive(Kind::String));
    }

    #[test]
    fn object_defaults_to_strict_additional_policy() {
        let d = object(vec![prop("id", "id", string())]);
        let Descriptor::Object { props, additional } = &d else {
            panic!("expected object");
        };
        assert_eq!(props.len(), 1);
        assert_eq!(**additional, Descriptor::Never);
    }

    #[test]
    fn map_resolves_defined_names_only() {
        let mut map = TypeMap::new();
        map.define("Genesis", object(vec![prop("hash", "hash", string())]));
        assert!(map.resolve("Genesis").is_some());
        assert!(map.resolve("Missing").is_none());
        assert_eq!(map.len(), 1);
    }
}
