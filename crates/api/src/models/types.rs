use super::fqsen::Fqsen;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved type expression, as produced by the type resolver.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Type {
    /// Unknown or deliberately untyped (`mixed`).
    Mixed,
    Void,
    Null,
    Never,
    Boolean,
    Integer,
    Float,
    String,
    Scalar,
    Callable,
    Iterable,
    Resource,
    /// `array` with a value type; `Mixed` renders as plain `array`.
    Array(Box<Type>),
    /// `object`, or a reference to a class-like element.
    Object(Option<Fqsen>),
    #[serde(rename = "self")]
    SelfType,
    Static,
    This,
    /// `?T`
    Nullable(Box<Type>),
    /// `A|B`
    Compound(Vec<Type>),
    /// `A&B`
    Intersection(Vec<Type>),
}

impl Type {
    pub fn is_mixed(&self) -> bool {
        matches!(self, Type::Mixed)
    }

    pub fn nullable(inner: Type) -> Self {
        Type::Nullable(Box::new(inner))
    }

    pub fn array_of(value: Type) -> Self {
        Type::Array(Box::new(value))
    }

    pub fn class(fqsen: Fqsen) -> Self {
        Type::Object(Some(fqsen))
    }

    fn is_composite(&self) -> bool {
        matches!(self, Type::Compound(_) | Type::Intersection(_))
    }
}

impl Default for Type {
    fn default() -> Self {
        Type::Mixed
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, types: &[Type], separator: &str) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if ty.is_composite() {
            write!(f, "({ty})")?;
        } else {
            write!(f, "{ty}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Mixed => f.write_str("mixed"),
            Type::Void => f.write_str("void"),
            Type::Null => f.write_str("null"),
            Type::Never => f.write_str("never"),
            Type::Boolean => f.write_str("bool"),
            Type::Integer => f.write_str("int"),
            Type::Float => f.write_str("float"),
            Type::String => f.write_str("string"),
            Type::Scalar => f.write_str("scalar"),
            Type::Callable => f.write_str("callable"),
            Type::Iterable => f.write_str("iterable"),
            Type::Resource => f.write_str("resource"),
            Type::Array(value) if value.is_mixed() => f.write_str("array"),
            Type::Array(value) if value.is_composite() => write!(f, "({value})[]"),
            Type::Array(value) => write!(f, "{value}[]"),
            Type::Object(None) => f.write_str("object"),
            Type::Object(Some(fqsen)) => write!(f, "{fqsen}"),
            Type::SelfType => f.write_str("self"),
            Type::Static => f.write_str("static"),
            Type::This => f.write_str("$this"),
            Type::Nullable(inner) => write!(f, "?{inner}"),
            Type::Compound(types) => write_joined(f, types, "|"),
            Type::Intersection(types) => write_joined(f, types, "&"),
        }
    }
}
