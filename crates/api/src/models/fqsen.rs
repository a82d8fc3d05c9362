use crate::error::{ModelError, ModelResult};
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

/// Separator between namespace segments (e.g. `\Acme\Util`).
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Separator between a class-like element and its members (e.g. `\Acme\Greeter::greet()`).
pub const MEMBER_SEPARATOR: &str = "::";

/// Suffix marking callables (functions and methods).
pub const CALLABLE_SUFFIX: &str = "()";

static FQSEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let ident = r"[A-Za-z_\x{7f}-\x{10ffff}][A-Za-z0-9_\x{7f}-\x{10ffff}]*";
    Regex::new(&format!(
        r"^\\(?:{ident}(?:\\{ident})*(?:::(?:\${ident}|{ident}(?:\(\))?)|\(\))?)?$"
    ))
    .expect("FQSEN pattern is a valid regex")
});

/// Fully Qualified Structural Element Name.
///
/// The canonical form always starts with `\`. Namespace segments are joined with `\`,
/// members hang off their owner with `::` (properties additionally carry a `$`), and
/// callables end with `()`:
///
/// ```text
/// \Acme\greet()
/// \Acme\Greeter::greet()
/// \Acme\Greeter::$name
/// \Acme\VERSION
/// ```
///
/// Equality and hashing use the canonical string only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fqsen(String);

impl Fqsen {
    pub fn new(fqsen: impl Into<String>) -> ModelResult<Self> {
        let fqsen = fqsen.into();
        if !FQSEN_PATTERN.is_match(&fqsen) {
            return Err(ModelError::InvalidIdentifier(fqsen));
        }
        Ok(Self(fqsen))
    }

    /// The global namespace, `\`.
    pub fn root() -> Self {
        Self(NAMESPACE_SEPARATOR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local name of the element: the member name after `::` (without `$`), or the
    /// last namespace segment. A trailing `()` is never part of the name.
    pub fn name(&self) -> &str {
        let bare = self.0.strip_suffix(CALLABLE_SUFFIX).unwrap_or(&self.0);
        match bare.rfind(MEMBER_SEPARATOR) {
            Some(pos) => {
                let member = &bare[pos + MEMBER_SEPARATOR.len()..];
                member.strip_prefix('$').unwrap_or(member)
            }
            None => bare
                .rfind(NAMESPACE_SEPARATOR)
                .map(|pos| &bare[pos + 1..])
                .unwrap_or(bare),
        }
    }

    /// Identifier of the enclosing namespace or class-like element.
    ///
    /// `\Acme\greet()` yields `\Acme`, `\Acme\Greeter::greet()` yields `\Acme\Greeter`,
    /// and top-level names (and the root itself) yield `\`.
    pub fn namespace(&self) -> Fqsen {
        if let Some(pos) = self.0.rfind(MEMBER_SEPARATOR) {
            return Fqsen(self.0[..pos].to_string());
        }
        match self.0.rfind(NAMESPACE_SEPARATOR) {
            Some(pos) if pos > 0 => Fqsen(self.0[..pos].to_string()),
            _ => Fqsen::root(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Whether this names a member (method, property, class constant) of a class-like element.
    pub fn is_member(&self) -> bool {
        self.0.contains(MEMBER_SEPARATOR)
    }

    pub fn is_callable(&self) -> bool {
        self.0.ends_with(CALLABLE_SUFFIX)
    }

    /// Nested namespace-level identifier, e.g. `\Acme` + `greet()` = `\Acme\greet()`.
    pub fn child(&self, name: &str) -> ModelResult<Fqsen> {
        if self.is_root() {
            Fqsen::new(format!("{}{}", NAMESPACE_SEPARATOR, name))
        } else {
            Fqsen::new(format!("{}{}{}", self.0, NAMESPACE_SEPARATOR, name))
        }
    }

    /// Member identifier, e.g. `\Acme\Greeter` + `greet()` = `\Acme\Greeter::greet()`.
    pub fn member(&self, name: &str) -> ModelResult<Fqsen> {
        Fqsen::new(format!("{}{}{}", self.0, MEMBER_SEPARATOR, name))
    }
}

impl fmt::Display for Fqsen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Fqsen {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fqsen::new(s)
    }
}

impl TryFrom<String> for Fqsen {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fqsen::new(value)
    }
}

impl TryFrom<&str> for Fqsen {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Fqsen::new(value)
    }
}

impl From<Fqsen> for String {
    fn from(fqsen: Fqsen) -> Self {
        fqsen.0
    }
}

impl AsRef<str> for Fqsen {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Fqsen {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl JsonSchema for Fqsen {
    fn schema_name() -> Cow<'static, str> {
        "Fqsen".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}
