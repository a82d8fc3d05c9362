use reflector_api::{Fqsen, Type};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One formal parameter of a function or method.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Argument {
    name: String,
    #[serde(rename = "type", default)]
    ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(default)]
    by_reference: bool,
    #[serde(default)]
    variadic: bool,
}

impl Argument {
    /// `name` may be given with or without its leading `$`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = match name.strip_prefix('$') {
            Some(bare) => bare.to_string(),
            None => name,
        };
        Self {
            name,
            ty: Type::Mixed,
            default: None,
            by_reference: false,
            variadic: false,
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    /// Default value, as written in the source.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn by_reference(mut self) -> Self {
        self.by_reference = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn is_by_reference(&self) -> bool {
        self.by_reference
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }
}

/// Append in call order. Duplicate names are accepted but reported.
pub(crate) fn push_argument(owner: &Fqsen, arguments: &mut Vec<Argument>, argument: Argument) {
    if arguments.iter().any(|a| a.name == argument.name) {
        tracing::warn!(
            element = %owner,
            argument = %argument.name,
            "duplicate argument name"
        );
    }
    arguments.push(argument);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_defaults() {
        let argument = Argument::new("name");
        assert_eq!(argument.name(), "name");
        assert!(argument.ty().is_mixed());
        assert_eq!(argument.default(), None);
        assert!(!argument.is_by_reference());
        assert!(!argument.is_variadic());
    }

    #[test]
    fn test_dollar_prefix_is_dropped() {
        assert_eq!(Argument::new("$times").name(), "times");
    }

    #[test]
    fn test_facets() {
        let argument = Argument::new("values")
            .with_type(Type::array_of(Type::Integer))
            .with_default("[]")
            .by_reference()
            .variadic();
        assert_eq!(argument.ty().to_string(), "int[]");
        assert_eq!(argument.default(), Some("[]"));
        assert!(argument.is_by_reference());
        assert!(argument.is_variadic());
    }

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let owner = Fqsen::new("\\greet()").unwrap();
        let mut arguments = Vec::new();
        push_argument(&owner, &mut arguments, Argument::new("a"));
        push_argument(&owner, &mut arguments, Argument::new("b"));
        push_argument(&owner, &mut arguments, Argument::new("a"));

        let names: Vec<_> = arguments.iter().map(Argument::name).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn warnings_while_pushing(names: &[&str]) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let owner = Fqsen::new("\\greet()").unwrap();
        tracing::subscriber::with_default(subscriber, || {
            let mut arguments = Vec::new();
            for name in names {
                push_argument(&owner, &mut arguments, Argument::new(*name));
            }
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_duplicate_name_is_warned_once() {
        let output = warnings_while_pushing(&["a", "b", "a"]);
        assert_eq!(output.matches("duplicate argument name").count(), 1);
        assert!(output.contains("WARN"));
    }

    #[test]
    fn test_distinct_names_are_quiet() {
        let output = warnings_while_pushing(&["a", "b"]);
        assert!(!output.contains("duplicate argument name"));
    }

    #[test]
    fn test_serde_uses_type_key() {
        let json = serde_json::to_value(Argument::new("times").with_type(Type::Integer)).unwrap();
        assert_eq!(json["name"], "times");
        assert_eq!(json["type"]["kind"], "integer");
        assert!(json.get("default").is_none());
    }
}
