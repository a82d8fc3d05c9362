pub mod argument;
pub mod constant;
pub mod function;
pub mod method;

pub use argument::Argument;
pub use constant::Constant;
pub use function::{Function, FunctionBuilder};
pub use method::{Method, MethodBuilder};

use reflector_api::{
    DocBlock, Element, Fqsen, HasMetadata, Location, MetadataContainer, NodeAssociated, NodeRef,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
            Visibility::Protected => f.write_str("protected"),
            Visibility::Private => f.write_str("private"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Function,
    Method,
    Constant,
}

/// A published, read-only element. Cheap to clone; safe to share across threads.
#[derive(Debug, Clone)]
pub enum ReflectedElement {
    Function(Arc<Function>),
    Method(Arc<Method>),
    Constant(Arc<Constant>),
}

impl ReflectedElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            ReflectedElement::Function(_) => ElementKind::Function,
            ReflectedElement::Method(_) => ElementKind::Method,
            ReflectedElement::Constant(_) => ElementKind::Constant,
        }
    }

    pub fn fqsen(&self) -> &Fqsen {
        match self {
            ReflectedElement::Function(e) => e.fqsen(),
            ReflectedElement::Method(e) => e.fqsen(),
            ReflectedElement::Constant(e) => e.fqsen(),
        }
    }

    pub fn name(&self) -> &str {
        self.fqsen().name()
    }

    pub fn doc_block(&self) -> Option<&DocBlock> {
        match self {
            ReflectedElement::Function(e) => e.doc_block(),
            ReflectedElement::Method(e) => e.doc_block(),
            ReflectedElement::Constant(e) => e.doc_block(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            ReflectedElement::Function(e) => e.location(),
            ReflectedElement::Method(e) => e.location(),
            ReflectedElement::Constant(e) => e.location(),
        }
    }

    pub fn metadata(&self) -> &MetadataContainer {
        match self {
            ReflectedElement::Function(e) => e.metadata(),
            ReflectedElement::Method(e) => e.metadata(),
            ReflectedElement::Constant(e) => e.metadata(),
        }
    }

    pub fn node(&self) -> &NodeRef {
        match self {
            ReflectedElement::Function(e) => e.node(),
            ReflectedElement::Method(e) => e.node(),
            ReflectedElement::Constant(e) => e.node(),
        }
    }

    pub fn as_function(&self) -> Option<&Arc<Function>> {
        match self {
            ReflectedElement::Function(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&Arc<Method>> {
        match self {
            ReflectedElement::Method(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Arc<Constant>> {
        match self {
            ReflectedElement::Constant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Function> for ReflectedElement {
    fn from(function: Function) -> Self {
        ReflectedElement::Function(Arc::new(function))
    }
}

impl From<Method> for ReflectedElement {
    fn from(method: Method) -> Self {
        ReflectedElement::Method(Arc::new(method))
    }
}

impl From<Constant> for ReflectedElement {
    fn from(constant: Constant) -> Self {
        ReflectedElement::Constant(Arc::new(constant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_display_and_default() {
        assert_eq!(Visibility::default(), Visibility::Public);
        assert_eq!(Visibility::Protected.to_string(), "protected");
        assert_eq!(serde_json::to_string(&Visibility::Private).unwrap(), r#""private""#);
    }

    #[test]
    fn test_reflected_element_delegates() {
        let node = NodeRef::detached("function_definition", 5, 50);
        let function = Function::builder(node, Fqsen::new("\\Acme\\greet()").unwrap())
            .location(Location::new(7))
            .build();
        let element = ReflectedElement::from(function);

        assert_eq!(element.kind(), ElementKind::Function);
        assert_eq!(element.name(), "greet");
        assert_eq!(element.location().line(), 7);
        assert_eq!(element.node(), &node);
        assert!(element.doc_block().is_none());
        assert!(element.metadata().is_empty());
        assert!(element.as_function().is_some());
        assert!(element.as_method().is_none());
        assert!(element.as_constant().is_none());
    }
}
