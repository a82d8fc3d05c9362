use super::Visibility;
use reflector_api::{
    DocBlock, Element, Fqsen, HasMetadata, Location, MetadataContainer, NodeAssociated, NodeRef,
    Type,
};

/// A reflected constant: global (`\Acme\VERSION`) or class-level (`\Acme\Greeter::VERSION`).
#[derive(Debug, Clone)]
pub struct Constant {
    fqsen: Fqsen,
    value: Option<String>,
    ty: Type,
    visibility: Visibility,
    is_final: bool,
    doc_block: Option<DocBlock>,
    location: Location,
    node: NodeRef,
    metadata: MetadataContainer,
}

impl Constant {
    /// `value` is the initializer as written in the source.
    pub fn new(
        node: NodeRef,
        fqsen: Fqsen,
        doc_block: Option<DocBlock>,
        location: Option<Location>,
        value: Option<String>,
    ) -> Self {
        Self {
            fqsen,
            value,
            ty: Type::Mixed,
            visibility: Visibility::Public,
            is_final: false,
            doc_block,
            location: location.unwrap_or_default(),
            node,
            metadata: MetadataContainer::new(),
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

impl Element for Constant {
    fn fqsen(&self) -> &Fqsen {
        &self.fqsen
    }

    fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }

    fn location(&self) -> Location {
        self.location
    }
}

impl HasMetadata for Constant {
    fn metadata(&self) -> &MetadataContainer {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut MetadataContainer {
        &mut self.metadata
    }
}

impl NodeAssociated for Constant {
    fn node(&self) -> &NodeRef {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_facets() {
        let node = NodeRef::detached("const_declaration", 0, 24);
        let constant = Constant::new(
            node,
            Fqsen::new("\\Acme\\Greeter::GREETING").unwrap(),
            None,
            None,
            Some("'hello'".to_string()),
        );
        assert_eq!(constant.name(), "GREETING");
        assert_eq!(constant.value(), Some("'hello'"));
        assert!(constant.ty().is_mixed());
        assert_eq!(constant.visibility(), Visibility::Public);
        assert!(!constant.location().is_known());

        let constant = constant
            .with_type(Type::String)
            .with_visibility(Visibility::Private)
            .with_final(true);
        assert_eq!(constant.ty(), &Type::String);
        assert_eq!(constant.visibility(), Visibility::Private);
        assert!(constant.is_final());
    }
}
