use super::Visibility;
use super::argument::{Argument, push_argument};
use reflector_api::{
    DocBlock, Element, Fqsen, HasMetadata, Location, Metadata, MetadataContainer, NodeAssociated,
    NodeRef, Type,
};
use std::sync::Arc;

/// A reflected method of a class, interface, trait or enum.
#[derive(Debug, Clone)]
pub struct Method {
    fqsen: Fqsen,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    arguments: Vec<Argument>,
    doc_block: Option<DocBlock>,
    location: Location,
    return_type: Type,
    has_return_by_reference: bool,
    node: NodeRef,
    metadata: MetadataContainer,
}

impl Method {
    pub fn builder(node: NodeRef, fqsen: Fqsen) -> MethodBuilder {
        MethodBuilder::new(node, fqsen)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn has_return_by_reference(&self) -> bool {
        self.has_return_by_reference
    }
}

impl Element for Method {
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

impl HasMetadata for Method {
    fn metadata(&self) -> &MetadataContainer {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut MetadataContainer {
        &mut self.metadata
    }
}

impl NodeAssociated for Method {
    fn node(&self) -> &NodeRef {
        &self.node
    }
}

#[derive(Debug)]
pub struct MethodBuilder {
    node: NodeRef,
    fqsen: Fqsen,
    visibility: Option<Visibility>,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    doc_block: Option<DocBlock>,
    location: Option<Location>,
    return_type: Option<Type>,
    has_return_by_reference: bool,
    arguments: Vec<Argument>,
    metadata: MetadataContainer,
}

impl MethodBuilder {
    pub fn new(node: NodeRef, fqsen: Fqsen) -> Self {
        Self {
            node,
            fqsen,
            visibility: None,
            is_static: false,
            is_abstract: false,
            is_final: false,
            doc_block: None,
            location: None,
            return_type: None,
            has_return_by_reference: false,
            arguments: Vec::new(),
            metadata: MetadataContainer::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn static_(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn abstract_(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn final_(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn doc_block(mut self, doc_block: DocBlock) -> Self {
        self.doc_block = Some(doc_block);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn return_type(mut self, return_type: Type) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn returns_by_reference(mut self, by_reference: bool) -> Self {
        self.has_return_by_reference = by_reference;
        self
    }

    pub fn add_argument(&mut self, argument: Argument) {
        push_argument(&self.fqsen, &mut self.arguments, argument);
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn attach_metadata<M: Metadata + 'static>(
        &mut self,
        metadata: M,
    ) -> Option<Arc<dyn Metadata>> {
        self.metadata.attach(metadata)
    }

    /// Visibility defaults to `public`, location to the unknown sentinel, return type to `mixed`.
    pub fn build(self) -> Method {
        if !self.fqsen.is_member() {
            tracing::warn!(fqsen = %self.fqsen, "method FQSEN has no owning class");
        }
        let method = Method {
            fqsen: self.fqsen,
            visibility: self.visibility.unwrap_or_default(),
            is_static: self.is_static,
            is_abstract: self.is_abstract,
            is_final: self.is_final,
            arguments: self.arguments,
            doc_block: self.doc_block,
            location: self.location.unwrap_or_default(),
            return_type: self.return_type.unwrap_or_default(),
            has_return_by_reference: self.has_return_by_reference,
            node: self.node,
            metadata: self.metadata,
        };
        tracing::debug!(
            fqsen = %method.fqsen,
            arguments = method.arguments.len(),
            "built method"
        );
        method
    }
}
