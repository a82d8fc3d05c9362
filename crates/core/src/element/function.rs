use super::argument::{Argument, push_argument};
use reflector_api::{
    DocBlock, Element, Fqsen, HasMetadata, Location, Metadata, MetadataContainer, NodeAssociated,
    NodeRef, Type,
};
use std::sync::Arc;

/// A reflected free function declaration.
///
/// Obtained from [`FunctionBuilder::build`] (or [`Function::new`] when the arguments are
/// already known). The argument list is fixed once built.
#[derive(Debug, Clone)]
pub struct Function {
    fqsen: Fqsen,
    arguments: Vec<Argument>,
    doc_block: Option<DocBlock>,
    location: Location,
    return_type: Type,
    has_return_by_reference: bool,
    node: NodeRef,
    metadata: MetadataContainer,
}

impl Function {
    /// Missing facets resolve here: location to the unknown sentinel, return type to `mixed`.
    pub fn new(
        node: NodeRef,
        fqsen: Fqsen,
        doc_block: Option<DocBlock>,
        location: Option<Location>,
        return_type: Option<Type>,
        has_return_by_reference: bool,
    ) -> Self {
        Self {
            fqsen,
            arguments: Vec::new(),
            doc_block,
            location: location.unwrap_or_default(),
            return_type: return_type.unwrap_or_default(),
            has_return_by_reference,
            node,
            metadata: MetadataContainer::new(),
        }
    }

    pub fn builder(node: NodeRef, fqsen: Fqsen) -> FunctionBuilder {
        FunctionBuilder::new(node, fqsen)
    }

    /// Arguments in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// First argument with the given name.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name() == name)
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn has_return_by_reference(&self) -> bool {
        self.has_return_by_reference
    }
}

impl Element for Function {
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

impl HasMetadata for Function {
    fn metadata(&self) -> &MetadataContainer {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut MetadataContainer {
        &mut self.metadata
    }
}

impl NodeAssociated for Function {
    fn node(&self) -> &NodeRef {
        &self.node
    }
}

/// Open form of a [`Function`] while its declaration is being walked.
#[derive(Debug)]
pub struct FunctionBuilder {
    node: NodeRef,
    fqsen: Fqsen,
    doc_block: Option<DocBlock>,
    location: Option<Location>,
    return_type: Option<Type>,
    has_return_by_reference: bool,
    arguments: Vec<Argument>,
    metadata: MetadataContainer,
}

impl FunctionBuilder {
    pub fn new(node: NodeRef, fqsen: Fqsen) -> Self {
        Self {
            node,
            fqsen,
            doc_block: None,
            location: None,
            return_type: None,
            has_return_by_reference: false,
            arguments: Vec::new(),
            metadata: MetadataContainer::new(),
        }
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

    /// Append the next parameter. Callers add parameters in declaration order.
    pub fn add_argument(&mut self, argument: Argument) {
        push_argument(&self.fqsen, &mut self.arguments, argument);
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn fqsen(&self) -> &Fqsen {
        &self.fqsen
    }

    pub fn attach_metadata<M: Metadata + 'static>(
        &mut self,
        metadata: M,
    ) -> Option<Arc<dyn Metadata>> {
        self.metadata.attach(metadata)
    }

    pub fn build(self) -> Function {
        let mut function = Function::new(
            self.node,
            self.fqsen,
            self.doc_block,
            self.location,
            self.return_type,
            self.has_return_by_reference,
        );
        function.arguments = self.arguments;
        function.metadata = self.metadata;
        tracing::debug!(
            fqsen = %function.fqsen,
            arguments = function.arguments.len(),
            "built function"
        );
        function
    }
}
