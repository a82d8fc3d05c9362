use crate::models::Location;
use tree_sitter::{Node, Tree};

/// Non-owning handle to the parse-tree node an element was reflected from.
///
/// The handle never keeps the tree alive. To inspect the original syntax again, hand the
/// tree back to [`NodeRef::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    id: usize,
    kind: &'static str,
    start_byte: usize,
    end_byte: usize,
    start_row: usize,
    start_column: usize,
}

impl NodeRef {
    /// Handle for nodes that do not come from a tree-sitter tree (synthesized elements,
    /// fixtures). Such handles only resolve if a tree happens to hold a matching node.
    pub fn detached(kind: &'static str, start_byte: usize, end_byte: usize) -> Self {
        Self {
            id: 0,
            kind,
            start_byte,
            end_byte,
            start_row: 0,
            start_column: 0,
        }
    }

    /// Tree-sitter node id; `0` for detached handles.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_byte..self.end_byte
    }

    /// Start of the node as a 1-based location.
    pub fn location(&self) -> Location {
        Location::from_zero_based(self.start_row, self.start_column)
    }

    /// Whether `node` is the very node this handle was captured from.
    pub fn is(&self, node: &Node<'_>) -> bool {
        self.id == node.id() && self.kind == node.kind() && self.byte_range() == node.byte_range()
    }

    /// Find the node again in `tree`, matching on kind and byte range.
    pub fn resolve<'tree>(&self, tree: &'tree Tree) -> Option<Node<'tree>> {
        let mut node = tree
            .root_node()
            .descendant_for_byte_range(self.start_byte, self.end_byte)?;
        loop {
            if node.start_byte() != self.start_byte || node.end_byte() != self.end_byte {
                return None;
            }
            if node.kind() == self.kind {
                return Some(node);
            }
            node = node.parent()?;
        }
    }
}

impl From<Node<'_>> for NodeRef {
    fn from(node: Node<'_>) -> Self {
        let start = node.start_position();
        Self {
            id: node.id(),
            kind: node.kind(),
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_row: start.row,
            start_column: start.column,
        }
    }
}

impl From<&Node<'_>> for NodeRef {
    fn from(node: &Node<'_>) -> Self {
        Self::from(*node)
    }
}

/// Elements associated with the parse-tree node they were built from.
pub trait NodeAssociated {
    fn node(&self) -> &NodeRef;
}
