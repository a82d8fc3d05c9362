use crate::metadata::HasMetadata;
use crate::models::{DocBlock, Fqsen, Location};
use crate::node::NodeAssociated;

/// Contract shared by every reflected structural element.
pub trait Element: HasMetadata + NodeAssociated {
    fn fqsen(&self) -> &Fqsen;

    /// Local name, always derived from the FQSEN.
    fn name(&self) -> &str {
        self.fqsen().name()
    }

    fn doc_block(&self) -> Option<&DocBlock>;

    fn location(&self) -> Location;
}
