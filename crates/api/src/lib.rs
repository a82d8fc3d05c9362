pub mod element;
pub mod error;
pub mod metadata;
pub mod models;
pub mod node;

// Re-export commonly used types
pub use element::Element;
pub use error::{ModelError, ModelResult};
pub use metadata::{HasMetadata, Metadata, MetadataContainer};
pub use models::*;
pub use node::{NodeAssociated, NodeRef};
