pub mod docblock;
pub mod fqsen;
pub mod location;
pub mod types;

pub use docblock::{DocBlock, Tag};
pub use fqsen::Fqsen;
pub use location::{Location, UNKNOWN_LINE};
pub use types::Type;
