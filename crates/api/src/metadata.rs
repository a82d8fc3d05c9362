use indexmap::IndexMap;
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Auxiliary annotation attached to an element by an indexer, plugin or analysis pass.
pub trait Metadata: Send + Sync + Debug {
    /// Identity of this metadata kind. A container holds at most one value per key.
    fn key(&self) -> &str;

    /// Cast to Any for downcasting to concrete types.
    fn as_any(&self) -> &dyn Any;
}

/// Bag of metadata keyed by kind. Embedded in every element.
#[derive(Debug, Clone, Default)]
pub struct MetadataContainer {
    entries: IndexMap<String, Arc<dyn Metadata>>,
}

impl MetadataContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `metadata` under its own key, returning the value it replaced.
    pub fn attach<M: Metadata + 'static>(&mut self, metadata: M) -> Option<Arc<dyn Metadata>> {
        self.attach_shared(Arc::new(metadata))
    }

    pub fn attach_shared(&mut self, metadata: Arc<dyn Metadata>) -> Option<Arc<dyn Metadata>> {
        self.entries.insert(metadata.key().to_string(), metadata)
    }

    pub fn detach(&mut self, key: &str) -> Option<Arc<dyn Metadata>> {
        self.entries.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn Metadata>> {
        self.entries.get(key)
    }

    /// Typed lookup: `None` if absent or if the stored value is not an `M`.
    pub fn get_as<M: Metadata + 'static>(&self, key: &str) -> Option<&M> {
        self.entries
            .get(key)
            .and_then(|m| m.as_any().downcast_ref::<M>())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Every attached value, by key.
    pub fn get_all(&self) -> &IndexMap<String, Arc<dyn Metadata>> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Metadata>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Elements that carry a [`MetadataContainer`].
pub trait HasMetadata {
    fn metadata(&self) -> &MetadataContainer;

    fn metadata_mut(&mut self) -> &mut MetadataContainer;

    fn attach_metadata<M: Metadata + 'static>(&mut self, metadata: M) -> Option<Arc<dyn Metadata>>
    where
        Self: Sized,
    {
        self.metadata_mut().attach(metadata)
    }
}
