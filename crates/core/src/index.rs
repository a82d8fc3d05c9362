use crate::element::{Constant, ElementKind, Function, Method, ReflectedElement};
use dashmap::DashMap;
use reflector_api::{Element, Fqsen};
use std::sync::Arc;

/// Published elements, looked up by FQSEN.
///
/// Builders own their element until [`ElementIndex::publish`]; from then on the element is
/// frozen behind an `Arc` and may be read from any thread.
#[derive(Debug, Default)]
pub struct ElementIndex {
    elements: DashMap<Fqsen, ReflectedElement>,
}

impl ElementIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an element, returning the element previously published under the same FQSEN.
    pub fn publish(&self, element: impl Into<ReflectedElement>) -> Option<ReflectedElement> {
        let element = element.into();
        let fqsen = element.fqsen().clone();
        tracing::debug!(fqsen = %fqsen, kind = ?element.kind(), "publishing element");
        let replaced = self.elements.insert(fqsen, element);
        if let Some(previous) = &replaced {
            tracing::warn!(
                fqsen = %previous.fqsen(),
                "element published twice, replacing previous"
            );
        }
        replaced
    }

    pub fn get(&self, fqsen: &str) -> Option<ReflectedElement> {
        self.elements.get(fqsen).map(|e| e.value().clone())
    }

    pub fn get_function(&self, fqsen: &str) -> Option<Arc<Function>> {
        self.get(fqsen).and_then(|e| e.as_function().cloned())
    }

    pub fn get_method(&self, fqsen: &str) -> Option<Arc<Method>> {
        self.get(fqsen).and_then(|e| e.as_method().cloned())
    }

    pub fn get_constant(&self, fqsen: &str) -> Option<Arc<Constant>> {
        self.get(fqsen).and_then(|e| e.as_constant().cloned())
    }

    pub fn contains(&self, fqsen: &str) -> bool {
        self.elements.contains_key(fqsen)
    }

    /// Published FQSENs of the given kind, sorted.
    pub fn fqsens_of(&self, kind: ElementKind) -> Vec<Fqsen> {
        let mut fqsens: Vec<_> = self
            .elements
            .iter()
            .filter(|e| e.value().kind() == kind)
            .map(|e| e.key().clone())
            .collect();
        fqsens.sort();
        fqsens
    }

    /// Every published function, sorted by FQSEN.
    pub fn functions(&self) -> Vec<Arc<Function>> {
        let mut functions: Vec<_> = self
            .elements
            .iter()
            .filter_map(|e| e.value().as_function().cloned())
            .collect();
        functions.sort_by(|a, b| a.fqsen().cmp(b.fqsen()));
        functions
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
