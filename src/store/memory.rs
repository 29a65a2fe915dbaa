/*!
 * In-Memory Triple Store
 * Volatile statement storage for testing and direct embedding
 */

use super::traits::TripleReader;
use super::types::{StoreError, StoreResult};
use crate::core::ResourceIdentifier;
use crate::triples::TripleSet;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory `TripleReader` implementation
///
/// Documents are keyed by identifier; a read of an absent identifier
/// reports `StoreError::NotFound`. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryTripleStore {
    documents: Arc<DashMap<ResourceIdentifier, TripleSet>>,
}

impl MemoryTripleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document's statements
    pub fn insert(&self, id: ResourceIdentifier, triples: TripleSet) {
        self.documents.insert(id, triples);
    }

    /// Remove a document; returns its statements if it existed
    pub fn remove(&self, id: &ResourceIdentifier) -> Option<TripleSet> {
        self.documents.remove(id).map(|(_, triples)| triples)
    }

    /// Whether a document exists
    pub fn contains(&self, id: &ResourceIdentifier) -> bool {
        self.documents.contains_key(id)
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl TripleReader for MemoryTripleStore {
    async fn read_triples(&self, id: &ResourceIdentifier) -> StoreResult<TripleSet> {
        self.documents
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
