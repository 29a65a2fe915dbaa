/*!
 * Store Traits
 * Interfaces the surrounding server must honor
 */

use super::types::{NamespaceError, StoreResult};
use crate::core::ResourceIdentifier;
use crate::triples::TripleSet;
use async_trait::async_trait;

/// Read access to stored resources
///
/// Implementations return the full statement set of a resource in the
/// internal, content-type-neutral representation (never the resource's
/// own negotiated media type). A missing resource is reported through
/// `StoreError::NotFound`.
#[async_trait]
pub trait TripleReader: Send + Sync {
    /// Read the statements of the identified resource
    async fn read_triples(&self, id: &ResourceIdentifier) -> StoreResult<TripleSet>;
}

/// Maps resources to the ACL documents that govern them
#[async_trait]
pub trait AclLocator: Send + Sync {
    /// Whether the identifier denotes an ACL document itself
    async fn is_acl_document(&self, id: &ResourceIdentifier) -> bool;

    /// The ACL document that would directly govern the identifier,
    /// whether or not it currently exists
    async fn acl_document_for(&self, id: &ResourceIdentifier) -> ResourceIdentifier;
}

/// Parent computation over the hierarchical namespace
pub trait Namespace: Send + Sync {
    /// Whether the identifier is the root container
    fn is_root(&self, id: &ResourceIdentifier) -> bool;

    /// The parent container of a non-root identifier
    fn parent_container_of(
        &self,
        id: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, NamespaceError>;
}
