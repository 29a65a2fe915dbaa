/*!
 * Locator Implementations
 * Companion-document ACL location and slash-hierarchy parents
 */

use super::traits::{AclLocator, Namespace};
use super::types::NamespaceError;
use crate::core::ResourceIdentifier;
use async_trait::async_trait;

/// ACL locator following the companion-document convention
///
/// A resource's ACL document lives at the resource's identifier plus a
/// fixed suffix; an identifier already carrying the suffix is its own
/// ACL document.
#[derive(Debug, Clone)]
pub struct SuffixAclLocator {
    suffix: String,
}

impl SuffixAclLocator {
    /// Create a locator using the conventional `.acl` suffix
    pub fn new() -> Self {
        Self::with_suffix(".acl")
    }

    /// Create a locator with a custom suffix
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixAclLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AclLocator for SuffixAclLocator {
    async fn is_acl_document(&self, id: &ResourceIdentifier) -> bool {
        id.as_str().ends_with(&self.suffix)
    }

    async fn acl_document_for(&self, id: &ResourceIdentifier) -> ResourceIdentifier {
        if id.as_str().ends_with(&self.suffix) {
            id.clone()
        } else {
            ResourceIdentifier::new(format!("{}{}", id.as_str(), self.suffix))
        }
    }
}

/// Namespace over slash-separated hierarchical identifiers
///
/// The parent of an identifier is computed by stripping its final path
/// segment. The walk bottoms out at the configured root container,
/// which has no parent.
#[derive(Debug, Clone)]
pub struct SlashNamespace {
    root: ResourceIdentifier,
}

impl SlashNamespace {
    /// Create a namespace rooted at the given container identifier
    pub fn new(root: impl Into<ResourceIdentifier>) -> Self {
        Self { root: root.into() }
    }

    /// The root container identifier
    pub fn root(&self) -> &ResourceIdentifier {
        &self.root
    }
}

impl Namespace for SlashNamespace {
    fn is_root(&self, id: &ResourceIdentifier) -> bool {
        id == &self.root
    }

    fn parent_container_of(
        &self,
        id: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, NamespaceError> {
        if self.is_root(id) {
            return Err(NamespaceError::RootHasNoParent(id.to_string()));
        }
        let path = id.as_str();
        if !path.starts_with(self.root.as_str()) {
            return Err(NamespaceError::NotHierarchical(id.to_string()));
        }

        // Containers carry a trailing slash; drop it before cutting the
        // final segment so a container's parent is its enclosing container.
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let cut = trimmed
            .rfind('/')
            .ok_or_else(|| NamespaceError::NotHierarchical(id.to_string()))?;
        let parent = &trimmed[..=cut];
        if parent.len() < self.root.as_str().len() {
            return Err(NamespaceError::NotHierarchical(id.to_string()));
        }

        Ok(ResourceIdentifier::new(parent))
    }
}
