/*!
 * ACL Resolver
 * Upward hierarchy walk to the nearest governing ACL document
 */

use crate::core::ResourceIdentifier;
use crate::store::{AclLocator, Namespace, NamespaceError, StoreError, TripleReader};
use crate::triples::{vocab, TripleSet};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort ACL resolution
///
/// Not-found conditions never appear here: they are absorbed by the
/// walk itself. Anything surfacing from resolution is an
/// infrastructure failure, not an authorization decision.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ResolveError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}

/// Finds the authorization statements applicable to a target resource
///
/// Walks upward from the target through its ancestor containers and
/// stops at the first level whose ACL document exists. The nearest
/// ACL wins; more distant ancestors are never consulted once one is
/// found. The walk performs at most one statement fetch per level and
/// is bounded by the depth of the namespace.
#[derive(Clone)]
pub struct AclResolver {
    locator: Arc<dyn AclLocator>,
    reader: Arc<dyn TripleReader>,
    namespace: Arc<dyn Namespace>,
}

impl AclResolver {
    /// Create a resolver over the given collaborators
    pub fn new(
        locator: Arc<dyn AclLocator>,
        reader: Arc<dyn TripleReader>,
        namespace: Arc<dyn Namespace>,
    ) -> Self {
        Self {
            locator,
            reader,
            namespace,
        }
    }

    /// Resolve the authorization statements applicable to `target`
    ///
    /// A directly found ACL is narrowed by its `acl:accessTo`
    /// statements; an ACL found on an ancestor container is narrowed by
    /// its `acl:default` statements, scoped to the probed ancestor. A
    /// namespace with no ACL document anywhere up to and including the
    /// root yields an empty set.
    pub async fn resolve(&self, target: &ResourceIdentifier) -> Result<TripleSet, ResolveError> {
        let mut probe = target.clone();
        let mut inherited = false;

        loop {
            let acl_id = self.locator.acl_document_for(&probe).await;
            match self.reader.read_triples(&acl_id).await {
                Ok(triples) => {
                    let scope = if inherited {
                        vocab::acl::DEFAULT
                    } else {
                        vocab::acl::ACCESS_TO
                    };
                    let applicable = triples.select_by_subject_match(scope, probe.as_str());
                    debug!(
                        "resolved ACL {} for {}: {} applicable statement(s)",
                        acl_id,
                        target,
                        applicable.len()
                    );
                    return Ok(applicable);
                }
                Err(err) if err.is_not_found() => {
                    if self.namespace.is_root(&probe) {
                        debug!("no ACL document up to the root for {}", target);
                        return Ok(TripleSet::new());
                    }
                    let parent = self.namespace.parent_container_of(&probe)?;
                    if parent == probe {
                        warn!("namespace returned {} as its own parent", probe);
                        return Err(NamespaceError::NotHierarchical(probe.to_string()).into());
                    }
                    probe = parent;
                    inherited = true;
                }
                Err(err) => {
                    warn!("reading ACL {} for {} failed: {}", acl_id, target, err);
                    return Err(err.into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryTripleStore, SlashNamespace, SuffixAclLocator};
    use crate::triples::Triple;

    fn resolver(store: &MemoryTripleStore) -> AclResolver {
        AclResolver::new(
            Arc::new(SuffixAclLocator::new()),
            Arc::new(store.clone()),
            Arc::new(SlashNamespace::new("/")),
        )
    }

    fn acl_entry(subject: &str, scope: &str, object: &str) -> TripleSet {
        [Triple::new(subject, scope, object)].into_iter().collect()
    }

    #[tokio::test]
    async fn test_direct_acl_uses_access_to() {
        let store = MemoryTripleStore::new();
        let mut triples = acl_entry("#auth", vocab::acl::ACCESS_TO, "/a/b");
        triples.push(Triple::new("#auth", vocab::acl::MODE, vocab::acl::READ));
        // A default statement on a directly found ACL must not widen the result
        triples.push(Triple::new("#other", vocab::acl::DEFAULT, "/a/b"));
        store.insert(ResourceIdentifier::new("/a/b.acl"), triples);

        let applicable = resolver(&store)
            .resolve(&ResourceIdentifier::new("/a/b"))
            .await
            .unwrap();

        assert!(applicable.contains_match(Some("#auth"), None, None));
        assert!(!applicable.contains_match(Some("#other"), None, None));
    }

    #[tokio::test]
    async fn test_ancestor_acl_uses_default() {
        let store = MemoryTripleStore::new();
        let mut triples = acl_entry("#inherit", vocab::acl::DEFAULT, "/a/");
        triples.push(Triple::new("#direct", vocab::acl::ACCESS_TO, "/a/"));
        store.insert(ResourceIdentifier::new("/a/.acl"), triples);

        let applicable = resolver(&store)
            .resolve(&ResourceIdentifier::new("/a/b/c"))
            .await
            .unwrap();

        assert!(applicable.contains_match(Some("#inherit"), None, None));
        assert!(!applicable.contains_match(Some("#direct"), None, None));
    }

    #[tokio::test]
    async fn test_nearest_acl_wins() {
        let store = MemoryTripleStore::new();
        store.insert(
            ResourceIdentifier::new("/a/b/.acl"),
            acl_entry("#near", vocab::acl::DEFAULT, "/a/b/"),
        );
        store.insert(
            ResourceIdentifier::new("/a/.acl"),
            acl_entry("#far", vocab::acl::DEFAULT, "/a/"),
        );

        let applicable = resolver(&store)
            .resolve(&ResourceIdentifier::new("/a/b/c"))
            .await
            .unwrap();

        assert!(applicable.contains_match(Some("#near"), None, None));
        assert!(!applicable.contains_match(Some("#far"), None, None));
    }

    #[tokio::test]
    async fn test_no_acl_anywhere_yields_empty_set() {
        let store = MemoryTripleStore::new();

        let applicable = resolver(&store)
            .resolve(&ResourceIdentifier::new("/a/b/c"))
            .await
            .unwrap();

        assert!(applicable.is_empty());
    }

    #[tokio::test]
    async fn test_infrastructure_error_propagates() {
        struct FailingReader;

        #[async_trait::async_trait]
        impl TripleReader for FailingReader {
            async fn read_triples(&self, id: &ResourceIdentifier) -> Result<TripleSet, StoreError> {
                Err(StoreError::Io(format!("disk failure reading {id}")))
            }
        }

        let resolver = AclResolver::new(
            Arc::new(SuffixAclLocator::new()),
            Arc::new(FailingReader),
            Arc::new(SlashNamespace::new("/")),
        );

        let err = resolver
            .resolve(&ResourceIdentifier::new("/a/b"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Store(StoreError::Io(_))));
    }
}
