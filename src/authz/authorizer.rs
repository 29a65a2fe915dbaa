/*!
 * WAC Authorizer
 * Request-level authorize-or-reject decision
 */

use super::evaluator::mode_is_granted;
use super::types::{AccessMode, AuthzError, AuthzResult, PermissionSet};
use crate::acl::AclResolver;
use crate::core::{Credentials, ResourceIdentifier};
use crate::store::{AclLocator, Namespace, TripleReader};
use log::{debug, warn};
use std::sync::Arc;

/// Central authorizer for incoming requests
///
/// Invoked once per request after upstream handling has determined the
/// target identifier and the requested modes. Each check is an
/// independent, linear sequence of awaited collaborator reads; the
/// authorizer holds no mutable state and performs no writes.
#[derive(Clone)]
pub struct WacAuthorizer {
    locator: Arc<dyn AclLocator>,
    resolver: AclResolver,
}

impl WacAuthorizer {
    /// Create an authorizer over the given collaborators
    pub fn new(
        locator: Arc<dyn AclLocator>,
        reader: Arc<dyn TripleReader>,
        namespace: Arc<dyn Namespace>,
    ) -> Self {
        Self {
            resolver: AclResolver::new(locator.clone(), reader, namespace),
            locator,
        }
    }

    /// Decide whether the request may proceed
    ///
    /// Resolves the applicable ACL statements once, then checks every
    /// requested mode in declared order; the first denied mode aborts
    /// the check. When the target is itself an ACL document, exactly
    /// `control` is checked and the requested set is ignored, so ACL
    /// documents are never readable or writable under permissions meant
    /// for ordinary content.
    ///
    /// Denials surface as [`AuthzError::Unauthenticated`] (no agent
    /// identity) or [`AuthzError::Forbidden`] (known agent lacking
    /// rights); collaborator failures other than not-found pass through
    /// unchanged.
    pub async fn authorize(
        &self,
        credentials: &Credentials,
        target: &ResourceIdentifier,
        requested: &PermissionSet,
    ) -> AuthzResult<()> {
        let modes: Vec<AccessMode> = if self.locator.is_acl_document(target).await {
            vec![AccessMode::Control]
        } else {
            requested.requested().collect()
        };

        let applicable = self.resolver.resolve(target).await?;

        for mode in modes {
            if !mode_is_granted(&applicable, credentials, mode) {
                warn!(
                    "denied {} access to {} for {}",
                    mode,
                    target,
                    credentials.web_id().unwrap_or("anonymous agent")
                );
                return Err(denial(credentials, target, mode));
            }
            debug!("granted {} access to {}", mode, target);
        }

        Ok(())
    }
}

fn denial(credentials: &Credentials, target: &ResourceIdentifier, mode: AccessMode) -> AuthzError {
    match credentials.web_id() {
        None => AuthzError::Unauthenticated {
            reason: format!("{mode} access to {target} requires authentication"),
        },
        Some(web_id) => AuthzError::Forbidden {
            reason: format!("agent {web_id} lacks {mode} access to {target}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryTripleStore, SlashNamespace, SuffixAclLocator};
    use crate::triples::{vocab, Triple, TripleSet};

    const ALICE: &str = "https://example.org/alice";

    fn authorizer(store: &MemoryTripleStore) -> WacAuthorizer {
        WacAuthorizer::new(
            Arc::new(SuffixAclLocator::new()),
            Arc::new(store.clone()),
            Arc::new(SlashNamespace::new("/")),
        )
    }

    fn public_read_acl(scope: &str, object: &str) -> TripleSet {
        [
            Triple::new("#pub", scope, object),
            Triple::new("#pub", vocab::acl::MODE, vocab::acl::READ),
            Triple::new("#pub", vocab::acl::AGENT_CLASS, vocab::foaf::AGENT),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_empty_request_succeeds() {
        let store = MemoryTripleStore::new();
        authorizer(&store)
            .authorize(
                &Credentials::anonymous(),
                &ResourceIdentifier::new("/a"),
                &PermissionSet::none(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_first_denied_mode_reported() {
        let store = MemoryTripleStore::new();
        store.insert(
            ResourceIdentifier::new("/a.acl"),
            public_read_acl(vocab::acl::ACCESS_TO, "/a"),
        );

        // Read is granted, write is not; write is the first denial in
        // declared order even though control is also missing.
        let err = authorizer(&store)
            .authorize(
                &Credentials::authenticated(ALICE),
                &ResourceIdentifier::new("/a"),
                &PermissionSet::all(),
            )
            .await
            .unwrap_err();

        match err {
            AuthzError::Forbidden { reason } => assert!(reason.contains("write")),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_acl_document_checked_under_control() {
        let store = MemoryTripleStore::new();
        // The ACL of /a grants public Read on /a, and Control to alice.
        let mut triples = public_read_acl(vocab::acl::ACCESS_TO, "/a");
        triples.extend([
            Triple::new("#owner", vocab::acl::ACCESS_TO, "/a.acl"),
            Triple::new("#owner", vocab::acl::MODE, vocab::acl::CONTROL),
            Triple::new("#owner", vocab::acl::AGENT, ALICE),
        ]);
        store.insert(ResourceIdentifier::new("/a.acl"), triples);

        let authz = authorizer(&store);
        let acl_target = ResourceIdentifier::new("/a.acl");

        // A read-only request on the ACL document still requires control.
        authz
            .authorize(
                &Credentials::authenticated(ALICE),
                &acl_target,
                &PermissionSet::read_only(),
            )
            .await
            .unwrap();

        let err = authz
            .authorize(
                &Credentials::anonymous(),
                &acl_target,
                &PermissionSet::read_only(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AuthzError::Unauthenticated { .. }));
    }
}
