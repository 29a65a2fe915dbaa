/*!
 * WAC Authorization Core
 * Web Access Control decision engine for a Linked-Data storage server
 *
 * Given a request's credentials, a target resource identifier, and the
 * requested access modes, decides whether the request may proceed.
 * Resource bodies, RDF parsing, HTTP transport, and credential
 * extraction live outside this crate; ACL state is read through the
 * collaborator traits in [`store`] and the decision is rendered by
 * [`authz::WacAuthorizer`].
 */

pub mod acl;
pub mod authz;
pub mod core;
pub mod store;
pub mod triples;

// Re-exports
pub use acl::{AclResolver, ResolveError};
pub use authz::{AccessMode, AuthzError, AuthzResult, PermissionSet, WacAuthorizer};
pub use crate::core::{Credentials, ResourceIdentifier};
pub use store::{
    AclLocator, MemoryTripleStore, Namespace, NamespaceError, SlashNamespace, StoreError,
    StoreResult, SuffixAclLocator, TripleReader,
};
pub use triples::{vocab, Triple, TripleSet};
