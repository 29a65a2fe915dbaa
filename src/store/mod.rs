/*!
 * Store Module
 * Collaborator surface of the authorization core
 *
 * The core never stores anything itself: ACL documents are read through
 * these interfaces, provided by the surrounding server. Reference
 * implementations cover the common slash-hierarchy layout and an
 * in-memory backend for tests and embedders.
 */

mod locator;
mod memory;
mod traits;
mod types;

pub use locator::{SlashNamespace, SuffixAclLocator};
pub use memory::MemoryTripleStore;
pub use traits::{AclLocator, Namespace, TripleReader};
pub use types::{NamespaceError, StoreError, StoreResult};
