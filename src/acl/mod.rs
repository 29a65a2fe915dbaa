/*!
 * ACL Module
 * Resolution of the governing ACL document for a target resource
 */

mod resolver;

pub use resolver::{AclResolver, ResolveError};
