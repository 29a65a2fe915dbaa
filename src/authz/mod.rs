/*!
 * Authorization Module
 * Permission evaluation and the request-level authorize entry point
 *
 * The single exposed operation is [`WacAuthorizer::authorize`]: given a
 * request's credentials, target identifier, and requested access modes,
 * it renders one authorize-or-reject decision following the Web Access
 * Control model. The core never mutates resources; it only reads ACL
 * state through the store collaborators.
 *
 * ## Usage
 * ```ignore
 * use wac_authz::{Credentials, PermissionSet, ResourceIdentifier, WacAuthorizer};
 *
 * let authorizer = WacAuthorizer::new(locator, reader, namespace);
 *
 * let target = ResourceIdentifier::new("/docs/report");
 * match authorizer.authorize(&credentials, &target, &PermissionSet::read_only()).await {
 *     Ok(()) => { /* proceed with the request */ }
 *     Err(err) => { /* unauthenticated, forbidden, or infrastructure failure */ }
 * }
 * ```
 */

mod authorizer;
mod evaluator;
mod types;

pub use authorizer::WacAuthorizer;
pub use evaluator::mode_is_granted;
pub use types::{AccessMode, AuthzError, AuthzResult, PermissionSet};
