/*!
 * Core Module
 * Shared primitives used across the authorization core
 */

mod types;

pub use types::{Credentials, ResourceIdentifier};
