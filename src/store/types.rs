/*!
 * Store Types
 * Errors raised by the storage and namespace collaborators
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a storage collaborator call
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the storage collaborator
///
/// `NotFound` is the distinguished signal that drives the upward ACL
/// walk; every other variant is an infrastructure failure and aborts
/// the authorization check unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid representation: {0}")]
    InvalidRepresentation(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether this is the not-found resolution signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Errors from the namespace collaborator
///
/// Either indicates a broken namespace contract: the upward walk asked
/// for a parent that cannot exist, or the collaborator produced an
/// identifier that does not shorten the ancestor chain.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum NamespaceError {
    #[error("Root container has no parent: {0}")]
    RootHasNoParent(String),

    #[error("Identifier is not part of the hierarchy: {0}")]
    NotHierarchical(String),
}
