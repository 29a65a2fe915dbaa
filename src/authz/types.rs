/*!
 * Authorization Types
 * Access modes, requested permission sets, and decision errors
 */

use crate::acl::ResolveError;
use crate::store::{NamespaceError, StoreError};
use crate::triples::vocab;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for authorization decisions
pub type AuthzResult<T> = Result<T, AuthzError>;

/// Authorization errors
///
/// `Unauthenticated` and `Forbidden` are decisions; the remaining
/// variants carry infrastructure failures through unchanged so callers
/// can distinguish "denied" from "broken".
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AuthzError {
    #[error("Authentication required: {reason}")]
    Unauthenticated { reason: String },

    #[error("Access denied: {reason}")]
    Forbidden { reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Namespace(#[from] NamespaceError),
}

impl From<ResolveError> for AuthzError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Store(err) => AuthzError::Store(err),
            ResolveError::Namespace(err) => AuthzError::Namespace(err),
        }
    }
}

impl AuthzError {
    /// Whether this is an authorization decision rather than a failure
    /// of the underlying collaborators
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            AuthzError::Unauthenticated { .. } | AuthzError::Forbidden { .. }
        )
    }
}

/// Access mode being requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    Read,
    Write,
    Append,
    Control,
}

impl AccessMode {
    /// All modes, in declared order; drives which denial is reported
    /// first when several requested modes are denied
    pub const ALL: [AccessMode; 4] = [
        AccessMode::Read,
        AccessMode::Write,
        AccessMode::Append,
        AccessMode::Control,
    ];

    /// The vocabulary IRI naming this mode in ACL statements
    pub fn iri(&self) -> &'static str {
        match self {
            AccessMode::Read => vocab::acl::READ,
            AccessMode::Write => vocab::acl::WRITE,
            AccessMode::Append => vocab::acl::APPEND,
            AccessMode::Control => vocab::acl::CONTROL,
        }
    }

    /// Lowercase mode name
    pub fn name(&self) -> &'static str {
        match self {
            AccessMode::Read => "read",
            AccessMode::Write => "write",
            AccessMode::Append => "append",
            AccessMode::Control => "control",
        }
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of access modes a request asks for
///
/// Fixed keys; only modes marked `true` are checked. Iteration follows
/// the declared order of [`AccessMode::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermissionSet {
    pub read: bool,
    pub write: bool,
    pub append: bool,
    pub control: bool,
}

impl PermissionSet {
    /// Empty set; authorization trivially succeeds
    pub const fn none() -> Self {
        Self {
            read: false,
            write: false,
            append: false,
            control: false,
        }
    }

    /// Read access only
    pub const fn read_only() -> Self {
        Self {
            read: true,
            write: false,
            append: false,
            control: false,
        }
    }

    /// Read and write access
    pub const fn read_write() -> Self {
        Self {
            read: true,
            write: true,
            append: false,
            control: false,
        }
    }

    /// Every mode
    pub const fn all() -> Self {
        Self {
            read: true,
            write: true,
            append: true,
            control: true,
        }
    }

    /// Build a set from individual modes
    pub fn of(modes: &[AccessMode]) -> Self {
        let mut set = Self::none();
        for mode in modes {
            set.set(*mode, true);
        }
        set
    }

    /// Mark a mode as requested or not
    pub fn set(&mut self, mode: AccessMode, requested: bool) {
        match mode {
            AccessMode::Read => self.read = requested,
            AccessMode::Write => self.write = requested,
            AccessMode::Append => self.append = requested,
            AccessMode::Control => self.control = requested,
        }
    }

    /// Whether a mode is requested
    pub fn contains(&self, mode: AccessMode) -> bool {
        match mode {
            AccessMode::Read => self.read,
            AccessMode::Write => self.write,
            AccessMode::Append => self.append,
            AccessMode::Control => self.control,
        }
    }

    /// The requested modes, in declared order
    pub fn requested(&self) -> impl Iterator<Item = AccessMode> + '_ {
        AccessMode::ALL
            .into_iter()
            .filter(move |mode| self.contains(*mode))
    }

    /// Whether no mode is requested
    pub fn is_empty(&self) -> bool {
        !(self.read || self.write || self.append || self.control)
    }
}
