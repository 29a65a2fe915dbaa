/*!
 * Core Types
 * Resource identifiers and requester credentials
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a resource in the hierarchical namespace
///
/// Treated as an opaque path/URI string. Containers carry a trailing
/// slash; every non-root identifier has exactly one parent container
/// (computed by the namespace collaborator, not by this type).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceIdentifier {
    path: String,
}

impl ResourceIdentifier {
    /// Create an identifier from a path/URI string
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Whether this identifier denotes a container
    pub fn is_container(&self) -> bool {
        self.path.ends_with('/')
    }

    /// Consume and return the underlying string
    pub fn into_string(self) -> String {
        self.path
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for ResourceIdentifier {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ResourceIdentifier {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// Identity of the requester for one authorization check
///
/// Carries an optional WebID; absence means the request is anonymous.
/// Immutable for the duration of a check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    web_id: Option<String>,
}

impl Credentials {
    /// Credentials of an anonymous/unauthenticated request
    pub fn anonymous() -> Self {
        Self { web_id: None }
    }

    /// Credentials carrying an authenticated agent's WebID
    pub fn authenticated(web_id: impl Into<String>) -> Self {
        Self {
            web_id: Some(web_id.into()),
        }
    }

    /// The agent's WebID, if authenticated
    pub fn web_id(&self) -> Option<&str> {
        self.web_id.as_deref()
    }

    /// Whether the credentials carry an agent identity
    pub fn is_authenticated(&self) -> bool {
        self.web_id.is_some()
    }
}
