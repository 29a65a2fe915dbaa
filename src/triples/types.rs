/*!
 * Triple Types
 * A single (subject, predicate, object) statement
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// One RDF-like statement from an ACL document
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Triple {
    /// Subject of the statement; distinct subjects form authorization entities
    pub subject: String,
    /// Predicate of the statement
    pub predicate: String,
    /// Object of the statement
    pub object: String,
}

impl Triple {
    /// Create a new statement
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Match against a pattern; `None` positions match any term
    pub fn matches(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&str>,
    ) -> bool {
        subject.map_or(true, |s| self.subject == s)
            && predicate.map_or(true, |p| self.predicate == p)
            && object.map_or(true, |o| self.object == o)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> <{}>", self.subject, self.predicate, self.object)
    }
}
