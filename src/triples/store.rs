/*!
 * Triple Set
 * Ordered collection of statements with exact-match selection
 */

use super::types::Triple;
use ahash::HashSet;
use serde::{Deserialize, Serialize};

/// The statements loaded from one ACL document
///
/// Insertion-ordered; selection results are independent of that order
/// (same statements in, same statements out).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripleSet {
    triples: Vec<Triple>,
}

impl TripleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the set holds no statements
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Append a statement
    pub fn push(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Iterate over the statements
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Whether any statement matches the pattern (`None` matches any term)
    pub fn contains_match(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&str>,
    ) -> bool {
        self.triples
            .iter()
            .any(|t| t.matches(subject, predicate, object))
    }

    /// Select all statements whose subject has a (predicate, object) match
    ///
    /// Collects the distinct subjects of statements matching the given
    /// predicate and object, then returns every statement of those
    /// subjects. An empty result means no authorization entity applies.
    pub fn select_by_subject_match(&self, predicate: &str, object: &str) -> TripleSet {
        let subjects: HashSet<&str> = self
            .triples
            .iter()
            .filter(|t| t.predicate == predicate && t.object == object)
            .map(|t| t.subject.as_str())
            .collect();

        self.triples
            .iter()
            .filter(|t| subjects.contains(t.subject.as_str()))
            .cloned()
            .collect()
    }
}

impl FromIterator<Triple> for TripleSet {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for TripleSet {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl IntoIterator for TripleSet {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripleSet {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
