/*!
 * Triples Module
 * RDF-like triple collections and the WAC vocabulary
 *
 * Authorization state is expressed as (subject, predicate, object)
 * statements loaded from ACL documents. This module provides the
 * collection type plus the subject-match selection used to isolate
 * authorization entities from a larger statement set.
 */

mod store;
mod types;
pub mod vocab;

pub use store::TripleSet;
pub use types::Triple;
