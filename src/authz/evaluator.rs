/*!
 * Permission Evaluator
 * Pure grant check of one access mode against applicable statements
 */

use super::types::AccessMode;
use crate::core::Credentials;
use crate::triples::{vocab, TripleSet};

/// Whether the applicable statements grant `mode` to `credentials`
///
/// Selects the authorization entities carrying an `acl:mode` statement
/// for the checked mode, then grants iff any of them matches the
/// credentials: a `foaf:Agent` class grant (public), an
/// `acl:AuthenticatedAgent` class grant (any agent with a WebID), or an
/// exact `acl:agent` WebID grant. The three grant predicates are
/// independent; one match suffices. Pure function of its inputs.
///
/// `acl:agentGroup` and `acl:origin` grants are not evaluated; entities
/// carrying only those never match.
pub fn mode_is_granted(triples: &TripleSet, credentials: &Credentials, mode: AccessMode) -> bool {
    let entities = triples.select_by_subject_match(vocab::acl::MODE, mode.iri());
    if entities.is_empty() {
        return false;
    }

    if entities.contains_match(None, Some(vocab::acl::AGENT_CLASS), Some(vocab::foaf::AGENT)) {
        return true;
    }

    match credentials.web_id() {
        Some(web_id) => {
            entities.contains_match(
                None,
                Some(vocab::acl::AGENT_CLASS),
                Some(vocab::acl::AUTHENTICATED_AGENT),
            ) || entities.contains_match(None, Some(vocab::acl::AGENT), Some(web_id))
        }
        None => false,
    }
}
