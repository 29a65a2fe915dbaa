/*!
 * WAC Vocabulary
 * Full IRIs of the terms consulted during authorization
 *
 * Only the terms below are ever matched on; statements using other
 * predicates are carried through selection untouched and ignored by
 * evaluation.
 */

/// Terms from the Basic Access Control ontology
pub mod acl {
    /// Namespace prefix for the ACL ontology
    pub const NS: &str = "http://www.w3.org/ns/auth/acl#";

    /// Direct scope: the authorization applies to exactly this resource
    pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";

    /// Inherited scope: the authorization applies to all descendants
    pub const DEFAULT: &str = "http://www.w3.org/ns/auth/acl#default";

    /// Links an authorization to a granted access mode
    pub const MODE: &str = "http://www.w3.org/ns/auth/acl#mode";

    /// Grants access to one specific agent by WebID
    pub const AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";

    /// Grants access to a class of agents
    pub const AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";

    /// Agent class covering every authenticated agent
    pub const AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";

    /// Access mode classes
    pub const READ: &str = "http://www.w3.org/ns/auth/acl#Read";
    pub const WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
    pub const APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
    pub const CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";
}

/// Terms from the FOAF ontology
pub mod foaf {
    /// Agent class covering everyone, authenticated or not
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
}
