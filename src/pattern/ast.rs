/// Capture name used for wildcards that were not given an explicit name.
pub const WILDCARD_NAME: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// Text that is matched and emitted verbatim (escapes already resolved).
    StaticContent(String),
    /// One or more characters of the segment value charset.
    NamedSegment(String),
    /// Anything, matched lazily, captured under [`WILDCARD_NAME`].
    Wildcard,
    /// A wildcard captured under an explicit name, e.g. `*:path`.
    NamedWildcard(String),
    /// A sub-pattern that may be absent entirely. Never empty.
    OptionalSegment(Vec<AstNode>),
}

impl AstNode {
    /// Name this node captures under, if it captures at all.
    pub fn capture_name(&self) -> Option<&str> {
        match self {
            AstNode::NamedSegment(name) | AstNode::NamedWildcard(name) => Some(name),
            AstNode::Wildcard => Some(WILDCARD_NAME),
            AstNode::StaticContent(_) | AstNode::OptionalSegment(_) => None,
        }
    }
}
