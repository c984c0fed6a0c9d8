use hashbrown::HashMap;

use crate::params::Params;

use super::ast::AstNode;
use super::error::StringifyError;

/// Hands out values per name, one occurrence at a time.
///
/// The n-th occurrence of a name in the pattern receives the n-th value
/// supplied for it. State lives for a single `stringify` call.
struct ValueCursor<'p, 'a> {
    params: &'p Params,
    next_indexes: HashMap<&'a str, usize>,
}

impl<'p, 'a> ValueCursor<'p, 'a> {
    fn new(params: &'p Params) -> Self {
        Self {
            params,
            next_indexes: HashMap::new(),
        }
    }

    fn next_index(&self, name: &str) -> usize {
        self.next_indexes.get(name).copied().unwrap_or(0)
    }

    /// Next value for `name` without consuming it.
    fn peek(&self, name: &str) -> Option<&'p str> {
        self.params.get(name)?.get(self.next_index(name))
    }

    fn take(&mut self, name: &'a str) -> Result<&'p str, StringifyError> {
        let index = self.next_index(name);
        let value = self
            .params
            .get(name)
            .and_then(|value| value.get(index))
            .ok_or_else(|| {
                if index == 0 {
                    StringifyError::MissingValue {
                        name: name.to_string(),
                    }
                } else {
                    StringifyError::TooFewValues {
                        name: name.to_string(),
                    }
                }
            })?;
        self.next_indexes.insert(name, index + 1);
        Ok(value)
    }
}

/// Renders a concrete string from the AST, the inverse of matching.
///
/// Optional segments are emitted only when at least one name inside them
/// still has an unconsumed value; otherwise they are skipped without
/// consuming anything. Names supplied but not referenced are ignored.
#[tracing::instrument(level = "trace", skip(ast, params), fields(nodes = ast.len() as u64, param_count = params.len() as u64))]
pub fn stringify(ast: &[AstNode], params: &Params) -> Result<String, StringifyError> {
    let mut cursor = ValueCursor::new(params);
    let mut out = String::new();
    render_sequence(ast, &mut cursor, &mut out)?;
    Ok(out)
}

fn render_sequence<'a>(
    nodes: &'a [AstNode],
    cursor: &mut ValueCursor<'_, 'a>,
    out: &mut String,
) -> Result<(), StringifyError> {
    for node in nodes {
        render_node(node, cursor, out)?;
    }
    Ok(())
}

fn render_node<'a>(
    node: &'a AstNode,
    cursor: &mut ValueCursor<'_, 'a>,
    out: &mut String,
) -> Result<(), StringifyError> {
    match node {
        AstNode::StaticContent(text) => out.push_str(text),
        AstNode::OptionalSegment(children) => {
            if contains_provided_values(children, cursor) {
                render_sequence(children, cursor, out)?;
            }
        }
        AstNode::NamedSegment(_) | AstNode::Wildcard | AstNode::NamedWildcard(_) => {
            if let Some(name) = node.capture_name() {
                out.push_str(cursor.take(name)?);
            }
        }
    }
    Ok(())
}

fn contains_provided_values(nodes: &[AstNode], cursor: &ValueCursor<'_, '_>) -> bool {
    nodes.iter().any(|node| match node {
        AstNode::StaticContent(_) => false,
        AstNode::OptionalSegment(children) => contains_provided_values(children, cursor),
        AstNode::NamedSegment(_) | AstNode::Wildcard | AstNode::NamedWildcard(_) => node
            .capture_name()
            .is_some_and(|name| cursor.peek(name).is_some()),
    })
}
