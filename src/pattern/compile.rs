use regex::Regex;

use super::ast::{AstNode, WILDCARD_NAME};
use super::error::{PatternError, PatternResult};

const WILDCARD_REGEX: &str = "(.*?)";

/// Lowers the AST into regex source anchored at both ends.
///
/// Every named segment, wildcard and named wildcard becomes exactly one
/// capturing group, in left-to-right order. `segment_value_charset` is
/// inserted into the character class as is.
pub fn compile_regex_source(ast: &[AstNode], segment_value_charset: &str) -> String {
    let mut out = String::with_capacity(ast.len() * 8 + 2);
    out.push('^');
    push_sequence(&mut out, ast, segment_value_charset);
    out.push('$');
    out
}

fn push_sequence(out: &mut String, nodes: &[AstNode], charset: &str) {
    for node in nodes {
        push_node(out, node, charset);
    }
}

fn push_node(out: &mut String, node: &AstNode, charset: &str) {
    match node {
        AstNode::StaticContent(text) => out.push_str(&regex::escape(text)),
        AstNode::NamedSegment(_) => {
            out.push_str("([");
            out.push_str(charset);
            out.push_str("]+)");
        }
        AstNode::Wildcard | AstNode::NamedWildcard(_) => out.push_str(WILDCARD_REGEX),
        AstNode::OptionalSegment(children) => {
            out.push_str("(?:");
            push_sequence(out, children, charset);
            out.push_str(")?");
        }
    }
}

/// Capture names in the same order as the groups of [`compile_regex_source`].
pub fn capture_names(ast: &[AstNode]) -> Vec<String> {
    let mut names = Vec::new();
    collect_names(ast, &mut names);
    names
}

fn collect_names(nodes: &[AstNode], names: &mut Vec<String>) {
    for node in nodes {
        match node {
            AstNode::StaticContent(_) => {}
            AstNode::NamedSegment(name) | AstNode::NamedWildcard(name) => {
                names.push(name.clone())
            }
            AstNode::Wildcard => names.push(WILDCARD_NAME.to_string()),
            AstNode::OptionalSegment(children) => collect_names(children, names),
        }
    }
}

#[tracing::instrument(level = "trace", skip(ast), fields(nodes = ast.len() as u64))]
pub fn compile_regex(pattern: &str, ast: &[AstNode], segment_value_charset: &str) -> PatternResult<Regex> {
    let source = compile_regex_source(ast, segment_value_charset);
    Regex::new(&source).map_err(|err| PatternError::InvalidRegex {
        pattern: pattern.to_string(),
        source_regex: source.clone(),
        error: err.to_string(),
    })
}

/// Number of capturing groups in `regex`, not counting the implicit whole match.
pub fn regex_group_count(regex: &Regex) -> usize {
    regex.captures_len().saturating_sub(1)
}
