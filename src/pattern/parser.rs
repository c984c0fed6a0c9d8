use crate::options::PatternOptions;

use super::ast::AstNode;
use super::error::{PatternError, PatternResult};
use super::grammar::Grammar;

/// Parses a complete pattern string into its AST.
///
/// The whole input must be consumed. When only a prefix parses, the error
/// carries the 1-based character position of the first unparsed character.
#[tracing::instrument(level = "trace", skip(options), fields(pattern_len = pattern.len() as u64))]
pub fn parse_pattern(pattern: &str, options: &PatternOptions) -> PatternResult<Vec<AstNode>> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if pattern.chars().any(char::is_whitespace) {
        return Err(PatternError::ContainsWhitespace {
            pattern: pattern.to_string(),
        });
    }

    let grammar = Grammar::new(options)?;
    let parsed = grammar
        .pattern()
        .parse(pattern)
        .ok_or_else(|| PatternError::Unparsable {
            pattern: pattern.to_string(),
        })?;

    if !parsed.rest.is_empty() {
        let consumed = &pattern[..pattern.len() - parsed.rest.len()];
        let index = consumed.chars().count() + 1;
        tracing::debug!(pattern, index, "pattern only partially parsed");
        return Err(PatternError::PartialParse {
            pattern: pattern.to_string(),
            index,
        });
    }

    Ok(parsed.value)
}
