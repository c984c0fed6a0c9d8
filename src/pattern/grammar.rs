use crate::combinator::{
    Parser, Recursive, any_char, concat_until, either_first, literal, one_or_more, pick_nth, regex,
};
use crate::options::PatternOptions;

use super::ast::AstNode;
use super::error::{PatternError, PatternResult};

/// The token parsers of the url pattern language for one set of options.
///
/// Token priority at every position is: named wildcard, wildcard, optional
/// segment, named segment, static content. Static content runs until the
/// next special token would start, so static runs are always maximal.
///
/// Optional segments are parsed recursively with no depth limit, so a
/// pathologically deep nesting of optional segments can exhaust the stack.
#[derive(Debug)]
pub struct Grammar {
    escaped_char: Parser<String>,
    static_content: Parser<AstNode>,
    named_segment: Parser<AstNode>,
    wildcard: Parser<AstNode>,
    named_wildcard: Parser<AstNode>,
    optional_segment: Parser<AstNode>,
    token: Parser<AstNode>,
    pattern: Parser<Vec<AstNode>>,
    // owns the parser that `optional_segment` refers back to
    _recursion: Recursive<Vec<AstNode>>,
}

impl Grammar {
    #[tracing::instrument(level = "trace", skip(options))]
    pub fn new(options: &PatternOptions) -> PatternResult<Self> {
        let escaped_char = pick_nth(1, vec![literal(options.escape_char), any_char()]);

        let segment_name = charset_run(&options.segment_name_charset)?;
        let mut name_parts = vec![literal(options.segment_name_start_char), segment_name];
        if let Some(end) = options.segment_name_end_char {
            name_parts.push(literal(end));
        }
        let delimited_name = pick_nth(1, name_parts);

        let named_segment = delimited_name.clone().map(AstNode::NamedSegment);
        let wildcard = literal(options.wildcard_char).map(|_| AstNode::Wildcard);
        let named_wildcard = pick_nth(1, vec![literal(options.wildcard_char), delimited_name])
            .map(AstNode::NamedWildcard);

        let recursion = Recursive::declare();
        let optional_segment = pick_nth(
            1,
            vec![
                delimiter(options.optional_segment_start_char),
                recursion.reference(),
                delimiter(options.optional_segment_end_char),
            ],
        )
        .map(AstNode::OptionalSegment);

        let special_token_start = either_first(vec![
            literal(options.segment_name_start_char).map(drop),
            literal(options.optional_segment_start_char).map(drop),
            literal(options.optional_segment_end_char).map(drop),
            wildcard.clone().map(drop),
            named_wildcard.clone().map(drop),
        ]);
        let static_content = concat_until(
            either_first(vec![escaped_char.clone(), any_char()]),
            special_token_start,
        )
        .map(AstNode::StaticContent);

        let token = either_first(vec![
            named_wildcard.clone(),
            wildcard.clone(),
            optional_segment.clone(),
            named_segment.clone(),
            static_content.clone(),
        ]);
        let pattern = recursion.define(one_or_more(token.clone()));

        Ok(Self {
            escaped_char,
            static_content,
            named_segment,
            wildcard,
            named_wildcard,
            optional_segment,
            token,
            pattern,
            _recursion: recursion,
        })
    }

    pub fn escaped_char(&self) -> &Parser<String> {
        &self.escaped_char
    }

    pub fn static_content(&self) -> &Parser<AstNode> {
        &self.static_content
    }

    pub fn named_segment(&self) -> &Parser<AstNode> {
        &self.named_segment
    }

    pub fn wildcard(&self) -> &Parser<AstNode> {
        &self.wildcard
    }

    pub fn named_wildcard(&self) -> &Parser<AstNode> {
        &self.named_wildcard
    }

    pub fn optional_segment(&self) -> &Parser<AstNode> {
        &self.optional_segment
    }

    pub fn token(&self) -> &Parser<AstNode> {
        &self.token
    }

    /// One or more tokens. Does not require the whole input to be consumed.
    pub fn pattern(&self) -> &Parser<Vec<AstNode>> {
        &self.pattern
    }
}

fn charset_run(charset: &str) -> PatternResult<Parser<String>> {
    regex(&format!("[{charset}]+")).map_err(|err| PatternError::InvalidCharset {
        charset: charset.to_string(),
        error: err.to_string(),
    })
}

fn delimiter(ch: char) -> Parser<Vec<AstNode>> {
    literal(ch).map(|_| Vec::new())
}
