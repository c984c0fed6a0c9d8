use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hashbrown::HashSet;
use regex::Regex;
use smallvec::SmallVec;

use crate::options::PatternOptions;
use crate::params::{MatchResult, ParamValue, Params};
use crate::pattern::{
    AstNode, capture_names, compile_regex, parse_pattern, regex_group_count, stringify,
};

use super::errors::{UrlPatternError, UrlPatternResult};

type NameList = SmallVec<[String; 4]>;

/// Everything derived once at construction; never mutated afterwards.
#[derive(Debug)]
struct CompiledPattern {
    source: String,
    regex: Regex,
    ast: Option<Vec<AstNode>>,
    names: Option<NameList>,
}

/// A compiled url pattern, built either from pattern syntax or from a regex.
///
/// Cloning shares the compiled representation. Patterns are immutable and
/// can be matched from many threads at once.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    inner: Arc<CompiledPattern>,
}

impl UrlPattern {
    pub fn new(pattern: &str) -> UrlPatternResult<Self> {
        Self::with_options(pattern, &PatternOptions::default())
    }

    #[tracing::instrument(level = "debug", skip(options))]
    pub fn with_options(pattern: &str, options: &PatternOptions) -> UrlPatternResult<Self> {
        options.validate()?;

        let ast = parse_pattern(pattern, options)?;
        let regex = compile_regex(pattern, &ast, &options.segment_value_charset)?;
        let names: NameList = capture_names(&ast).into_iter().collect();
        debug_assert_eq!(regex_group_count(&regex), names.len());

        tracing::debug!(
            pattern,
            regex = regex.as_str(),
            captures = names.len() as u64,
            "compiled url pattern"
        );

        Ok(Self {
            inner: Arc::new(CompiledPattern {
                source: pattern.to_string(),
                regex,
                ast: Some(ast),
                names: Some(names),
            }),
        })
    }

    /// Wraps a native regex. Matches yield the raw groups in order.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            inner: Arc::new(CompiledPattern {
                source: regex.as_str().to_string(),
                regex,
                ast: None,
                names: None,
            }),
        }
    }

    /// Wraps a native regex and names its capture groups in order.
    ///
    /// There must be exactly one unique name per capture group.
    pub fn from_regex_with_names<I, S>(regex: Regex, group_names: I) -> UrlPatternResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: NameList = group_names.into_iter().map(Into::into).collect();
        let groups = regex_group_count(&regex);
        if names.len() != groups {
            return Err(UrlPatternError::GroupNameCountMismatch {
                groups,
                names: names.len(),
            });
        }

        if let Some(duplicate) = find_duplicate(&names) {
            return Err(UrlPatternError::DuplicateGroupName {
                name: duplicate.to_string(),
            });
        }

        Ok(Self {
            inner: Arc::new(CompiledPattern {
                source: regex.as_str().to_string(),
                regex,
                ast: None,
                names: Some(names),
            }),
        })
    }

    pub fn is_regex(&self) -> bool {
        self.inner.ast.is_none()
    }

    pub fn regex(&self) -> &Regex {
        &self.inner.regex
    }

    pub fn ast(&self) -> Option<&[AstNode]> {
        self.inner.ast.as_deref()
    }

    pub fn names(&self) -> Option<&[String]> {
        self.inner.names.as_deref()
    }

    /// Returns `None` when `input` does not match.
    ///
    /// A name captured more than once is reported as a list. Captures inside
    /// optional segments that did not participate are left out.
    #[tracing::instrument(level = "trace", skip(self), fields(pattern = %self.inner.source))]
    pub fn match_str(&self, input: &str) -> Option<MatchResult> {
        let Some(captures) = self.inner.regex.captures(input) else {
            tracing::trace!("no match");
            return None;
        };
        let groups = captures
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()));

        let Some(names) = self.inner.names.as_ref() else {
            return Some(MatchResult::Positional(groups.collect()));
        };

        let mut params = Params::with_capacity(names.len());
        for (name, value) in names.iter().zip(groups) {
            let Some(value) = value else {
                continue;
            };
            match params.get_mut(name.as_str()) {
                Some(existing) => existing.push(value),
                None => {
                    params.insert(name.clone(), ParamValue::Single(value));
                }
            }
        }
        Some(MatchResult::Named(params))
    }

    /// Renders a string from `params`, the inverse of [`UrlPattern::match_str`].
    pub fn stringify(&self, params: &Params) -> UrlPatternResult<String> {
        let ast = self
            .inner
            .ast
            .as_deref()
            .ok_or(UrlPatternError::StringifyRegexPattern)?;
        Ok(stringify(ast, params)?)
    }

    /// [`UrlPattern::stringify`] without any values.
    pub fn stringify_empty(&self) -> UrlPatternResult<String> {
        self.stringify(&Params::new())
    }
}

fn find_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .iter()
        .map(String::as_str)
        .find(|name| !seen.insert(*name))
}

impl FromStr for UrlPattern {
    type Err = UrlPatternError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.source)
    }
}
