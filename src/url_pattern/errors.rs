use crate::options::OptionsError;
use crate::pattern::{PatternError, StringifyError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlPatternError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Stringify(#[from] StringifyError),
    #[error("regex contains {groups} groups but array of group names contains {names}")]
    GroupNameCountMismatch { groups: usize, names: usize },
    #[error("duplicate group name \"{name}\". group names must be unique")]
    DuplicateGroupName { name: String },
    #[error("can't stringify patterns generated from a regex")]
    StringifyRegexPattern,
}

pub type UrlPatternResult<T> = Result<T, UrlPatternError>;
