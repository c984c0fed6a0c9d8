use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern must not be the empty string")]
    Empty,
    #[error("pattern '{pattern}' must not contain whitespace")]
    ContainsWhitespace { pattern: String },
    #[error("couldn't parse pattern '{pattern}'")]
    Unparsable { pattern: String },
    #[error(
        "could only partially parse pattern.\nfailure at character {index} in pattern:\n{pattern}\n{pointer}^ parsing failed here",
        pointer = " ".repeat(.index.saturating_sub(1))
    )]
    PartialParse { pattern: String, index: usize },
    #[error("charset '{charset}' does not form a valid regex character class: {error}")]
    InvalidCharset { charset: String, error: String },
    #[error("pattern '{pattern}' compiled to an invalid regex '{source_regex}': {error}")]
    InvalidRegex {
        pattern: String,
        source_regex: String,
        error: String,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StringifyError {
    #[error("no value provided for name `{name}`")]
    MissingValue { name: String },
    #[error("too few values provided for name `{name}`")]
    TooFewValues { name: String },
}
