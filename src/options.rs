use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ESCAPE_CHAR: char = '\\';
pub const DEFAULT_SEGMENT_NAME_START_CHAR: char = ':';
pub const DEFAULT_SEGMENT_VALUE_CHARSET: &str = "a-zA-Z0-9-_~ %";
pub const DEFAULT_SEGMENT_NAME_CHARSET: &str = "a-zA-Z0-9";
pub const DEFAULT_OPTIONAL_SEGMENT_START_CHAR: char = '(';
pub const DEFAULT_OPTIONAL_SEGMENT_END_CHAR: char = ')';
pub const DEFAULT_WILDCARD_CHAR: char = '*';

/// Syntax configuration for string patterns.
///
/// The charsets are pasted verbatim into regex character classes and the
/// special characters are not checked against each other. Choosing
/// colliding or regex-breaking values yields surprising grammars or an
/// [`crate::pattern::PatternError::InvalidCharset`] at compile time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatternOptions {
    pub escape_char: char,
    pub segment_name_start_char: char,
    pub segment_name_end_char: Option<char>,
    pub segment_value_charset: String,
    pub segment_name_charset: String,
    pub optional_segment_start_char: char,
    pub optional_segment_end_char: char,
    pub wildcard_char: char,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            escape_char: DEFAULT_ESCAPE_CHAR,
            segment_name_start_char: DEFAULT_SEGMENT_NAME_START_CHAR,
            segment_name_end_char: None,
            segment_value_charset: DEFAULT_SEGMENT_VALUE_CHARSET.to_string(),
            segment_name_charset: DEFAULT_SEGMENT_NAME_CHARSET.to_string(),
            optional_segment_start_char: DEFAULT_OPTIONAL_SEGMENT_START_CHAR,
            optional_segment_end_char: DEFAULT_OPTIONAL_SEGMENT_END_CHAR,
            wildcard_char: DEFAULT_WILDCARD_CHAR,
        }
    }
}

impl PatternOptions {
    pub fn builder() -> PatternOptionsBuilder {
        PatternOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.segment_value_charset.is_empty() {
            return Err(OptionsError::EmptyCharset {
                field: "segment_value_charset",
            });
        }
        if self.segment_name_charset.is_empty() {
            return Err(OptionsError::EmptyCharset {
                field: "segment_name_charset",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PatternOptionsBuilder {
    options: PatternOptions,
}

impl PatternOptionsBuilder {
    pub fn escape_char(mut self, value: char) -> Self {
        self.options.escape_char = value;
        self
    }

    pub fn segment_name_start_char(mut self, value: char) -> Self {
        self.options.segment_name_start_char = value;
        self
    }

    pub fn segment_name_end_char(mut self, value: char) -> Self {
        self.options.segment_name_end_char = Some(value);
        self
    }

    pub fn segment_value_charset<S: Into<String>>(mut self, value: S) -> Self {
        self.options.segment_value_charset = value.into();
        self
    }

    pub fn segment_name_charset<S: Into<String>>(mut self, value: S) -> Self {
        self.options.segment_name_charset = value.into();
        self
    }

    pub fn optional_segment_start_char(mut self, value: char) -> Self {
        self.options.optional_segment_start_char = value;
        self
    }

    pub fn optional_segment_end_char(mut self, value: char) -> Self {
        self.options.optional_segment_end_char = value;
        self
    }

    pub fn wildcard_char(mut self, value: char) -> Self {
        self.options.wildcard_char = value;
        self
    }

    pub fn build(self) -> Result<PatternOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("{field} must not be empty")]
    EmptyCharset { field: &'static str },
}
