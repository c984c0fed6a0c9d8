mod ast;
mod compile;
mod error;
mod grammar;
mod parser;
mod stringify;

pub use ast::{AstNode, WILDCARD_NAME};
pub use compile::{capture_names, compile_regex, compile_regex_source, regex_group_count};
pub use error::{PatternError, PatternResult, StringifyError};
pub use grammar::Grammar;
pub use parser::parse_pattern;
pub use stringify::stringify;
