use regex::Regex;

use super::parser::{Parsed, Parser};

/// Matches `expected` as an exact prefix of the input.
pub fn literal(expected: impl Into<String>) -> Parser<String> {
    let expected: String = expected.into();
    Parser::new(move |input: &str| {
        input
            .strip_prefix(expected.as_str())
            .map(|rest| Parsed::new(expected.clone(), rest))
    })
}

/// Matches the prefix described by a regex fragment such as `[a-zA-Z0-9]+`.
///
/// The fragment is anchored at the first character of the input whether or
/// not it starts with `^` itself.
pub fn regex(fragment: &str) -> Result<Parser<String>, regex::Error> {
    let compiled = Regex::new(&format!("^(?:{fragment})"))?;
    Ok(Parser::new(move |input: &str| {
        let found = compiled.find(input)?;
        Some(Parsed::new(
            found.as_str().to_string(),
            &input[found.end()..],
        ))
    }))
}

/// Matches exactly one character.
pub fn any_char() -> Parser<String> {
    Parser::new(|input: &str| {
        let ch = input.chars().next()?;
        Some(Parsed::new(ch.to_string(), &input[ch.len_utf8()..]))
    })
}
