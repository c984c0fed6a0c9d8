use super::parser::{Parsed, Parser};

/// Runs `parsers` in order; fails as soon as one of them fails.
pub fn sequence<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    Parser::new(move |input: &str| {
        let mut rest = input;
        let mut values = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            let parsed = parser.parse(rest)?;
            values.push(parsed.value);
            rest = parsed.rest;
        }
        Some(Parsed::new(values, rest))
    })
}

/// Like [`sequence`] but keeps only the value at `index`.
pub fn pick_nth<T: 'static>(index: usize, parsers: Vec<Parser<T>>) -> Parser<T> {
    let all = sequence(parsers);
    Parser::new(move |input: &str| {
        let parsed = all.parse(input)?;
        let value = parsed.value.into_iter().nth(index)?;
        Some(Parsed::new(value, parsed.rest))
    })
}

/// First parser (in listed order) that matches wins.
pub fn either_first<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    Parser::new(move |input: &str| parsers.iter().find_map(|parser| parser.parse(input)))
}

/// Applies `parser` until it fails; at least one match is required.
pub fn one_or_more<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input: &str| {
        let mut rest = input;
        let mut values = Vec::new();
        while let Some(parsed) = parser.parse(rest) {
            let progressed = parsed.rest.len() < rest.len();
            values.push(parsed.value);
            rest = parsed.rest;
            if !progressed {
                break;
            }
        }
        if values.is_empty() {
            return None;
        }
        Some(Parsed::new(values, rest))
    })
}

/// Concatenates results of `parser` until `stop` matches the remaining input.
///
/// Whatever `stop` would consume is left in the rest. At least one
/// application of `parser` is required.
pub fn concat_until<S: 'static>(parser: Parser<String>, stop: Parser<S>) -> Parser<String> {
    Parser::new(move |input: &str| {
        let mut rest = input;
        let mut out = String::new();
        let mut matched = false;
        while stop.parse(rest).is_none() {
            let Some(parsed) = parser.parse(rest) else {
                break;
            };
            let progressed = parsed.rest.len() < rest.len();
            matched = true;
            out.push_str(&parsed.value);
            rest = parsed.rest;
            if !progressed {
                break;
            }
        }
        if !matched {
            return None;
        }
        Some(Parsed::new(out, rest))
    })
}
