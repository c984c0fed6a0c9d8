use regex::Regex;
use url_pattern_rs::pattern::PatternError;
use url_pattern_rs::{OptionsError, PatternOptions, UrlPattern, UrlPatternError};

fn construct_err(source: &str) -> UrlPatternError {
    UrlPattern::new(source).expect_err("pattern should be rejected")
}

fn unparsable(source: &str) -> UrlPatternError {
    UrlPatternError::Pattern(PatternError::Unparsable {
        pattern: source.to_string(),
    })
}

#[test]
fn rejects_empty_pattern() {
    let err = construct_err("");
    assert_eq!(err, UrlPatternError::Pattern(PatternError::Empty));
    assert_eq!(err.to_string(), "pattern must not be the empty string");
}

#[test]
fn rejects_whitespace() {
    for source in [" ", " fo o", "/a\nb"] {
        match construct_err(source) {
            UrlPatternError::Pattern(PatternError::ContainsWhitespace { pattern }) => {
                assert_eq!(pattern, source)
            }
            other => panic!("unexpected error for {source:?}: {other:?}"),
        }
    }
}

#[test]
fn rejects_patterns_that_do_not_parse_at_all() {
    for source in [":", ":.", ")", "(", "(((foo)bar(boo)far)"] {
        assert_eq!(construct_err(source), unparsable(source), "source {source:?}");
    }
    assert_eq!(
        construct_err(":").to_string(),
        "couldn't parse pattern ':'"
    );
}

#[test]
fn partial_parse_points_at_first_bad_character() {
    let err = construct_err("foo:.");
    assert_eq!(
        err.to_string(),
        [
            "could only partially parse pattern.",
            "failure at character 4 in pattern:",
            "foo:.",
            "   ^ parsing failed here",
        ]
        .join("\n")
    );

    let err = construct_err("((foo)))bar");
    assert_eq!(
        err,
        UrlPatternError::Pattern(PatternError::PartialParse {
            pattern: "((foo)))bar".to_string(),
            index: 8,
        })
    );
    assert_eq!(
        err.to_string(),
        [
            "could only partially parse pattern.",
            "failure at character 8 in pattern:",
            "((foo)))bar",
            "       ^ parsing failed here",
        ]
        .join("\n")
    );
}

#[test]
fn partial_parse_index_counts_characters() {
    match construct_err("/ünï:.") {
        UrlPatternError::Pattern(PatternError::PartialParse { index, .. }) => {
            assert_eq!(index, 5)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn group_names_must_match_group_count() {
    let regex = || Regex::new("(((foo)bar(boo))far)").expect("valid regex");

    let err = UrlPattern::from_regex_with_names(regex(), Vec::<String>::new())
        .expect_err("no names for four groups");
    assert_eq!(
        err,
        UrlPatternError::GroupNameCountMismatch {
            groups: 4,
            names: 0
        }
    );
    assert_eq!(
        err.to_string(),
        "regex contains 4 groups but array of group names contains 0"
    );

    let err = UrlPattern::from_regex_with_names(regex(), ["a", "b"])
        .expect_err("two names for four groups");
    assert_eq!(
        err.to_string(),
        "regex contains 4 groups but array of group names contains 2"
    );
}

#[test]
fn group_names_must_be_unique() {
    let regex = Regex::new(r"(\d).(\d).(\d)").expect("valid regex");
    let err = UrlPattern::from_regex_with_names(regex, ["a", "b", "a"])
        .expect_err("duplicate name");
    assert_eq!(
        err,
        UrlPatternError::DuplicateGroupName {
            name: "a".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "duplicate group name \"a\". group names must be unique"
    );
}

#[test]
fn stringify_errors_name_the_missing_value() {
    let p = UrlPattern::new("(:a-)1-:b(-2-:c-3-:d(-4-*-:e))").expect("pattern should compile");
    let err = p.stringify_empty().expect_err("b is required");
    assert_eq!(err.to_string(), "no value provided for name `b`");
}

#[test]
fn empty_charsets_are_rejected_before_parsing() {
    let options = PatternOptions {
        segment_value_charset: String::new(),
        ..PatternOptions::default()
    };
    let err = UrlPattern::with_options("/:id", &options).expect_err("empty value charset");
    assert_eq!(
        err,
        UrlPatternError::Options(OptionsError::EmptyCharset {
            field: "segment_value_charset"
        })
    );
    assert_eq!(err.to_string(), "segment_value_charset must not be empty");

    let err = PatternOptions::builder()
        .segment_name_charset("")
        .build()
        .expect_err("empty name charset");
    assert_eq!(
        err,
        OptionsError::EmptyCharset {
            field: "segment_name_charset"
        }
    );
}

#[test]
fn invalid_charsets_surface_as_pattern_errors() {
    let options = PatternOptions {
        segment_name_charset: "z-a".to_string(),
        ..PatternOptions::default()
    };
    match UrlPattern::with_options("/:id", &options).expect_err("reversed name range") {
        UrlPatternError::Pattern(PatternError::InvalidCharset { charset, .. }) => {
            assert_eq!(charset, "z-a")
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let options = PatternOptions {
        segment_value_charset: "z-a".to_string(),
        ..PatternOptions::default()
    };
    match UrlPattern::with_options("/:id", &options).expect_err("reversed value range") {
        UrlPatternError::Pattern(PatternError::InvalidRegex { source_regex, .. }) => {
            assert_eq!(source_regex, "^/([z-a]+)$")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
