use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Values for one name. A name that occurs more than once in a pattern maps
/// to [`ParamValue::Multiple`], in occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            ParamValue::Single(value) if index == 0 => Some(value.as_str()),
            ParamValue::Single(_) => None,
            ParamValue::Multiple(values) => values.get(index).map(String::as_str),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value.as_str()),
            ParamValue::Multiple(_) => None,
        }
    }

    /// Adds another occurrence, turning a single value into a list.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(first) => {
                let first = std::mem::take(first);
                *self = ParamValue::Multiple(vec![first, value]);
            }
            ParamValue::Multiple(values) => values.push(value),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl<S: Into<String>> From<Vec<S>> for ParamValue {
    fn from(values: Vec<S>) -> Self {
        ParamValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}

pub type Params = HashMap<String, ParamValue>;

/// Outcome of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// Captured values keyed by name. Groups that did not participate are absent.
    Named(Params),
    /// Raw groups of a regex pattern built without group names.
    Positional(Vec<Option<String>>),
}

impl MatchResult {
    pub fn named(&self) -> Option<&Params> {
        match self {
            MatchResult::Named(params) => Some(params),
            MatchResult::Positional(_) => None,
        }
    }

    pub fn positional(&self) -> Option<&[Option<String>]> {
        match self {
            MatchResult::Named(_) => None,
            MatchResult::Positional(groups) => Some(groups),
        }
    }

    /// Shortcut for a single-valued named capture.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named()?.get(name)?.as_single()
    }
}
