//! Compile compact url patterns such as `/api/users(/:id)` once, then match
//! strings against them or render strings back from named values.
//!
//! ```
//! use url_pattern_rs::{Params, UrlPattern};
//!
//! let pattern = UrlPattern::new("/api/users/:id").unwrap();
//! let matched = pattern.match_str("/api/users/5").unwrap();
//! assert_eq!(matched.get("id"), Some("5"));
//!
//! let mut params = Params::new();
//! params.insert("id".to_string(), "10".into());
//! assert_eq!(pattern.stringify(&params).unwrap(), "/api/users/10");
//! ```

pub mod combinator;
pub mod options;
pub mod params;
pub mod pattern;
mod url_pattern;

pub use options::{OptionsError, PatternOptions, PatternOptionsBuilder};
pub use params::{MatchResult, ParamValue, Params};
pub use pattern::{AstNode, WILDCARD_NAME};
pub use url_pattern::{UrlPattern, UrlPatternError, UrlPatternResult};
