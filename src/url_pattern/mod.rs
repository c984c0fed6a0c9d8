mod errors;
mod service;

pub use errors::{UrlPatternError, UrlPatternResult};
pub use service::UrlPattern;
