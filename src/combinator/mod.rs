//! Small parser combinator toolkit the pattern grammar is assembled from.
//!
//! A parser takes the remaining input and either produces a value together
//! with the unconsumed rest, or reports no match. Nothing here allocates
//! errors or backtracks beyond trying alternatives against the same input.

mod compose;
mod parser;
mod primitives;

pub use compose::{concat_until, either_first, one_or_more, pick_nth, sequence};
pub use parser::{ParseResult, Parsed, Parser, Recursive, fail, lazy};
pub use primitives::{any_char, literal, regex};
