use std::cell::OnceCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Successful parse: the produced value and the unconsumed suffix of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'i, T> {
    pub value: T,
    pub rest: &'i str,
}

impl<'i, T> Parsed<'i, T> {
    pub fn new(value: T, rest: &'i str) -> Self {
        Self { value, rest }
    }
}

/// `None` is the "no match" outcome. Combinators never panic or error.
pub type ParseResult<'i, T> = Option<Parsed<'i, T>>;

type ParseFn<T> = dyn for<'i> Fn(&'i str) -> ParseResult<'i, T>;

/// Shared handle to a parse function. Cloning is cheap and shares the function.
pub struct Parser<T> {
    run: Rc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: for<'i> Fn(&'i str) -> ParseResult<'i, T> + 'static,
    {
        Self { run: Rc::new(f) }
    }

    #[inline]
    pub fn parse<'i>(&self, input: &'i str) -> ParseResult<'i, T> {
        (self.run)(input)
    }

    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Parser::new(move |input: &str| {
            self.parse(input)
                .map(|parsed| Parsed::new(f(parsed.value), parsed.rest))
        })
    }

    /// Non-owning handle. Never matches once every owning handle is dropped.
    pub fn downgrade(&self) -> Parser<T> {
        let weak: Weak<ParseFn<T>> = Rc::downgrade(&self.run);
        Parser::new(move |input: &str| weak.upgrade().and_then(|run| run(input)))
    }
}

/// Parser that never matches.
pub fn fail<T: 'static>() -> Parser<T> {
    Parser::new(|_input: &str| None)
}

/// Defers building the inner parser until the first parse, then reuses it.
///
/// Needed for grammar rules that refer to parsers which do not exist yet
/// when the rule itself is constructed.
pub fn lazy<T, F>(supplier: F) -> Parser<T>
where
    T: 'static,
    F: Fn() -> Parser<T> + 'static,
{
    let cached: OnceCell<Parser<T>> = OnceCell::new();
    Parser::new(move |input: &str| cached.get_or_init(&supplier).parse(input))
}

/// Forward-declared parser slot for self-referential rules.
///
/// The slot owns the defined parser; handles returned by [`Recursive::reference`]
/// only point at it weakly, so a grammar whose rules reference themselves is
/// still freed when the owning `Recursive` is dropped.
pub struct Recursive<T> {
    slot: Rc<OnceCell<Parser<T>>>,
}

impl<T> fmt::Debug for Recursive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recursive")
            .field("defined", &self.slot.get().is_some())
            .finish()
    }
}

impl<T: 'static> Recursive<T> {
    pub fn declare() -> Self {
        Self {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// Must not be parsed with before [`Recursive::define`] was called: the
    /// first parse resolves the slot once and keeps the result.
    pub fn reference(&self) -> Parser<T> {
        let slot = Rc::downgrade(&self.slot);
        lazy(move || {
            slot.upgrade()
                .and_then(|cell| cell.get().map(Parser::downgrade))
                .unwrap_or_else(fail)
        })
    }

    /// Only the first definition is kept.
    pub fn define(&self, parser: Parser<T>) -> Parser<T> {
        if self.slot.set(parser.clone()).is_err() {
            tracing::warn!("recursive parser slot already defined; ignoring redefinition");
        }
        parser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn lazy_builds_inner_parser_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let parser = lazy(move || {
            counter.set(counter.get() + 1);
            Parser::new(|input: &str| Some(Parsed::new(input.len(), "")))
        });

        assert_eq!(parser.parse("abc").map(|p| p.value), Some(3));
        assert_eq!(parser.parse("ab").map(|p| p.value), Some(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn downgraded_parser_stops_matching_after_owner_drops() {
        let owner = Parser::new(|input: &str| Some(Parsed::new((), input)));
        let weak = owner.downgrade();
        assert!(weak.parse("x").is_some());
        drop(owner);
        assert!(weak.parse("x").is_none());
    }

    #[test]
    fn recursive_reference_resolves_after_define() {
        let rec: Recursive<usize> = Recursive::declare();
        let reference = rec.reference();
        rec.define(Parser::new(|input: &str| Some(Parsed::new(7, input))));
        assert_eq!(reference.parse("q").map(|p| p.value), Some(7));
    }
}
