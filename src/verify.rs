use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;

/// Parser combinator that checks the parsed value against a predicate
pub struct Verify<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Parser for Verify<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, P::Output> {
        let (remaining, value) = self.parser.parse(input)?;
        if (self.predicate)(&value) {
            Ok((remaining, value))
        } else {
            Err(Error::new(input, ErrorKind::Verify))
        }
    }
}

/// Run `parser` and require `predicate` to accept its value
///
/// A rejected value fails with `Verify` at the position before the match.
pub fn verify<P, F>(parser: P, predicate: F) -> Verify<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    Verify { parser, predicate }
}

/// Extension trait to add verify method to all parsers
pub trait VerifyExt: Parser {
    fn verify<F>(self, predicate: F) -> Verify<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        verify(self, predicate)
    }
}

impl<P: Parser> VerifyExt for P {}
