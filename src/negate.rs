use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails with `Negate` if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Negate<P> {
    parser: P,
}

impl<P: Parser> Parser for Negate<P> {
    type Input = P::Input;
    type Output = ();

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, ()> {
        match self.parser.parse(input) {
            Ok(_) => Err(Error::new(input, ErrorKind::Negate)),
            Err(_) => Ok((input, ())),
        }
    }
}

/// Convenience function to create a Negate parser for negative lookahead
pub fn negate<P: Parser>(parser: P) -> Negate<P> {
    Negate { parser }
}

/// Extension trait to add .negate() method support for parsers
pub trait NegateExt: Parser {
    fn negate(self) -> Negate<Self> {
        negate(self)
    }
}

/// Implement NegateExt for all parsers
impl<P: Parser> NegateExt for P {}
