use crate::error::PResult;
use crate::parser::Parser;

/// Parser combinator that turns failure into `None`
///
/// On failure the input is returned untouched; this parser never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P: Parser> Parser for Optional<P> {
    type Input = P::Input;
    type Output = Option<P::Output>;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        match self.parser.parse(input) {
            Ok((remaining, value)) => Ok((remaining, Some(value))),
            Err(_) => Ok((input, None)),
        }
    }
}

pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional { parser }
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser {
    fn optional(self) -> Optional<Self> {
        optional(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P: Parser> OptionalExt for P {}
