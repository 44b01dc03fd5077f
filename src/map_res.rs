use crate::error::{ErrorKind, PResult};
use crate::map_err::map_external;
use crate::parser::Parser;
use std::fmt;

/// Parser combinator that transforms the output with a fallible function
pub struct MapRes<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F, U, E> Parser for MapRes<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, E>,
    E: fmt::Display,
{
    type Input = P::Input;
    type Output = U;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, U> {
        let (remaining, value) = self.parser.parse(input)?;
        let mapped = map_external(remaining, ErrorKind::MapRes, (self.mapper)(value))?;
        Ok((remaining, mapped))
    }
}

/// Apply `mapper` to the parsed value
///
/// An `Err` from `mapper` becomes a `MapRes` failure positioned just after
/// the match.
pub fn map_res<P, F, U, E>(parser: P, mapper: F) -> MapRes<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, E>,
    E: fmt::Display,
{
    MapRes { parser, mapper }
}
