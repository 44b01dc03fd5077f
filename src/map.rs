use crate::error::PResult;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Input = P::Input;
    type Output = U;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, U> {
        let (remaining, value) = self.parser.parse(input)?;
        Ok((remaining, (self.mapper)(value)))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P: Parser> MapExt for P {}
