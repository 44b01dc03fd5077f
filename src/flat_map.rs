use crate::error::PResult;
use crate::parser::Parser;

/// Parser combinator that builds the next parser from a parsed value
pub struct FlatMap<P, F> {
    parser: P,
    build: F,
}

impl<P, F, Q> Parser for FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = Q::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Q::Output> {
        let (remaining, value) = self.parser.parse(input)?;
        (self.build)(value).parse(remaining)
    }
}

/// Run `parser`, then the parser `build` makes from its value
pub fn flat_map<P, F, Q>(parser: P, build: F) -> FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Input = P::Input>,
{
    FlatMap { parser, build }
}
