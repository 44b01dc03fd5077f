use crate::map::MapExt;
use crate::multiple::multiple;
use crate::parser::Parser;

/// Run `first` then `second`, keeping only the value of `second`
pub fn preceded<P1, P2>(first: P1, second: P2) -> impl Parser<Input = P1::Input, Output = P2::Output>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    multiple((first, second)).map(|(_, value): (P1::Output, P2::Output)| value)
}
