use crate::multiple::{Multiple, multiple};
use crate::parser::Parser;

/// Run `first` then `second`, yielding both values
///
/// Chaining produces nested tuples like `((a, b), c)`; reach for
/// [`multiple`] when a flat tuple reads better.
pub fn pair<P1, P2>(first: P1, second: P2) -> Multiple<(P1, P2), P1::Input>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    multiple((first, second))
}

/// Extension trait to add .and() method support for parsers
pub trait PairExt: Parser {
    fn and<P>(self, other: P) -> Multiple<(Self, P), Self::Input>
    where
        P: Parser<Input = Self::Input>,
    {
        pair(self, other)
    }
}

/// Implement PairExt for all parsers
impl<P: Parser> PairExt for P {}
