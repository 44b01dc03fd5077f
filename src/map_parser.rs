use crate::error::PResult;
use crate::parser::Parser;
use crate::sequence::Sequence;

/// Parser combinator that runs a second parser over the slice the first produced
pub struct MapParser<P1, P2> {
    outer: P1,
    inner: P2,
}

impl<S, P1, P2> Parser for MapParser<P1, P2>
where
    S: Sequence,
    P1: Parser<Input = S, Output = S>,
    P2: Parser<Input = S>,
{
    type Input = S;
    type Output = P2::Output;

    fn parse(&self, input: S) -> PResult<S, P2::Output> {
        let (remaining, slice) = self.outer.parse(input)?;
        let (_, value) = self
            .inner
            .parse(slice)
            .map_err(|error| error.rebase(slice, input))?;
        Ok((remaining, value))
    }
}

/// Run `inner` against the slice yielded by `outer`
///
/// The remainder is whatever `outer` left; anything `inner` leaves of the
/// slice is discarded. A failure of `inner` is positioned in `input` at the
/// same distance it reached into the slice.
pub fn map_parser<S, P1, P2>(outer: P1, inner: P2) -> MapParser<P1, P2>
where
    S: Sequence,
    P1: Parser<Input = S, Output = S>,
    P2: Parser<Input = S>,
{
    MapParser { outer, inner }
}
