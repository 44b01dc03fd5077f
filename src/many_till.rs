use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;
use tracing::trace;

/// Parser combinator that repeats a parser until a marker matches
pub struct ManyTill<P, M> {
    parser: P,
    marker: M,
}

impl<P, M> Parser for ManyTill<P, M>
where
    P: Parser,
    M: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = (Vec<P::Output>, M::Output);

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        let mut values = Vec::new();
        let mut remaining = input;

        loop {
            if let Ok((after, end)) = self.marker.parse(remaining) {
                return Ok((after, (values, end)));
            }

            let (after, value) = self.parser.parse(remaining)?;
            if after.native_len() >= remaining.native_len() {
                trace!(matched = values.len(), "many_till stopped: parser consumed nothing");
                return Err(Error::new(remaining, ErrorKind::ManyTill));
            }
            values.push(value);
            remaining = after;
        }
    }
}

/// Apply `parser` until `marker` succeeds, yielding the values and the marker's value
///
/// The marker is tried first on every round; failures of `parser` are not
/// caught. A `parser` that succeeds without consuming input fails with
/// `ManyTill` rather than looping forever.
pub fn many_till<P, M>(parser: P, marker: M) -> ManyTill<P, M>
where
    P: Parser,
    M: Parser<Input = P::Input>,
{
    ManyTill { parser, marker }
}
