use crate::atomic::Atomic;
use crate::error::{Error, ErrorKind, PResult};
use crate::generic::take;
use crate::map_err::map_kind;
use crate::parser::Parser;
use crate::sequence::Sequence;

/// Parser that matches a literal ignoring letter case
#[derive(Debug, Clone, Copy)]
pub struct TagNoCase<S> {
    literal: S,
}

impl<S> Parser for TagNoCase<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let (remaining, candidate) = map_kind(ErrorKind::Tag, take(self.literal.len())).parse(input)?;

        let matches = candidate
            .elements()
            .zip(self.literal.elements())
            .all(|(found, wanted)| found.eq_ignore_case(wanted));

        if matches {
            Ok((remaining, candidate))
        } else {
            Err(Error::new(input, ErrorKind::Tag))
        }
    }
}

/// Case-insensitive [`tag`](crate::generic::tag)
///
/// Yields the slice of the input that matched, keeping its original casing.
pub fn tag_no_case<S>(literal: S) -> TagNoCase<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    TagNoCase { literal }
}
