use super::take::take;
use crate::error::{Error, ErrorKind, PResult};
use crate::map_err::map_kind;
use crate::parser::Parser;
use crate::sequence::Sequence;

/// Parser that matches a literal sequence element by element
#[derive(Debug, Clone, Copy)]
pub struct Tag<S> {
    literal: S,
}

impl<S: Sequence> Parser for Tag<S> {
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let (remaining, candidate) = map_kind(ErrorKind::Tag, take(self.literal.len())).parse(input)?;

        if candidate.elements().eq(self.literal.elements()) {
            Ok((remaining, self.literal))
        } else {
            Err(Error::new(input, ErrorKind::Tag))
        }
    }
}

/// Match `literal` exactly, yielding the literal itself
///
/// Running out of input is reported as `Tag`, not `Eof`.
pub fn tag<S: Sequence>(literal: S) -> Tag<S> {
    Tag { literal }
}
