use super::tag::tag;
use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;

/// Parser that takes everything before the first occurrence of a literal
#[derive(Debug, Clone, Copy)]
pub struct TakeUntil<S> {
    literal: S,
    non_empty: bool,
}

impl<S: Sequence> Parser for TakeUntil<S> {
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let needle = tag(self.literal);

        let found = input.element_indices().map(|(offset, _)| offset).find(|&offset| {
            let (_, candidate) = input.split_at(offset);
            needle.parse(candidate).is_ok()
        });

        match found {
            None => Err(Error::new(input, ErrorKind::TakeUntil)),
            Some(0) if self.non_empty => Err(Error::new(input, ErrorKind::TakeUntil)),
            Some(offset) => {
                let (taken, remaining) = input.split_at(offset);
                Ok((remaining, taken))
            }
        }
    }
}

/// Input up to (not including) the first occurrence of `literal`
///
/// Fails with `TakeUntil` when the literal never occurs, including on
/// empty input.
pub fn take_until<S: Sequence>(literal: S) -> TakeUntil<S> {
    TakeUntil {
        literal,
        non_empty: false,
    }
}

/// Like [`take_until`], but the taken prefix must be non-empty
pub fn take_until1<S: Sequence>(literal: S) -> TakeUntil<S> {
    TakeUntil {
        literal,
        non_empty: true,
    }
}
