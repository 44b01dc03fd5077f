use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::primitive;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser that takes exactly `count` elements
pub struct Take<S> {
    count: usize,
    _phantom: PhantomData<fn(S)>,
}

impl<S: Sequence> Parser for Take<S> {
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        primitive::take(input, self.count).ok_or(Error::new(input, ErrorKind::Eof))
    }
}

/// Take `count` elements; fails with `Eof` when fewer remain
pub fn take<S: Sequence>(count: usize) -> Take<S> {
    Take {
        count,
        _phantom: PhantomData,
    }
}
