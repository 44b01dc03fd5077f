use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::primitive;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser that yields all remaining input
pub struct Rest<S> {
    _phantom: PhantomData<fn(S)>,
}

impl<S: Sequence> Parser for Rest<S> {
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let (all, nothing) = input.split_at(input.native_len());
        Ok((nothing, all))
    }
}

pub fn rest<S: Sequence>() -> Rest<S> {
    Rest {
        _phantom: PhantomData,
    }
}

/// Parser that yields the number of remaining elements without consuming them
pub struct RestLen<S> {
    _phantom: PhantomData<fn(S)>,
}

impl<S: Sequence> Parser for RestLen<S> {
    type Input = S;
    type Output = usize;

    fn parse(&self, input: S) -> PResult<S, usize> {
        Ok((input, input.len()))
    }
}

pub fn rest_len<S: Sequence>() -> RestLen<S> {
    RestLen {
        _phantom: PhantomData,
    }
}

/// Parser that succeeds only at end of input
pub struct Eof<S> {
    _phantom: PhantomData<fn(S)>,
}

impl<S: Sequence> Parser for Eof<S> {
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        if primitive::eof(input) {
            Ok((input, input))
        } else {
            Err(Error::new(input, ErrorKind::Eof))
        }
    }
}

/// Succeed with the exhausted input at end of input, else fail with `Eof`
pub fn eof<S: Sequence>() -> Eof<S> {
    Eof {
        _phantom: PhantomData,
    }
}
