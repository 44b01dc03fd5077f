use crate::error::PResult;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Core parser trait for parser combinators
pub trait Parser: Sized {
    type Input: Sequence;
    type Output;

    /// Attempt to parse a prefix of the given input
    ///
    /// Returns `Ok((remaining, value))` on success, where `remaining` is a
    /// suffix of `input`, or the `Error` describing where and why it failed.
    /// Parsing is pure: the same input always yields the same result.
    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output>;
}

impl<P: Parser> Parser for &P {
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        (**self).parse(input)
    }
}

/// Parser backed by a plain function or closure
pub struct FromFn<F, S> {
    function: F,
    _phantom: PhantomData<fn(S)>,
}

impl<F, S, O> Parser for FromFn<F, S>
where
    S: Sequence,
    F: Fn(S) -> PResult<S, O>,
{
    type Input = S;
    type Output = O;

    fn parse(&self, input: S) -> PResult<S, O> {
        (self.function)(input)
    }
}

/// Turn a function `S -> PResult<S, O>` into a [`Parser`]
pub fn from_fn<F, S, O>(function: F) -> FromFn<F, S>
where
    S: Sequence,
    F: Fn(S) -> PResult<S, O>,
{
    FromFn {
        function,
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    fn first_char(input: &str) -> PResult<&str, char> {
        match input.chars().next() {
            Some(ch) => Ok((&input[ch.len_utf8()..], ch)),
            None => Err(Error::new(input, ErrorKind::Eof)),
        }
    }

    #[test]
    fn test_from_fn_with_function() {
        let parser = from_fn(first_char);
        assert_eq!(parser.parse("xyz"), Ok(("yz", 'x')));
        assert_eq!(parser.parse(""), Err(Error::new("", ErrorKind::Eof)));
    }

    fn byte_count(input: &[u8]) -> PResult<&[u8], usize> {
        Ok((input, input.len()))
    }

    #[test]
    fn test_from_fn_over_bytes() {
        let parser = from_fn(byte_count);
        assert_eq!(parser.parse(&b"abc"[..]), Ok((&b"abc"[..], 3)));
    }

    #[test]
    fn test_parser_by_reference() {
        let parser = from_fn(first_char);
        let borrowed = &parser;
        assert_eq!(borrowed.parse("ab"), Ok(("b", 'a')));
        assert_eq!(parser.parse("ba"), Ok(("a", 'b')));
    }
}
