use super::{literal_run, strip_separators};
use crate::ascii::INT_COMPONENTS;
use crate::atomic::Atomic;
use crate::error::{Error, ErrorKind, PResult};
use crate::map_err::map_external;
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser for decimal integer literals such as `42` or `100_000`
#[derive(Debug, Clone, Copy)]
pub struct IntLiteral<S> {
    _phantom: PhantomData<fn(S)>,
}

impl<S> Parser for IntLiteral<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    type Input = S;
    type Output = i64;

    fn parse(&self, input: S) -> PResult<S, i64> {
        let (remaining, text) = literal_run(input, INT_COMPONENTS, ErrorKind::Integer)?;

        let Some(digits) = strip_separators(&text) else {
            return Err(Error::new(input, ErrorKind::Integer));
        };
        let value = map_external(input, ErrorKind::Integer, digits.parse::<i64>())?;

        Ok((remaining, value))
    }
}

/// Match the longest run of digits and `_` separators as an `i64`
///
/// Separators must sit between two digits. An empty run, a misplaced
/// separator or overflow all fail with `Integer` at the input.
pub fn int_literal<S>() -> IntLiteral<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    IntLiteral {
        _phantom: PhantomData,
    }
}
