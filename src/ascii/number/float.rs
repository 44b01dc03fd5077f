use super::{literal_run, strip_separators};
use crate::ascii::FLOAT_COMPONENTS;
use crate::atomic::Atomic;
use crate::error::{Error, ErrorKind, PResult};
use crate::map_err::map_external;
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser for decimal floating point literals such as `3.14`, `.5` or `1e-3`
#[derive(Debug, Clone, Copy)]
pub struct FloatLiteral<S> {
    _phantom: PhantomData<fn(S)>,
}

impl<S> Parser for FloatLiteral<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    type Input = S;
    type Output = f64;

    fn parse(&self, input: S) -> PResult<S, f64> {
        let (remaining, text) = literal_run(input, FLOAT_COMPONENTS, ErrorKind::Float)?;

        let Some(digits) = strip_separators(&text) else {
            return Err(Error::new(input, ErrorKind::Float));
        };
        let value = map_external(input, ErrorKind::Float, digits.parse::<f64>())?;

        if !value.is_finite() {
            return Err(Error::new(input, ErrorKind::Float));
        }

        Ok((remaining, value))
    }
}

/// Match the longest run of digits, `_`, `.`, `e`, `E`, `+` and `-` as an `f64`
///
/// The run is greedy, so a trailing sign that does not belong to an exponent
/// makes the whole literal malformed. Every failure is reported as `Float`
/// at the input.
pub fn float_literal<S>() -> FloatLiteral<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    FloatLiteral {
        _phantom: PhantomData,
    }
}
