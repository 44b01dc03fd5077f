use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;
use tracing::trace;

/// A list of alternative parsers that all yield the same output type
///
/// Implemented for tuples of up to twelve parsers, arrays and `Vec`s.
pub trait Choice<S: Sequence> {
    type Output;

    /// Try each parser against `input`, returning the first success or the
    /// last failure
    fn choose(&self, input: S) -> PResult<S, Self::Output>;
}

fn exhausted<S: Sequence>(error: Error<S>) -> Error<S> {
    trace!(
        kind = %error.kind(),
        remaining = error.remaining().len(),
        "all alternatives failed"
    );
    error
}

macro_rules! impl_choice_for_tuple {
    ($first:ident $(, $parser:ident)*) => {
        #[allow(non_snake_case)]
        impl<S, O, $first $(, $parser)*> Choice<S> for ($first, $($parser,)*)
        where
            S: Sequence,
            $first: Parser<Input = S, Output = O>,
            $($parser: Parser<Input = S, Output = O>,)*
        {
            type Output = O;

            fn choose(&self, input: S) -> PResult<S, O> {
                let (ref $first, $(ref $parser,)*) = *self;
                $first
                    .parse(input)
                    $(.or_else(|_| $parser.parse(input)))*
                    .map_err(exhausted)
            }
        }
    };
}

impl_choice_for_tuple!(P1);
impl_choice_for_tuple!(P1, P2);
impl_choice_for_tuple!(P1, P2, P3);
impl_choice_for_tuple!(P1, P2, P3, P4);
impl_choice_for_tuple!(P1, P2, P3, P4, P5);
impl_choice_for_tuple!(P1, P2, P3, P4, P5, P6);
impl_choice_for_tuple!(P1, P2, P3, P4, P5, P6, P7);
impl_choice_for_tuple!(P1, P2, P3, P4, P5, P6, P7, P8);
impl_choice_for_tuple!(P1, P2, P3, P4, P5, P6, P7, P8, P9);
impl_choice_for_tuple!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
impl_choice_for_tuple!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);
impl_choice_for_tuple!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, P12);

fn choose_each<S, P>(parsers: &[P], input: S) -> PResult<S, P::Output>
where
    S: Sequence,
    P: Parser<Input = S>,
{
    let mut last = Error::new(input, ErrorKind::Alt);
    for parser in parsers {
        match parser.parse(input) {
            Ok(success) => return Ok(success),
            Err(error) => last = error,
        }
    }
    Err(exhausted(last))
}

impl<S, P, const N: usize> Choice<S> for [P; N]
where
    S: Sequence,
    P: Parser<Input = S>,
{
    type Output = P::Output;

    fn choose(&self, input: S) -> PResult<S, P::Output> {
        choose_each(self, input)
    }
}

impl<S, P> Choice<S> for Vec<P>
where
    S: Sequence,
    P: Parser<Input = S>,
{
    type Output = P::Output;

    fn choose(&self, input: S) -> PResult<S, P::Output> {
        choose_each(self, input)
    }
}

/// Parser combinator that tries alternatives in order
///
/// Every alternative sees the original input, so a failed attempt never
/// leaks partial consumption. When all fail, the error of the last
/// alternative is returned unchanged; an empty list fails with `Alt`.
pub struct Alt<L, S> {
    parsers: L,
    _phantom: PhantomData<fn(S)>,
}

impl<L, S> Parser for Alt<L, S>
where
    S: Sequence,
    L: Choice<S>,
{
    type Input = S;
    type Output = L::Output;

    fn parse(&self, input: S) -> PResult<S, L::Output> {
        self.parsers.choose(input)
    }
}

/// Return the result of the first of `parsers` that succeeds
pub fn alt<L, S>(parsers: L) -> Alt<L, S>
where
    S: Sequence,
    L: Choice<S>,
{
    Alt {
        parsers,
        _phantom: PhantomData,
    }
}
