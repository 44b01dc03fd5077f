use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Native offset just past the longest prefix whose elements satisfy `predicate`
pub(crate) fn span_while<S, F>(input: S, predicate: F) -> usize
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    input
        .element_indices()
        .find(|&(_, element)| !predicate(element))
        .map_or(input.native_len(), |(offset, _)| offset)
}

/// Parser that takes the longest prefix matching a predicate
///
/// When `required` is set an empty match fails with that kind; otherwise
/// zero matches is a success, which keeps it safe inside `many0`.
pub struct TakeWhile<S, F> {
    predicate: F,
    required: Option<ErrorKind>,
    _phantom: PhantomData<fn(S)>,
}

impl<S, F> Parser for TakeWhile<S, F>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let offset = span_while(input, &self.predicate);
        match self.required {
            Some(kind) if offset == 0 => Err(Error::new(input, kind)),
            _ => {
                let (taken, remaining) = input.split_at(offset);
                Ok((remaining, taken))
            }
        }
    }
}

fn build<S, F>(predicate: F, required: Option<ErrorKind>) -> TakeWhile<S, F> {
    TakeWhile {
        predicate,
        required,
        _phantom: PhantomData,
    }
}

/// Longest prefix whose elements satisfy `predicate`; may be empty
pub fn take_while<S, F>(predicate: F) -> TakeWhile<S, F>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    build(predicate, None)
}

/// Longest non-empty prefix whose elements satisfy `predicate`
pub fn take_while1<S, F>(predicate: F) -> TakeWhile<S, F>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    build(predicate, Some(ErrorKind::TakeWhile))
}

/// Longest prefix up to the first element satisfying `predicate`; may be empty
pub fn take_till<S, F>(predicate: F) -> TakeWhile<S, impl Fn(S::Element) -> bool>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    build(move |element: S::Element| !predicate(element), None)
}

/// Longest non-empty prefix up to the first element satisfying `predicate`
pub fn take_till1<S, F>(predicate: F) -> TakeWhile<S, impl Fn(S::Element) -> bool>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    build(move |element: S::Element| !predicate(element), Some(ErrorKind::TakeTill))
}

/// Parser that takes between `lower` and `upper` matching elements
pub struct TakeWhileBounded<S, F> {
    lower: usize,
    upper: usize,
    predicate: F,
    _phantom: PhantomData<fn(S)>,
}

impl<S, F> Parser for TakeWhileBounded<S, F>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let valid = input
            .elements()
            .take(self.upper)
            .take_while(|&element| (self.predicate)(element))
            .count();

        if valid < self.lower {
            return Err(Error::new(input, ErrorKind::TakeWhileBounded));
        }
        let end = input.offset_at(valid).unwrap_or(input.native_len());
        let (taken, remaining) = input.split_at(end);
        Ok((remaining, taken))
    }
}

/// Greedily take up to `upper` matching elements, failing below `lower`
pub fn take_while_bounded<S, F>(lower: usize, upper: usize, predicate: F) -> TakeWhileBounded<S, F>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    TakeWhileBounded {
        lower,
        upper,
        predicate,
        _phantom: PhantomData,
    }
}
