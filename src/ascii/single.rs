use crate::atomic::Atomic;
use crate::error::{Error, ErrorKind, PResult};
use crate::generic::take;
use crate::map_err::map_kind;
use crate::parser::Parser;
use crate::primitive::next_item;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser that consumes one element accepted by a predicate
///
/// Both a missing element and a rejected one fail with `kind` at the input.
pub struct Satisfy<S, F> {
    predicate: F,
    kind: ErrorKind,
    _phantom: PhantomData<fn(S)>,
}

impl<S, F> Parser for Satisfy<S, F>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    type Input = S;
    type Output = S::Element;

    fn parse(&self, input: S) -> PResult<S, S::Element> {
        let (remaining, taken) = map_kind(self.kind, take(1)).parse(input)?;
        match next_item(taken) {
            Some((_, element)) if (self.predicate)(element) => Ok((remaining, element)),
            _ => Err(Error::new(input, self.kind)),
        }
    }
}

fn one_element<S, F>(kind: ErrorKind, predicate: F) -> Satisfy<S, F> {
    Satisfy {
        predicate,
        kind,
        _phantom: PhantomData,
    }
}

/// Match exactly one element for which `predicate` holds
pub fn satisfy<S, F>(predicate: F) -> Satisfy<S, F>
where
    S: Sequence,
    F: Fn(S::Element) -> bool,
{
    one_element(ErrorKind::Satisfy, predicate)
}

/// Match exactly one element equal to `expected`
pub fn char<S: Sequence>(expected: S::Element) -> Satisfy<S, impl Fn(S::Element) -> bool> {
    one_element(ErrorKind::Char, move |element: S::Element| element == expected)
}

/// Match one element that appears in `set`
pub fn one_of<S: Sequence>(set: S) -> Satisfy<S, impl Fn(S::Element) -> bool> {
    one_element(ErrorKind::OneOf, move |element: S::Element| {
        set.elements().any(|member| member == element)
    })
}

/// Match one element that does not appear in `set`
pub fn none_of<S: Sequence>(set: S) -> Satisfy<S, impl Fn(S::Element) -> bool> {
    one_element(ErrorKind::NoneOf, move |element: S::Element| {
        set.elements().all(|member| member != element)
    })
}

/// Match a line feed
pub fn newline<S>() -> Satisfy<S, impl Fn(S::Element) -> bool>
where
    S: Sequence,
    S::Element: Atomic,
{
    char::<S>(<S::Element as Atomic>::from_ascii(b'\n'))
}

/// Match a horizontal tab
pub fn tab<S>() -> Satisfy<S, impl Fn(S::Element) -> bool>
where
    S: Sequence,
    S::Element: Atomic,
{
    char::<S>(<S::Element as Atomic>::from_ascii(b'\t'))
}
