use crate::alt::alt;
use crate::ascii::single::newline;
use crate::atomic::Atomic;
use crate::consumed::recognize;
use crate::error::{Error, ErrorKind, PResult};
use crate::generic::{take, take_while};
use crate::map_err::{MapErrExt, map_kind};
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser for a fixed ASCII literal over any character-like sequence
///
/// Insufficient input and mismatches both fail with `kind` at the input.
#[derive(Debug, Clone, Copy)]
pub struct AsciiLiteral<S> {
    literal: &'static [u8],
    kind: ErrorKind,
    _phantom: PhantomData<fn(S)>,
}

impl<S> Parser for AsciiLiteral<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let (remaining, candidate) = map_kind(self.kind, take(self.literal.len())).parse(input)?;

        let matches = candidate
            .elements()
            .zip(self.literal.iter())
            .all(|(found, &wanted)| found == <S::Element as Atomic>::from_ascii(wanted));

        if matches {
            Ok((remaining, candidate))
        } else {
            Err(Error::new(input, self.kind))
        }
    }
}

/// Match a carriage return followed by a line feed
pub fn crlf<S>() -> AsciiLiteral<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    AsciiLiteral {
        literal: b"\r\n",
        kind: ErrorKind::Crlf,
        _phantom: PhantomData,
    }
}

/// Match a bare line feed or a carriage return and line feed pair
///
/// Both failures surface as `Crlf`.
pub fn line_ending<S>() -> impl Parser<Input = S, Output = S>
where
    S: Sequence,
    S::Element: Atomic,
{
    alt((recognize(newline::<S>()), crlf::<S>())).map_kind(ErrorKind::Crlf)
}

/// Everything up to the next carriage return or line feed; may be empty
pub fn not_line_ending<S>() -> impl Parser<Input = S, Output = S>
where
    S: Sequence,
    S::Element: Atomic,
{
    let carriage_return = <S::Element as Atomic>::from_ascii(b'\r');
    let line_feed = <S::Element as Atomic>::from_ascii(b'\n');
    take_while::<S, _>(move |element: S::Element| {
        element != carriage_return && element != line_feed
    })
}
