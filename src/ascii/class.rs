use super::{ALPHANUMERIC, DIGITS, HEX_DIGITS, LETTERS, MULTISPACE, OCT_DIGITS, SPACE};
use crate::atomic::Atomic;
use crate::error::{Error, ErrorKind, PResult};
use crate::generic::take_while1;
use crate::map_err::MapErrExt;
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser for a run of elements drawn from a fixed ASCII table
///
/// The run may be empty unless `min_one` is set, in which case an empty run
/// fails with the class's own kind at the input.
#[derive(Debug, Clone, Copy)]
pub struct Class<S> {
    table: &'static str,
    kind: ErrorKind,
    min_one: bool,
    _phantom: PhantomData<fn(S)>,
}

impl<S> Parser for Class<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    type Input = S;
    type Output = S;

    fn parse(&self, input: S) -> PResult<S, S> {
        let table = self.table;
        let members = take_while1::<S, _>(move |element: S::Element| element.in_table(table))
            .map_kind(ErrorKind::IsA)
            .ignore_kind(ErrorKind::IsA);

        let (remaining, matched) = members.parse(input)?;
        let matched = matched.unwrap_or_else(|| input.empty());

        if self.min_one && matched.is_empty() {
            return Err(Error::new(input, self.kind));
        }
        Ok((remaining, matched))
    }
}

const fn class<S>(table: &'static str, kind: ErrorKind, min_one: bool) -> Class<S> {
    Class {
        table,
        kind,
        min_one,
        _phantom: PhantomData,
    }
}

/// Zero or more ASCII letters
pub const fn alpha0<S>() -> Class<S> {
    class(LETTERS, ErrorKind::Alpha, false)
}

/// One or more ASCII letters
pub const fn alpha1<S>() -> Class<S> {
    class(LETTERS, ErrorKind::Alpha, true)
}

/// Zero or more ASCII digits
pub const fn digit0<S>() -> Class<S> {
    class(DIGITS, ErrorKind::Digit, false)
}

/// One or more ASCII digits
pub const fn digit1<S>() -> Class<S> {
    class(DIGITS, ErrorKind::Digit, true)
}

/// Zero or more hexadecimal digits, either case
pub const fn hex_digit0<S>() -> Class<S> {
    class(HEX_DIGITS, ErrorKind::HexDigit, false)
}

pub const fn hex_digit1<S>() -> Class<S> {
    class(HEX_DIGITS, ErrorKind::HexDigit, true)
}

/// Zero or more octal digits
pub const fn oct_digit0<S>() -> Class<S> {
    class(OCT_DIGITS, ErrorKind::OctDigit, false)
}

pub const fn oct_digit1<S>() -> Class<S> {
    class(OCT_DIGITS, ErrorKind::OctDigit, true)
}

/// Zero or more ASCII letters or digits
pub const fn alphanum0<S>() -> Class<S> {
    class(ALPHANUMERIC, ErrorKind::AlphaNumeric, false)
}

pub const fn alphanum1<S>() -> Class<S> {
    class(ALPHANUMERIC, ErrorKind::AlphaNumeric, true)
}

/// Zero or more spaces and tabs
pub const fn space0<S>() -> Class<S> {
    class(SPACE, ErrorKind::Space, false)
}

pub const fn space1<S>() -> Class<S> {
    class(SPACE, ErrorKind::Space, true)
}

/// Zero or more spaces, tabs, carriage returns and line feeds
pub const fn multispace0<S>() -> Class<S> {
    class(MULTISPACE, ErrorKind::MultiSpace, false)
}

pub const fn multispace1<S>() -> Class<S> {
    class(MULTISPACE, ErrorKind::MultiSpace, true)
}
