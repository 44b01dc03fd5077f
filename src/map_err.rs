use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::fmt;
use tracing::debug;

/// Parser combinator that transforms the error of a parser using a mapping function
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<P, F> Parser for MapErr<P, F>
where
    P: Parser,
    F: Fn(Error<P::Input>) -> Error<P::Input>,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        self.parser.parse(input).map_err(&self.mapper)
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser,
    F: Fn(Error<P::Input>) -> Error<P::Input>,
{
    MapErr::new(parser, mapper)
}

/// Rewrites the kind of any error the inner parser reports
///
/// The position of the error is preserved, so a composite parser can report
/// one coherent kind instead of leaking the kind of an internal primitive.
#[derive(Debug, Clone)]
pub struct MapKind<P> {
    parser: P,
    kind: ErrorKind,
}

impl<P: Parser> Parser for MapKind<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        self.parser
            .parse(input)
            .map_err(|error| error.with_kind(self.kind))
    }
}

pub fn map_kind<P: Parser>(kind: ErrorKind, parser: P) -> MapKind<P> {
    MapKind { parser, kind }
}

/// Swallows errors of exactly one kind
///
/// An error of `kind` becomes a success yielding `None` with the input
/// untouched; any other error is passed through unchanged. Callers that want
/// a fallback value supply it from the `None`.
#[derive(Debug, Clone)]
pub struct IgnoreKind<P> {
    parser: P,
    kind: ErrorKind,
}

impl<P: Parser> Parser for IgnoreKind<P> {
    type Input = P::Input;
    type Output = Option<P::Output>;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        match self.parser.parse(input) {
            Ok((remaining, value)) => Ok((remaining, Some(value))),
            Err(error) if error.kind() == self.kind => Ok((input, None)),
            Err(error) => Err(error),
        }
    }
}

pub fn ignore_kind<P: Parser>(kind: ErrorKind, parser: P) -> IgnoreKind<P> {
    IgnoreKind { parser, kind }
}

/// Translate the failure of external logic into a parse error
///
/// Used around conversions that report failure with their own error type
/// (for instance `str::parse`). The foreign error is logged and replaced with
/// an [`Error`] of `kind` positioned at `remaining`.
pub fn map_external<S, T, E>(remaining: S, kind: ErrorKind, result: Result<T, E>) -> Result<T, Error<S>>
where
    S: Sequence,
    E: fmt::Display,
{
    result.map_err(|foreign| {
        debug!(%foreign, %kind, "external conversion failed");
        Error::new(remaining, kind)
    })
}

/// Extension trait to add error-rewriting methods to parsers
pub trait MapErrExt: Parser {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(Error<Self::Input>) -> Error<Self::Input>,
    {
        MapErr::new(self, mapper)
    }

    fn map_kind(self, kind: ErrorKind) -> MapKind<Self> {
        map_kind(kind, self)
    }

    fn ignore_kind(self, kind: ErrorKind) -> IgnoreKind<Self> {
        ignore_kind(kind, self)
    }
}

/// Implement MapErrExt for all parsers
impl<P: Parser> MapErrExt for P {}
