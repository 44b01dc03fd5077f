use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;
use tracing::trace;

/// Outcome of running a parser repeatedly
pub(crate) struct Repetition<S: Sequence> {
    pub remaining: S,
    pub matched: usize,
    /// The failure that ended the loop, if one did
    pub stopped_by: Option<Error<S>>,
}

/// Apply `parser` until it fails, the input is exhausted, it stops consuming
/// or `limit` values were matched, handing every value to `step`
pub(crate) fn repeat<P, F>(parser: &P, input: P::Input, limit: usize, mut step: F) -> Repetition<P::Input>
where
    P: Parser,
    F: FnMut(P::Output),
{
    let mut remaining = input;
    let mut matched = 0;
    let mut stopped_by = None;

    while matched < limit && !remaining.is_empty() {
        match parser.parse(remaining) {
            Ok((after, value)) => {
                if after.native_len() >= remaining.native_len() {
                    trace!(matched, "repetition stopped: parser consumed nothing");
                    break;
                }
                step(value);
                remaining = after;
                matched += 1;
            }
            Err(error) => {
                stopped_by = Some(error);
                break;
            }
        }
    }

    Repetition {
        remaining,
        matched,
        stopped_by,
    }
}

/// Parser combinator that collects between `lower` and `upper` matches
///
/// Stops without failing at the first failure, at end of input, or when the
/// inner parser succeeds without consuming anything. Too few matches fail
/// with `kind` at the input. With `surface_inner` set, the kind of the inner
/// failure that ended the loop is reported instead when there was one.
pub struct Many<P> {
    parser: P,
    lower: usize,
    upper: usize,
    kind: ErrorKind,
    surface_inner: bool,
}

impl<P: Parser> Parser for Many<P> {
    type Input = P::Input;
    type Output = Vec<P::Output>;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        let mut values = Vec::new();
        let run = repeat(&self.parser, input, self.upper, |value| values.push(value));

        if run.matched < self.lower {
            let kind = match run.stopped_by {
                Some(error) if self.surface_inner => error.kind(),
                _ => self.kind,
            };
            return Err(Error::new(input, kind));
        }
        Ok((run.remaining, values))
    }
}

/// Zero or more matches; never fails
pub fn many0<P: Parser>(parser: P) -> Many<P> {
    many_bounded(0, usize::MAX, parser)
}

/// One or more matches
pub fn many1<P: Parser>(parser: P) -> Many<P> {
    Many {
        parser,
        lower: 1,
        upper: usize::MAX,
        kind: ErrorKind::Many1,
        surface_inner: true,
    }
}

/// At most `upper` matches, failing with `ManyBounded` below `lower`
pub fn many_bounded<P: Parser>(lower: usize, upper: usize, parser: P) -> Many<P> {
    Many {
        parser,
        lower,
        upper,
        kind: ErrorKind::ManyBounded,
        surface_inner: false,
    }
}

/// Parser combinator that counts matches instead of collecting them
pub struct ManyCount<P> {
    parser: P,
    lower: usize,
}

impl<P: Parser> Parser for ManyCount<P> {
    type Input = P::Input;
    type Output = usize;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, usize> {
        let run = repeat(&self.parser, input, usize::MAX, drop);
        if run.matched < self.lower {
            return Err(Error::new(input, ErrorKind::Many1Count));
        }
        Ok((run.remaining, run.matched))
    }
}

/// Number of consecutive matches; never fails
pub fn many0_count<P: Parser>(parser: P) -> ManyCount<P> {
    ManyCount { parser, lower: 0 }
}

/// Number of consecutive matches, failing with `Many1Count` on zero
pub fn many1_count<P: Parser>(parser: P) -> ManyCount<P> {
    ManyCount { parser, lower: 1 }
}
