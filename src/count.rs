use crate::error::PResult;
use crate::parser::Parser;
use std::cell::RefCell;

/// Upper bound on elements reserved up front by [`count`] and
/// [`length_count`](crate::length_count); the `Vec` grows normally past it
pub const MAX_PREALLOC: usize = 4096;

/// Run `parser` exactly `times` times, collecting the values
pub(crate) fn parse_times<P: Parser>(
    parser: &P,
    input: P::Input,
    times: usize,
) -> PResult<P::Input, Vec<P::Output>> {
    let mut values = Vec::with_capacity(times.min(MAX_PREALLOC));
    let mut remaining = input;
    for _ in 0..times {
        let (after, value) = parser.parse(remaining)?;
        values.push(value);
        remaining = after;
    }
    Ok((remaining, values))
}

/// Parser combinator that applies a parser a fixed number of times
pub struct Count<P> {
    parser: P,
    times: usize,
}

impl<P: Parser> Parser for Count<P> {
    type Input = P::Input;
    type Output = Vec<P::Output>;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        parse_times(&self.parser, input, self.times)
    }
}

/// Apply `parser` exactly `times` times; the first failure propagates
pub fn count<P: Parser>(parser: P, times: usize) -> Count<P> {
    Count { parser, times }
}

/// Parser combinator that writes values into a caller-owned buffer
///
/// One value is parsed per slot. On failure the slots written so far keep
/// their new values and the rest are untouched.
pub struct Fill<'b, P, O> {
    parser: P,
    buffer: RefCell<&'b mut [O]>,
}

impl<P> Parser for Fill<'_, P, P::Output>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = ();

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, ()> {
        let mut buffer = self.buffer.borrow_mut();
        let mut remaining = input;
        for slot in buffer.iter_mut() {
            let (after, value) = self.parser.parse(remaining)?;
            *slot = value;
            remaining = after;
        }
        Ok((remaining, ()))
    }
}

/// Fill `buffer` with one parsed value per slot
pub fn fill<P: Parser>(parser: P, buffer: &mut [P::Output]) -> Fill<'_, P, P::Output> {
    Fill {
        parser,
        buffer: RefCell::new(buffer),
    }
}
