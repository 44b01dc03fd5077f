use crate::count::parse_times;
use crate::error::{ErrorKind, PResult};
use crate::generic::take;
use crate::map_err::map_external;
use crate::parser::Parser;
use std::fmt;

/// Read a length prefix with `counter` and convert it to `usize`
///
/// A prefix that does not fit (negative or too large) fails with `Length`
/// at `input`.
fn read_length<C>(counter: &C, input: C::Input) -> PResult<C::Input, usize>
where
    C: Parser,
    usize: TryFrom<C::Output>,
    <usize as TryFrom<C::Output>>::Error: fmt::Display,
{
    let (remaining, prefix) = counter.parse(input)?;
    let length = map_external(input, ErrorKind::Length, usize::try_from(prefix))?;
    Ok((remaining, length))
}

/// Parser combinator that reads a count, then applies a parser that many times
pub struct LengthCount<C, P> {
    counter: C,
    parser: P,
}

impl<C, P> Parser for LengthCount<C, P>
where
    C: Parser,
    P: Parser<Input = C::Input>,
    usize: TryFrom<C::Output>,
    <usize as TryFrom<C::Output>>::Error: fmt::Display,
{
    type Input = C::Input;
    type Output = Vec<P::Output>;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        let (remaining, times) = read_length(&self.counter, input)?;
        parse_times(&self.parser, remaining, times)
    }
}

pub fn length_count<C, P>(counter: C, parser: P) -> LengthCount<C, P>
where
    C: Parser,
    P: Parser<Input = C::Input>,
    usize: TryFrom<C::Output>,
    <usize as TryFrom<C::Output>>::Error: fmt::Display,
{
    LengthCount { counter, parser }
}

/// Parser combinator that reads a count, then takes that many elements
pub struct LengthData<C> {
    counter: C,
}

impl<C> Parser for LengthData<C>
where
    C: Parser,
    usize: TryFrom<C::Output>,
    <usize as TryFrom<C::Output>>::Error: fmt::Display,
{
    type Input = C::Input;
    type Output = C::Input;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        let (remaining, length) = read_length(&self.counter, input)?;
        take(length).parse(remaining)
    }
}

/// Read a count, then yield exactly that many elements as a slice
///
/// Too little input after the prefix fails with `Eof`.
pub fn length_data<C>(counter: C) -> LengthData<C>
where
    C: Parser,
    usize: TryFrom<C::Output>,
    <usize as TryFrom<C::Output>>::Error: fmt::Display,
{
    LengthData { counter }
}

/// Parser combinator that runs a parser on a length-prefixed block
pub struct LengthValue<C, P> {
    counter: C,
    parser: P,
}

impl<C, P> Parser for LengthValue<C, P>
where
    C: Parser,
    P: Parser<Input = C::Input>,
    usize: TryFrom<C::Output>,
    <usize as TryFrom<C::Output>>::Error: fmt::Display,
{
    type Input = C::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        let (after_prefix, length) = read_length(&self.counter, input)?;
        let (remaining, block) = take(length).parse(after_prefix)?;
        let (_, value) = self
            .parser
            .parse(block)
            .map_err(|error| error.rebase(block, after_prefix))?;
        Ok((remaining, value))
    }
}

/// Read a count, take that many elements and run `parser` on only those
///
/// The returned remainder always starts after the whole block, whether or
/// not `parser` consumed all of it. Failures of `parser` are positioned in
/// the caller's input.
pub fn length_value<C, P>(counter: C, parser: P) -> LengthValue<C, P>
where
    C: Parser,
    P: Parser<Input = C::Input>,
    usize: TryFrom<C::Output>,
    <usize as TryFrom<C::Output>>::Error: fmt::Display,
{
    LengthValue { counter, parser }
}
