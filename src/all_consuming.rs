use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;

/// Parser combinator that requires the whole input to be consumed
pub struct AllConsuming<P> {
    parser: P,
}

impl<P: Parser> Parser for AllConsuming<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, P::Output> {
        let (remaining, value) = self.parser.parse(input)?;
        if !remaining.is_empty() {
            return Err(Error::new(remaining, ErrorKind::Eof));
        }
        Ok((remaining, value))
    }
}

/// Run `parser` and fail with `Eof` at the leftover if any input remains
pub fn all_consuming<P: Parser>(parser: P) -> AllConsuming<P> {
    AllConsuming { parser }
}
