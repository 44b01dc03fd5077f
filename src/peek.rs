use crate::error::PResult;
use crate::parser::Parser;

/// Parser combinator for positive lookahead
///
/// Keeps the value of the inner parser but never consumes input. Failures
/// propagate unchanged.
pub struct Peek<P> {
    parser: P,
}

impl<P: Parser> Parser for Peek<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, P::Output> {
        let (_, value) = self.parser.parse(input)?;
        Ok((input, value))
    }
}

pub fn peek<P: Parser>(parser: P) -> Peek<P> {
    Peek { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::generic::tag;

    #[test]
    fn test_peek_does_not_consume() {
        let parser = peek(tag("abc"));
        assert_eq!(parser.parse("abcdef"), Ok(("abcdef", "abc")));
    }

    #[test]
    fn test_peek_propagates_failure() {
        let parser = peek(tag("abc"));
        assert_eq!(parser.parse("xyz"), Err(Error::new("xyz", ErrorKind::Tag)));
    }
}
