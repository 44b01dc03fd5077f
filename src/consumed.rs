use crate::error::PResult;
use crate::parser::Parser;
use crate::primitive;

/// Parser combinator that yields the slice a parser matched instead of its value
pub struct Recognize<P> {
    parser: P,
}

impl<P: Parser> Parser for Recognize<P> {
    type Input = P::Input;
    type Output = P::Input;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Input> {
        let (remaining, _) = self.parser.parse(input)?;
        Ok((remaining, primitive::consumed(input, remaining)))
    }
}

/// Parser combinator that yields the matched slice alongside the value
pub struct Consumed<P> {
    parser: P,
}

impl<P: Parser> Parser for Consumed<P> {
    type Input = P::Input;
    type Output = (P::Input, P::Output);

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        let (remaining, value) = self.parser.parse(input)?;
        Ok((remaining, (primitive::consumed(input, remaining), value)))
    }
}

/// Discard the value of `parser` and yield exactly what it consumed
pub fn recognize<P: Parser>(parser: P) -> Recognize<P> {
    Recognize { parser }
}

/// Yield `(consumed_slice, value)` for `parser`
pub fn consumed<P: Parser>(parser: P) -> Consumed<P> {
    Consumed { parser }
}

/// Extension trait to capture the consumed slice of any parser
pub trait ConsumedExt: Parser {
    fn recognize(self) -> Recognize<Self> {
        recognize(self)
    }

    fn consumed(self) -> Consumed<Self> {
        consumed(self)
    }
}

impl<P: Parser> ConsumedExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{alpha1, char, int_literal};
    use crate::error::{Error, ErrorKind};
    use crate::separated_pair::separated_pair;

    #[test]
    fn test_recognize() {
        let parser = recognize(separated_pair(alpha1(), char(','), alpha1()));
        assert_eq!(parser.parse("abcd,efgh;"), Ok((";", "abcd,efgh")));
    }

    #[test]
    fn test_recognize_failure() {
        let parser = recognize(separated_pair(alpha1(), char(','), alpha1()));
        assert_eq!(parser.parse("abcd;"), Err(Error::new(";", ErrorKind::Char)));
    }

    #[test]
    fn test_consumed() {
        let parser = int_literal().consumed();
        assert_eq!(parser.parse("1_000 apples"), Ok((" apples", ("1_000", 1000))));
    }

    #[test]
    fn test_recognize_agrees_with_consumed() {
        let input = "abcd,efgh;";
        let (_, recognized) = separated_pair(alpha1(), char(','), alpha1())
            .recognize()
            .parse(input)
            .unwrap();
        let (_, (slice, _)) = consumed(separated_pair(alpha1(), char(','), alpha1()))
            .parse(input)
            .unwrap();
        assert_eq!(recognized, slice);
    }

    #[test]
    fn test_recognize_bytes() {
        let data: &[u8] = b"abc123";
        let parser = recognize(alpha1());
        assert_eq!(parser.parse(data), Ok((&data[3..], &data[..3])));
    }
}
