use crate::error::{Error, ErrorKind, PResult};
use crate::parser::Parser;
use crate::sequence::Sequence;
use std::marker::PhantomData;

/// Parser that always succeeds with a clone of a value, consuming nothing
pub struct Success<S, T> {
    value: T,
    _phantom: PhantomData<fn(S)>,
}

impl<S: Sequence, T: Clone> Parser for Success<S, T> {
    type Input = S;
    type Output = T;

    fn parse(&self, input: S) -> PResult<S, T> {
        Ok((input, self.value.clone()))
    }
}

pub fn success<S: Sequence, T: Clone>(value: T) -> Success<S, T> {
    Success {
        value,
        _phantom: PhantomData,
    }
}

/// Parser that always fails with `Fail`
pub struct Fail<S, O> {
    _phantom: PhantomData<fn(S) -> O>,
}

impl<S: Sequence, O> Parser for Fail<S, O> {
    type Input = S;
    type Output = O;

    fn parse(&self, input: S) -> PResult<S, O> {
        Err(Error::new(input, ErrorKind::Fail))
    }
}

pub fn fail<S: Sequence, O>() -> Fail<S, O> {
    Fail {
        _phantom: PhantomData,
    }
}

/// Parser combinator that replaces the value of a parser with a fixed one
pub struct Value<P, T> {
    value: T,
    parser: P,
}

impl<P: Parser, T: Clone> Parser for Value<P, T> {
    type Input = P::Input;
    type Output = T;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, T> {
        let (remaining, _) = self.parser.parse(input)?;
        Ok((remaining, self.value.clone()))
    }
}

/// Run `parser` for what it consumes and yield `value` instead of its output
///
/// Failures of `parser` still propagate.
pub fn noerr_value<P: Parser, T: Clone>(value: T, parser: P) -> Value<P, T> {
    Value { value, parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alt::alt;
    use crate::ascii::{alpha1, char};
    use crate::generic::tag;

    #[test]
    fn test_success() {
        let parser = success(10);
        assert_eq!(parser.parse("xyz"), Ok(("xyz", 10)));
        assert_eq!(parser.parse(""), Ok(("", 10)));
    }

    #[test]
    fn test_success_as_fallback() {
        let parser = alt((char('+'), success('+')));
        assert_eq!(parser.parse("-1"), Ok(("-1", '+')));
    }

    #[test]
    fn test_fail() {
        let parser = fail::<_, ()>();
        assert_eq!(parser.parse("string"), Err(Error::new("string", ErrorKind::Fail)));
    }

    #[test]
    fn test_noerr_value() {
        let parser = noerr_value(true, tag("yes"));
        assert_eq!(parser.parse("yes!"), Ok(("!", true)));
        assert_eq!(parser.parse("no"), Err(Error::new("no", ErrorKind::Tag)));
    }

    #[test]
    fn test_noerr_value_enum() {
        #[derive(Debug, Clone, PartialEq)]
        enum Keyword {
            Let,
            Ident,
        }
        let parser = alt((noerr_value(Keyword::Let, tag("let")), noerr_value(Keyword::Ident, alpha1())));
        assert_eq!(parser.parse("let x"), Ok((" x", Keyword::Let)));
        assert_eq!(parser.parse("var x"), Ok((" x", Keyword::Ident)));
    }
}
