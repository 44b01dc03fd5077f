use crate::error::PResult;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, P::Output> {
        let parser = (self.factory)();
        parser.parse(input)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy { factory }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alt::alt;
    use crate::ascii::char;
    use crate::delimited::delimited;
    use crate::many::many0;
    use crate::map::MapExt;
    use crate::value::success;

    #[test]
    fn test_lazy_basic() {
        let lazy_parser = lazy(|| char(b'a'));
        let data: &[u8] = b"aaaa";
        assert_eq!(lazy_parser.parse(data), Ok((&data[1..], b'a')));
    }

    #[test]
    fn test_lazy_with_many() {
        let lazy_parser = lazy(|| many0(char('a')));
        let (remaining, output) = lazy_parser.parse("aaaa").unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(remaining, "");
    }

    fn nesting(input: &str) -> PResult<&str, usize> {
        alt((
            delimited(char('('), lazy(|| crate::parser::from_fn(nesting)), char(')'))
                .map(|depth| depth + 1),
            success(0),
        ))
        .parse(input)
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        assert_eq!(nesting("((()))x"), Ok(("x", 3)));
        assert_eq!(nesting("x"), Ok(("x", 0)));
        assert_eq!(nesting("(()"), Ok(("(()", 0)));
    }
}
