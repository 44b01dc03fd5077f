use crate::error::{Error, ErrorKind, PResult};
use crate::many::repeat;
use crate::parser::Parser;

/// Parser combinator that threads an accumulator through repeated matches
///
/// Follows the stopping rules of [`many0`](crate::many0): end of input, the
/// first failure and a match that consumed nothing all end the loop. A fresh
/// accumulator comes from `init` on every parse.
pub struct Fold<P, I, G> {
    parser: P,
    init: I,
    combine: G,
    lower: usize,
    upper: usize,
    kind: ErrorKind,
}

impl<P, I, G, A> Parser for Fold<P, I, G>
where
    P: Parser,
    I: Fn() -> A,
    G: Fn(A, P::Output) -> A,
{
    type Input = P::Input;
    type Output = A;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, A> {
        let mut accumulator = Some((self.init)());
        let run = repeat(&self.parser, input, self.upper, |value| {
            accumulator = accumulator.take().map(|acc| (self.combine)(acc, value));
        });

        match accumulator {
            Some(accumulator) if run.matched >= self.lower => Ok((run.remaining, accumulator)),
            _ => Err(Error::new(input, self.kind)),
        }
    }
}

/// Fold zero or more matches; never fails
pub fn fold_many0<P, I, G, A>(parser: P, init: I, combine: G) -> Fold<P, I, G>
where
    P: Parser,
    I: Fn() -> A,
    G: Fn(A, P::Output) -> A,
{
    Fold {
        parser,
        init,
        combine,
        lower: 0,
        upper: usize::MAX,
        kind: ErrorKind::Many1,
    }
}

/// Fold one or more matches, failing with `Many1` on zero
pub fn fold_many1<P, I, G, A>(parser: P, init: I, combine: G) -> Fold<P, I, G>
where
    P: Parser,
    I: Fn() -> A,
    G: Fn(A, P::Output) -> A,
{
    Fold {
        parser,
        init,
        combine,
        lower: 1,
        upper: usize::MAX,
        kind: ErrorKind::Many1,
    }
}

/// Fold at most `upper` matches, failing with `FoldManyBounded` below `lower`
pub fn fold_many_bounded<P, I, G, A>(
    lower: usize,
    upper: usize,
    parser: P,
    init: I,
    combine: G,
) -> Fold<P, I, G>
where
    P: Parser,
    I: Fn() -> A,
    G: Fn(A, P::Output) -> A,
{
    Fold {
        parser,
        init,
        combine,
        lower,
        upper,
        kind: ErrorKind::FoldManyBounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{char, int_literal};
    use crate::generic::tag;
    use crate::terminated::terminated;

    fn sum(total: i64, value: i64) -> i64 {
        total + value
    }

    #[test]
    fn test_fold_many0_sums() {
        let parser = fold_many0(terminated(int_literal(), char(',')), || 0, sum);
        assert_eq!(parser.parse("1,2,3,x"), Ok(("x", 6)));
        assert_eq!(parser.parse("x"), Ok(("x", 0)));
    }

    #[test]
    fn test_fold_many0_collects() {
        let parser = fold_many0(tag("ab"), Vec::new, |mut acc: Vec<&str>, item| {
            acc.push(item);
            acc
        });
        assert_eq!(parser.parse("ababc"), Ok(("c", vec!["ab", "ab"])));
    }

    #[test]
    fn test_fold_accumulator_is_fresh_per_parse() {
        let parser = fold_many0(char('a'), || 0usize, |count, _| count + 1);
        assert_eq!(parser.parse("aa"), Ok(("", 2)));
        assert_eq!(parser.parse("aaa"), Ok(("", 3)));
    }

    #[test]
    fn test_fold_many1() {
        let parser = fold_many1(char('a'), || 0usize, |count, _| count + 1);
        assert_eq!(parser.parse("aab"), Ok(("b", 2)));
        assert_eq!(parser.parse("b"), Err(Error::new("b", ErrorKind::Many1)));
        assert_eq!(parser.parse(""), Err(Error::new("", ErrorKind::Many1)));
    }

    #[test]
    fn test_fold_many_bounded() {
        let parser = fold_many_bounded(2, 3, char('a'), String::new, |mut acc: String, ch| {
            acc.push(ch);
            acc
        });
        assert_eq!(parser.parse("aaaa"), Ok(("a", "aaa".to_string())));
        assert_eq!(parser.parse("aab"), Ok(("b", "aa".to_string())));
        assert_eq!(
            parser.parse("ab"),
            Err(Error::new("ab", ErrorKind::FoldManyBounded))
        );
    }
}
