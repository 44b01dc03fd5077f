use crate::parser::Parser;
use crate::sequence::Sequence;
use std::iter::FusedIterator;
use tracing::trace;

/// Iterator that applies a parser repeatedly to one sequence
///
/// Each call to `next` parses from where the previous value ended. The first
/// failure ends the iteration without surfacing the error; so does a value
/// that consumed nothing, after it has been yielded.
pub struct ParserIterator<P: Parser> {
    parser: P,
    remaining: P::Input,
    exhausted: bool,
}

impl<P: Parser> ParserIterator<P> {
    /// Input not consumed so far
    pub fn remaining(&self) -> P::Input {
        self.remaining
    }

    /// Consume the iterator, yielding the left-over input
    pub fn finish(self) -> P::Input {
        self.remaining
    }
}

impl<P: Parser> Iterator for ParserIterator<P> {
    type Item = P::Output;

    fn next(&mut self) -> Option<P::Output> {
        if self.exhausted {
            return None;
        }

        match self.parser.parse(self.remaining) {
            Ok((after, value)) => {
                if after.native_len() >= self.remaining.native_len() {
                    trace!("parser iterator stopped: parser consumed nothing");
                    self.exhausted = true;
                }
                self.remaining = after;
                Some(value)
            }
            Err(_) => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl<P: Parser> FusedIterator for ParserIterator<P> {}

/// Lazily apply `parser` to `input` over and over
pub fn pariter<P: Parser>(input: P::Input, parser: P) -> ParserIterator<P> {
    ParserIterator {
        parser,
        remaining: input,
        exhausted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{alpha0, alpha1, char, int_literal};
    use crate::terminated::terminated;

    #[test]
    fn test_pariter_collects_values() {
        let mut iter = pariter("abc,def,ghi;", terminated(alpha1(), char(',')));
        let words: Vec<_> = iter.by_ref().collect();
        assert_eq!(words, vec!["abc", "def"]);
        assert_eq!(iter.remaining(), "ghi;");
        assert_eq!(iter.finish(), "ghi;");
    }

    #[test]
    fn test_pariter_stops_on_first_failure() {
        let mut iter = pariter("1,2,x,3,", terminated(int_literal(), char(',')));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.remaining(), "x,3,");
    }

    #[test]
    fn test_pariter_empty_input() {
        let mut iter = pariter("", alpha1());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.finish(), "");
    }

    #[test]
    fn test_pariter_non_consuming_value_ends_iteration() {
        let mut iter = pariter("123", alpha0());
        assert_eq!(iter.next(), Some(""));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.remaining(), "123");
    }

    #[test]
    fn test_pariter_bytes() {
        let data: &[u8] = b"aab";
        let count = pariter(data, char(b'a')).count();
        assert_eq!(count, 2);
    }
}
