use crate::map::MapExt;
use crate::multiple::multiple;
use crate::parser::Parser;

/// Match `left`, a separator and `right`, keeping the two outer values
pub fn separated_pair<P1, PS, P2>(
    left: P1,
    separator: PS,
    right: P2,
) -> impl Parser<Input = P1::Input, Output = (P1::Output, P2::Output)>
where
    P1: Parser,
    PS: Parser<Input = P1::Input>,
    P2: Parser<Input = P1::Input>,
{
    multiple((left, separator, right))
        .map(|(first, _, second): (P1::Output, PS::Output, P2::Output)| (first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{alpha1, char, int_literal, space0};
    use crate::delimited::delimited;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn test_key_value() {
        let parser = separated_pair(alpha1(), char('='), int_literal());
        assert_eq!(parser.parse("width=80\n"), Ok(("\n", ("width", 80))));
    }

    #[test]
    fn test_separator_with_whitespace() {
        let separator = delimited(space0(), char(','), space0());
        let parser = separated_pair(int_literal(), separator, int_literal());
        assert_eq!(parser.parse("3 ,  4)"), Ok((")", (3, 4))));
    }

    #[test]
    fn test_missing_separator() {
        let parser = separated_pair(alpha1(), char('='), int_literal());
        assert_eq!(parser.parse("width:80"), Err(Error::new(":80", ErrorKind::Char)));
    }

    #[test]
    fn test_missing_right() {
        let parser = separated_pair(alpha1(), char('='), int_literal());
        assert_eq!(parser.parse("width="), Err(Error::new("", ErrorKind::Integer)));
    }
}
