use crate::error::PResult;
use crate::parser::Parser;

/// Parser combinator that only runs its parser when a flag is set
pub struct Conditional<P> {
    enabled: bool,
    parser: P,
}

impl<P: Parser> Parser for Conditional<P> {
    type Input = P::Input;
    type Output = Option<P::Output>;

    fn parse(&self, input: Self::Input) -> PResult<Self::Input, Self::Output> {
        if !self.enabled {
            return Ok((input, None));
        }
        let (remaining, value) = self.parser.parse(input)?;
        Ok((remaining, Some(value)))
    }
}

/// Run `parser` if `enabled`, otherwise yield `None` without consuming
pub fn conditional<P: Parser>(enabled: bool, parser: P) -> Conditional<P> {
    Conditional { enabled, parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::alpha1;
    use crate::error::{Error, ErrorKind};

    #[test]
    fn test_conditional_enabled() {
        assert_eq!(conditional(true, alpha1()).parse("abcd;"), Ok((";", Some("abcd"))));
        assert_eq!(
            conditional(true, alpha1()).parse("123;"),
            Err(Error::new("123;", ErrorKind::Alpha))
        );
    }

    #[test]
    fn test_conditional_disabled() {
        assert_eq!(conditional(false, alpha1()).parse("abcd;"), Ok(("abcd;", None)));
        assert_eq!(conditional(false, alpha1()).parse("123;"), Ok(("123;", None)));
    }
}
