use super::take_while::take_while1;
use crate::error::ErrorKind;
use crate::map_err::map_kind;
use crate::parser::Parser;
use crate::sequence::Sequence;

/// Longest non-empty prefix made only of elements found in `set`
///
/// Unlike [`take_while`](super::take_while), zero matches is a failure
/// (kind `IsA`).
pub fn is_a<S: Sequence>(set: S) -> impl Parser<Input = S, Output = S> {
    map_kind(
        ErrorKind::IsA,
        take_while1::<S, _>(move |element: S::Element| {
            set.elements().any(|member| member == element)
        }),
    )
}

/// Longest non-empty prefix made only of elements not found in `set`
pub fn is_not<S: Sequence>(set: S) -> impl Parser<Input = S, Output = S> {
    map_kind(
        ErrorKind::IsNot,
        take_while1::<S, _>(move |element: S::Element| {
            set.elements().all(|member| member != element)
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_is_a() {
        let hex = is_a("1234567890ABCDEF");
        assert_eq!(hex.parse("123 and voila"), Ok((" and voila", "123")));
        assert_eq!(hex.parse("DEADBEEF and others"), Ok((" and others", "DEADBEEF")));
        assert_eq!(hex.parse("BADBABEsomething"), Ok(("something", "BADBABE")));
        assert_eq!(hex.parse("D15EA5E"), Ok(("", "D15EA5E")));
    }

    #[test]
    fn test_is_a_zero_matches_fails() {
        let hex = is_a("1234567890ABCDEF");
        assert_eq!(hex.parse("xyz"), Err(Error::new("xyz", ErrorKind::IsA)));
        assert_eq!(hex.parse(""), Err(Error::new("", ErrorKind::IsA)));
    }

    #[test]
    fn test_is_not() {
        let not_space = is_not(" \t\r\n");
        assert_eq!(not_space.parse("Hello, World!"), Ok((" World!", "Hello,")));
        assert_eq!(not_space.parse("Sometimes\t"), Ok(("\t", "Sometimes")));
        assert_eq!(not_space.parse("Nospace"), Ok(("", "Nospace")));
    }

    #[test]
    fn test_is_not_zero_matches_fails() {
        let not_space = is_not(" \t\r\n");
        assert_eq!(not_space.parse(" x"), Err(Error::new(" x", ErrorKind::IsNot)));
        assert_eq!(not_space.parse(""), Err(Error::new("", ErrorKind::IsNot)));
    }

    #[test]
    fn test_is_a_bytes() {
        let data: &[u8] = b"\x00\x00\x01rest";
        let zeros_and_ones = is_a(&b"\x00\x01"[..]);
        assert_eq!(zeros_and_ones.parse(data), Ok((&data[3..], &data[..3])));
    }
}
