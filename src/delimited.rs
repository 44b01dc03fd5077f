use crate::map::MapExt;
use crate::multiple::multiple;
use crate::parser::Parser;

/// Match content between opening and closing delimiters, keeping the content
///
/// No whitespace is skipped around any of the three parts.
pub fn delimited<P1, P2, P3>(
    open: P1,
    content: P2,
    close: P3,
) -> impl Parser<Input = P1::Input, Output = P2::Output>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
    P3: Parser<Input = P1::Input>,
{
    multiple((open, content, close))
        .map(|(_, value, _): (P1::Output, P2::Output, P3::Output)| value)
}
