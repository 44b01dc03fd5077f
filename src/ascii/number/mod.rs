use crate::atomic::{Atomic, render};
use crate::error::{ErrorKind, PResult};
use crate::generic::take_while1;
use crate::map_err::MapErrExt;
use crate::parser::Parser;
use crate::sequence::Sequence;

pub mod float;
pub mod int;

pub use float::{FloatLiteral, float_literal};
pub use int::{IntLiteral, int_literal};

/// Take the longest non-empty run drawn from `table`, rendered as text
///
/// An empty run fails with `kind` at the input.
fn literal_run<S>(input: S, table: &'static str, kind: ErrorKind) -> PResult<S, String>
where
    S: Sequence,
    S::Element: Atomic,
{
    let (remaining, run) = take_while1::<S, _>(move |element: S::Element| element.in_table(table))
        .map_kind(kind)
        .parse(input)?;
    Ok((remaining, render(run.elements())))
}

/// Whether every `_` in `text` sits between two ASCII digits
fn separators_well_placed(text: &str) -> bool {
    let bytes = text.as_bytes();
    let is_digit_at = |index: Option<usize>| {
        index
            .and_then(|index| bytes.get(index))
            .is_some_and(u8::is_ascii_digit)
    };

    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &byte)| byte == b'_')
        .all(|(index, _)| is_digit_at(index.checked_sub(1)) && is_digit_at(Some(index + 1)))
}

/// Drop well-placed separators, or `None` if any separator is misplaced
fn strip_separators(text: &str) -> Option<String> {
    separators_well_placed(text).then(|| text.replace('_', ""))
}
