//! Primitive operations on sequences
//!
//! These work on a [`Sequence`] directly and return plain `Option`s; the
//! parser wrappers built on top of them live in [`crate::generic`].

use crate::atomic::Atomic;
use crate::sequence::Sequence;

/// Whether the sequence has been exhausted
pub fn eof<S: Sequence>(sequence: S) -> bool {
    sequence.is_empty()
}

/// The next element, without consuming it
pub fn peek<S: Sequence>(sequence: S) -> Option<S::Element> {
    sequence.elements().next()
}

/// Split off exactly `count` elements as `(remaining, taken)`
///
/// Returns `None` if the sequence holds fewer than `count` elements.
pub fn take<S: Sequence>(sequence: S, count: usize) -> Option<(S, S)> {
    let offset = sequence.offset_at(count)?;
    let (taken, remaining) = sequence.split_at(offset);
    Some((remaining, taken))
}

/// Pop one element as `(remaining, element)`
pub fn next_item<S: Sequence>(sequence: S) -> Option<(S, S::Element)> {
    let element = peek(sequence)?;
    let (remaining, _) = take(sequence, 1)?;
    Some((remaining, element))
}

/// The prefix of `original` that has been consumed to reach `remaining`
pub fn consumed<S: Sequence>(original: S, remaining: S) -> S {
    original.split_at(original.offset_of(&remaining)).0
}

/// 0-indexed line number `remaining` sits on within `original`
pub fn at_line<S>(original: S, remaining: S) -> usize
where
    S: Sequence,
    S::Element: Atomic,
{
    at_pos(original, remaining).0
}

/// `(line, column)` of `remaining` within `original`, both 0-indexed
///
/// The column counts elements since the last consumed newline. The consumed
/// prefix is scanned once.
pub fn at_pos<S>(original: S, remaining: S) -> (usize, usize)
where
    S: Sequence,
    S::Element: Atomic,
{
    let mut line = 0;
    let mut column = 0;
    for element in consumed(original, remaining).elements() {
        if element.is_newline() {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
    }
    (line, column)
}
