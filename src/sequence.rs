use std::fmt;
use std::iter::{Copied, Enumerate};
use std::slice;
use std::str::{CharIndices, Chars};

/// Generic input trait for parser combinators
///
/// A sequence is an immutable, borrowed view over ordered elements that can be
/// measured, iterated and split. This abstraction allows parsers to work with
/// text (`&str`, elements are `char`), bytes (`&[u8]`) and arbitrary token
/// slices (`&[T]`) while maintaining the same combinator interface.
///
/// Offsets are expressed in the sequence's native slice units (bytes for
/// `&str`, elements for slices); counts are always in elements.
pub trait Sequence: Copy + PartialEq + fmt::Debug {
    /// The type of elements this sequence yields
    type Element: Copy + PartialEq + fmt::Debug;

    type Elements: Iterator<Item = Self::Element>;

    type Indices: Iterator<Item = (usize, Self::Element)>;

    /// Number of elements in the sequence
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.native_len() == 0
    }

    /// Length in native slice units
    fn native_len(&self) -> usize;

    fn elements(&self) -> Self::Elements;

    /// Elements paired with the native offset they start at
    fn element_indices(&self) -> Self::Indices;

    /// Native offset just past the first `count` elements
    ///
    /// Returns `None` when the sequence holds fewer than `count` elements.
    fn offset_at(&self, count: usize) -> Option<usize>;

    /// Split at a native offset into `(prefix, suffix)`
    ///
    /// The offset must come from `offset_at`, `element_indices` or
    /// `native_len` of this same sequence.
    fn split_at(&self, offset: usize) -> (Self, Self);

    /// The empty prefix of this sequence
    fn empty(&self) -> Self {
        self.split_at(0).0
    }

    /// Largest valid split offset that is not past `offset`
    fn clamp_offset(&self, offset: usize) -> usize;

    /// Native distance from the start of `self` to `suffix`
    ///
    /// Exact when `suffix` is a suffix of `self`. Any other argument still
    /// yields an offset that is safe to split at.
    fn offset_of(&self, suffix: &Self) -> usize {
        self.clamp_offset(self.native_len().saturating_sub(suffix.native_len()))
    }
}

impl<'code> Sequence for &'code str {
    type Element = char;
    type Elements = Chars<'code>;
    type Indices = CharIndices<'code>;

    fn len(&self) -> usize {
        (*self).chars().count()
    }

    fn native_len(&self) -> usize {
        str::len(*self)
    }

    fn elements(&self) -> Self::Elements {
        (*self).chars()
    }

    fn element_indices(&self) -> Self::Indices {
        (*self).char_indices()
    }

    fn offset_at(&self, count: usize) -> Option<usize> {
        let mut seen = 0;
        for (offset, _) in (*self).char_indices() {
            if seen == count {
                return Some(offset);
            }
            seen += 1;
        }
        (seen == count).then_some(str::len(*self))
    }

    fn split_at(&self, offset: usize) -> (Self, Self) {
        str::split_at(*self, offset)
    }

    fn clamp_offset(&self, offset: usize) -> usize {
        let mut offset = offset.min(str::len(*self));
        while !(*self).is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl<'code, T> Sequence for &'code [T]
where
    T: Copy + PartialEq + fmt::Debug,
{
    type Element = T;
    type Elements = Copied<slice::Iter<'code, T>>;
    type Indices = Enumerate<Copied<slice::Iter<'code, T>>>;

    fn len(&self) -> usize {
        <[T]>::len(*self)
    }

    fn native_len(&self) -> usize {
        <[T]>::len(*self)
    }

    fn elements(&self) -> Self::Elements {
        (*self).iter().copied()
    }

    fn element_indices(&self) -> Self::Indices {
        (*self).iter().copied().enumerate()
    }

    fn offset_at(&self, count: usize) -> Option<usize> {
        (count <= <[T]>::len(*self)).then_some(count)
    }

    fn split_at(&self, offset: usize) -> (Self, Self) {
        <[T]>::split_at(*self, offset)
    }

    fn clamp_offset(&self, offset: usize) -> usize {
        offset.min(<[T]>::len(*self))
    }
}
