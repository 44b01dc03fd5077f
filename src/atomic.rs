use std::fmt;

/// Trait for character-like elements that can be classified as ASCII
/// This enables the character-class parsers and line/column calculation
/// to work over both text (`char`) and byte (`u8`) sequences
pub trait Atomic: Copy + PartialEq + fmt::Debug {
    /// The newline character/element for this atomic type
    const NEWLINE: Self;

    /// View this element as a `char` (bytes map to the Latin-1 code point)
    fn as_char(self) -> char;

    /// Build an element from an ASCII byte
    fn from_ascii(byte: u8) -> Self;

    fn is_newline(self) -> bool {
        self == Self::NEWLINE
    }

    /// Whether this element appears in the given ASCII table
    fn in_table(self, table: &str) -> bool {
        let ch = self.as_char();
        ch.is_ascii() && table.contains(ch)
    }

    /// Equality ignoring letter case
    fn eq_ignore_case(self, other: Self) -> bool;
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn as_char(self) -> char {
        self as char
    }

    fn from_ascii(byte: u8) -> Self {
        byte
    }

    fn eq_ignore_case(self, other: Self) -> bool {
        self.eq_ignore_ascii_case(&other)
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn as_char(self) -> char {
        self
    }

    fn from_ascii(byte: u8) -> Self {
        byte as char
    }

    fn eq_ignore_case(self, other: Self) -> bool {
        self == other || self.to_lowercase().eq(other.to_lowercase())
    }
}

/// Render a run of atomic elements as a `String` for diagnostics
pub fn render<T: Atomic>(elements: impl IntoIterator<Item = T>) -> String {
    elements.into_iter().map(Atomic::as_char).collect()
}
