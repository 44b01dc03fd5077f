use crate::atomic::{Atomic, render};
use crate::primitive::at_pos;
use crate::sequence::Sequence;
use std::fmt;

/// Why a parser failed
///
/// Codes are stable: they may be logged or persisted and mapped back with
/// [`ErrorKind::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorKind {
    Tag = 0,
    MapRes = 1,
    Alt = 2,
    IsNot = 3,
    IsA = 4,
    Alpha = 5,
    Digit = 6,
    HexDigit = 7,
    OctDigit = 8,
    AlphaNumeric = 9,
    Space = 10,
    MultiSpace = 11,
    Eof = 12,
    Char = 13,
    Crlf = 14,
    Negate = 15,
    Verify = 16,
    Satisfy = 17,
    Fail = 18,
    Float = 19,
    Integer = 20,
    NoneOf = 21,
    OneOf = 22,
    TakeWhile = 23,
    TakeWhileBounded = 24,
    TakeTill = 25,
    TakeUntil = 26,
    Many1 = 27,
    Many1Count = 28,
    ManyBounded = 29,
    FoldManyBounded = 30,
    /// A repetition made no progress and would never terminate
    ManyTill = 31,
    /// A length prefix does not fit in `usize`
    Length = 32,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 33] = [
        ErrorKind::Tag,
        ErrorKind::MapRes,
        ErrorKind::Alt,
        ErrorKind::IsNot,
        ErrorKind::IsA,
        ErrorKind::Alpha,
        ErrorKind::Digit,
        ErrorKind::HexDigit,
        ErrorKind::OctDigit,
        ErrorKind::AlphaNumeric,
        ErrorKind::Space,
        ErrorKind::MultiSpace,
        ErrorKind::Eof,
        ErrorKind::Char,
        ErrorKind::Crlf,
        ErrorKind::Negate,
        ErrorKind::Verify,
        ErrorKind::Satisfy,
        ErrorKind::Fail,
        ErrorKind::Float,
        ErrorKind::Integer,
        ErrorKind::NoneOf,
        ErrorKind::OneOf,
        ErrorKind::TakeWhile,
        ErrorKind::TakeWhileBounded,
        ErrorKind::TakeTill,
        ErrorKind::TakeUntil,
        ErrorKind::Many1,
        ErrorKind::Many1Count,
        ErrorKind::ManyBounded,
        ErrorKind::FoldManyBounded,
        ErrorKind::ManyTill,
        ErrorKind::Length,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::Tag => "tag",
            ErrorKind::MapRes => "map_res",
            ErrorKind::Alt => "alternative",
            ErrorKind::IsNot => "is_not",
            ErrorKind::IsA => "is_a",
            ErrorKind::Alpha => "alphabetic",
            ErrorKind::Digit => "digit",
            ErrorKind::HexDigit => "hexadecimal digit",
            ErrorKind::OctDigit => "octal digit",
            ErrorKind::AlphaNumeric => "alphanumeric",
            ErrorKind::Space => "space",
            ErrorKind::MultiSpace => "multispace",
            ErrorKind::Eof => "end of input",
            ErrorKind::Char => "char",
            ErrorKind::Crlf => "line ending",
            ErrorKind::Negate => "negate",
            ErrorKind::Verify => "verify",
            ErrorKind::Satisfy => "satisfy",
            ErrorKind::Fail => "fail",
            ErrorKind::Float => "float literal",
            ErrorKind::Integer => "integer literal",
            ErrorKind::NoneOf => "none_of",
            ErrorKind::OneOf => "one_of",
            ErrorKind::TakeWhile => "take_while",
            ErrorKind::TakeWhileBounded => "take_while_bounded",
            ErrorKind::TakeTill => "take_till",
            ErrorKind::TakeUntil => "take_until",
            ErrorKind::Many1 => "many1",
            ErrorKind::Many1Count => "many1_count",
            ErrorKind::ManyBounded => "many_bounded",
            ErrorKind::FoldManyBounded => "fold_many_bounded",
            ErrorKind::ManyTill => "many_till",
            ErrorKind::Length => "length prefix",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A parse failure: the input left at the point of failure and why
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} error with {} element(s) remaining", .remaining.len())]
pub struct Error<S: Sequence> {
    remaining: S,
    kind: ErrorKind,
}

/// Result of applying a parser: `(remaining, value)` or an [`Error`]
pub type PResult<S, O> = Result<(S, O), Error<S>>;

impl<S: Sequence> Error<S> {
    pub fn new(remaining: S, kind: ErrorKind) -> Self {
        Error { remaining, kind }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The unconsumed input where the failure happened
    pub fn remaining(&self) -> S {
        self.remaining
    }

    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    /// Same position, different kind
    pub fn with_kind(self, kind: ErrorKind) -> Self {
        Error { kind, ..self }
    }

    /// Move an error raised while parsing `view` onto `outer`
    ///
    /// `view` must start where `outer` starts; the distance into `view` is
    /// kept and the kind is unchanged.
    pub(crate) fn rebase(self, view: S, outer: S) -> Self {
        let offset = outer.clamp_offset(view.offset_of(&self.remaining));
        Error {
            remaining: outer.split_at(offset).1,
            kind: self.kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// 0-indexed line
    pub line: usize,
    /// Elements since the start of the line
    pub column: usize,
    /// Native offset into the original input
    pub offset: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.column + 1)
    }
}

impl<S> Error<S>
where
    S: Sequence,
    S::Element: Atomic,
{
    /// Locate this error within the input the top-level parser was given
    pub fn location(&self, original: S) -> Location {
        let (line, column) = at_pos(original, self.remaining);
        Location {
            line,
            column,
            offset: original.offset_of(&self.remaining),
        }
    }

    /// Render a human readable report with surrounding context
    ///
    /// Shows up to two lines before and after the failing line, with a
    /// pointer under the failing element.
    pub fn report(&self, original: S) -> String {
        let location = self.location(original);
        let mut out = format!("{} error at {}\n\n", self.kind, location);

        let text = render(original.elements());
        let first = location.line.saturating_sub(2);
        let last = location.line + 2;

        for (number, line) in text.split('\n').enumerate() {
            if number < first || number > last {
                continue;
            }
            let prefix = if number == location.line {
                format!("  > {} | ", number + 1)
            } else {
                format!("    {} | ", number + 1)
            };
            out.push_str(&prefix);
            out.push_str(line.trim_end_matches('\r'));
            out.push('\n');

            if number == location.line {
                let pad = prefix.chars().count() + location.column;
                out.push_str(&" ".repeat(pad));
                out.push_str("^--- here\n");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorKind::Tag.code(), 0);
        assert_eq!(ErrorKind::Eof.code(), 12);
        assert_eq!(ErrorKind::OneOf.code(), 22);
        assert_eq!(ErrorKind::Length.code(), 32);
    }

    #[test]
    fn test_from_code_round_trips_every_kind() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(999), None);
    }

    #[test]
    fn test_with_kind_keeps_position() {
        let error = Error::new("rest", ErrorKind::Eof);
        let remapped = error.with_kind(ErrorKind::Tag);
        assert_eq!(remapped.kind(), ErrorKind::Tag);
        assert_eq!(remapped.remaining(), "rest");
        assert_eq!(error.kind(), ErrorKind::Eof);
    }

    #[test]
    fn test_errors_compare_by_value() {
        let input = String::from("abc");
        let a = Error::new(&input[1..], ErrorKind::Char);
        let b = Error::new("bc", ErrorKind::Char);
        assert_eq!(a, b);
        assert_ne!(a, Error::new("bc", ErrorKind::Tag));
    }

    #[test]
    fn test_display() {
        let error = Error::new("héllo", ErrorKind::Digit);
        assert_eq!(error.to_string(), "digit error with 5 element(s) remaining");
    }

    #[test]
    fn test_location_multiline() {
        let original = "line1\nline2";
        let error = Error::new(&original[8..], ErrorKind::Tag);
        let location = error.location(original);
        assert_eq!(location.line, 1);
        assert_eq!(location.column, 2);
        assert_eq!(location.offset, 8);
        assert_eq!(location.to_string(), "line 2, column 3");
    }

    #[test]
    fn test_location_at_end_of_input() {
        let original = "hello\n";
        let error = Error::new(&original[6..], ErrorKind::Eof);
        let location = error.location(original);
        assert_eq!(location.line, 1);
        assert_eq!(location.column, 0);
    }

    #[test]
    fn test_report_points_at_failure() {
        let original = "a\nbcd\ne";
        let error = Error::new(&original[4..], ErrorKind::Digit);
        let report = error.report(original);
        println!("{}", report);

        assert!(report.starts_with("digit error at line 2, column 3"));
        assert!(report.contains("  > 2 | bcd"));
        assert!(report.contains("    1 | a"));
        assert!(report.contains("    3 | e"));
        assert!(report.contains("         ^--- here"));
    }

    #[test]
    fn test_report_on_bytes() {
        let original: &[u8] = b"key=\x01";
        let error = Error::new(&original[4..], ErrorKind::Alpha);
        let report = error.report(original);
        assert!(report.contains("line 1, column 5"));
    }

    #[test]
    fn test_report_empty_input() {
        let error = Error::new("", ErrorKind::Eof);
        let report = error.report("");
        assert!(report.contains("end of input error"));
        assert!(report.contains("^--- here"));
    }
}
