//! Character-class and literal parsers over text or bytes
//!
//! Everything here requires the sequence elements to be [`Atomic`](crate::Atomic),
//! which `&str` and `&[u8]` both satisfy.

pub mod class;
pub mod line;
pub mod number;
pub mod single;
pub mod tag_no_case;

pub use class::{
    Class, alpha0, alpha1, alphanum0, alphanum1, digit0, digit1, hex_digit0, hex_digit1,
    multispace0, multispace1, oct_digit0, oct_digit1, space0, space1,
};
pub use line::{AsciiLiteral, crlf, line_ending, not_line_ending};
pub use number::{FloatLiteral, IntLiteral, float_literal, int_literal};
pub use single::{Satisfy, char, newline, none_of, one_of, satisfy, tab};
pub use tag_no_case::{TagNoCase, tag_no_case};

pub const DIGITS: &str = "0123456789";
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";
pub const OCT_DIGITS: &str = "01234567";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHANUMERIC: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SPACE: &str = " \t";
pub const MULTISPACE: &str = " \t\r\n";

/// Elements that may appear in an integer literal
pub const INT_COMPONENTS: &str = "0123456789_";
/// Elements that may appear in a float literal
pub const FLOAT_COMPONENTS: &str = "0123456789_.eE+-";
