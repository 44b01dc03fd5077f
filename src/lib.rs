//! # Nibble - Parser Combinator Library
//!
//! Small parsers over borrowed sequences, combined into larger ones.
//!
//! A parser takes a sequence (`&str`, `&[u8]` or a slice of any `Copy`
//! tokens) and either succeeds with the remaining suffix and a value, or fails
//! with an [`Error`] that records where and why. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Rich error reporting**: Stable error kinds plus line, column and context on demand
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **Zero copy**: Parsers hand back sub-slices of their input
//!
//! ```
//! use nibble::{Parser, alt, char, delimited, int_literal, many0, terminated};
//!
//! let list = delimited(char('['), many0(terminated(int_literal(), char(','))), char(']'));
//! assert_eq!(list.parse("[1,2,3,]!"), Ok(("!", vec![1, 2, 3])));
//!
//! let sign = alt((char('+'), char('-')));
//! assert!(sign.parse("*").is_err());
//! ```

pub mod all_consuming;
pub mod alt;
pub mod ascii;
pub mod atomic;
pub mod conditional;
pub mod consumed;
pub mod count;
pub mod delimited;
pub mod error;
pub mod flat_map;
pub mod fold;
pub mod generic;
pub mod iter;
pub mod lazy;
pub mod length;
pub mod many;
pub mod many_till;
pub mod map;
pub mod map_err;
pub mod map_parser;
pub mod map_res;
pub mod multiple;
pub mod negate;
pub mod optional;
pub mod pair;
pub mod parser;
pub mod peek;
pub mod preceded;
pub mod primitive;
pub mod rest;
pub mod separated_pair;
pub mod sequence;
pub mod terminated;
pub mod value;
pub mod verify;

pub use all_consuming::{AllConsuming, all_consuming};
pub use alt::{Alt, Choice, alt};
pub use ascii::{
    alpha0, alpha1, alphanum0, alphanum1, char, crlf, digit0, digit1, float_literal, hex_digit0,
    hex_digit1, int_literal, line_ending, multispace0, multispace1, newline, none_of,
    not_line_ending, oct_digit0, oct_digit1, one_of, satisfy, space0, space1, tab, tag_no_case,
};
pub use atomic::Atomic;
pub use conditional::{Conditional, conditional};
pub use consumed::{Consumed, ConsumedExt, Recognize, consumed, recognize};
pub use count::{Count, Fill, MAX_PREALLOC, count, fill};
pub use delimited::delimited;
pub use error::{Error, ErrorKind, Location, PResult};
pub use flat_map::{FlatMap, flat_map};
pub use fold::{Fold, fold_many_bounded, fold_many0, fold_many1};
pub use generic::{
    is_a, is_not, tag, take, take_till, take_till1, take_until, take_until1, take_while,
    take_while_bounded, take_while1,
};
pub use iter::{ParserIterator, pariter};
pub use lazy::{Lazy, lazy};
pub use length::{LengthCount, LengthData, LengthValue, length_count, length_data, length_value};
pub use many::{Many, ManyCount, many_bounded, many0, many0_count, many1, many1_count};
pub use many_till::{ManyTill, many_till};
pub use map::{Map, MapExt, map};
pub use map_err::{MapErrExt, ignore_kind, map_err, map_external, map_kind};
pub use map_parser::{MapParser, map_parser};
pub use map_res::{MapRes, map_res};
pub use multiple::{Multiple, Sequential, multiple};
pub use negate::{Negate, NegateExt, negate};
pub use optional::{Optional, OptionalExt, optional};
pub use pair::{PairExt, pair};
pub use parser::{FromFn, Parser, from_fn};
pub use peek::{Peek, peek};
pub use preceded::preceded;
pub use rest::{Eof, Rest, RestLen, eof, rest, rest_len};
pub use separated_pair::separated_pair;
pub use sequence::Sequence;
pub use terminated::terminated;
pub use value::{Fail, Success, Value, fail, noerr_value, success};
pub use verify::{Verify, VerifyExt, verify};
