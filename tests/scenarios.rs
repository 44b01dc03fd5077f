//! End-to-end scenarios over text, bytes and token streams

use nibble::{
    Error, ErrorKind, MapErrExt, MapExt, OptionalExt, PResult, Parser, all_consuming, alpha1, alt,
    char, delimited, digit1, eof, float_literal, from_fn, int_literal, length_data, length_value,
    many_till, many0, many1, map_res, multiple, multispace0, noerr_value, one_of, pariter, preceded,
    satisfy, separated_pair, tag, take, take_while1, terminated,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_tag_prefix() {
    assert_eq!(tag("Hello").parse("Hello, World!"), Ok((", World!", "Hello")));
}

#[test]
fn test_take_exact_count() {
    assert_eq!(take(6).parse("1234567"), Ok(("7", "123456")));
    assert_eq!(take(6).parse("short"), Err(Error::new("short", ErrorKind::Eof)));
}

#[test]
fn test_alt_surfaces_last_error() {
    init_tracing();
    let parser = alt((alpha1(), digit1()));
    assert_eq!(parser.parse("123456"), Ok(("", "123456")));
    assert_eq!(parser.parse(" "), Err(Error::new(" ", ErrorKind::Digit)));
}

#[test]
fn test_many1_of_tag() {
    let parser = many1(tag("abc"));
    assert_eq!(parser.parse("abcabc"), Ok(("", vec!["abc", "abc"])));
    assert!(parser.parse("123123").is_err());
}

#[test]
fn test_length_value_block() {
    let parser = length_value(int_literal(), tag("abc"));
    assert_eq!(parser.parse("3abcefg"), Ok(("efg", "abc")));
}

#[test]
fn test_number_literals() {
    assert_eq!(int_literal().parse("100_000_000_000"), Ok(("", 100_000_000_000)));
    assert_eq!(float_literal().parse("3.14e-10"), Ok(("", 3.14e-10)));
}

#[derive(Debug, Clone, PartialEq)]
enum Setting<'a> {
    Number(f64),
    Word(&'a str),
    Flag(bool),
}

fn setting_value(input: &str) -> PResult<&str, Setting<'_>> {
    alt((
        noerr_value(Setting::Flag(true), tag("on")),
        noerr_value(Setting::Flag(false), tag("off")),
        float_literal().map(Setting::Number),
        alpha1().map(Setting::Word),
    ))
    .parse(input)
}

fn setting(input: &str) -> PResult<&str, (&str, Setting<'_>)> {
    delimited(
        multispace0(),
        separated_pair(alpha1(), delimited(multispace0(), char('='), multispace0()), from_fn(setting_value)),
        multispace0(),
    )
    .parse(input)
}

#[test]
fn test_settings_file() {
    let text = "depth = 3\nname = nibble\n  verbose=on\nratio = 0.5\n";
    let parser = all_consuming(many0(from_fn(setting)));
    assert_eq!(
        parser.parse(text),
        Ok((
            "",
            vec![
                ("depth", Setting::Number(3.0)),
                ("name", Setting::Word("nibble")),
                ("verbose", Setting::Flag(true)),
                ("ratio", Setting::Number(0.5)),
            ]
        ))
    );
}

#[test]
fn test_settings_file_error_report() {
    let text = "depth = 3\nname = ?\n";
    let error = all_consuming(many0(from_fn(setting))).parse(text).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Eof);
    let location = error.location(text);
    assert_eq!((location.line, location.column), (1, 0));
    assert!(error.report(text).contains("^--- here"));
}

#[test]
fn test_signed_list() {
    let sign = one_of("+-").optional().map(|sign| if sign == Some('-') { -1 } else { 1 });
    let signed = multiple((sign, int_literal())).map(|(sign, value): (i64, i64)| sign * value);
    let list = delimited(char('['), many0(terminated(signed, char(',').optional())), char(']'));
    assert_eq!(list.parse("[1,-2,+3]"), Ok(("", vec![1, -2, 3])));
}

#[test]
fn test_block_comment() {
    let comment = preceded(tag("/*"), many_till(take(1), tag("*/")));
    let (remaining, (body, _)) = comment.parse("/* note */x = 1").unwrap();
    assert_eq!(body.concat(), " note ");
    assert_eq!(remaining, "x = 1");
}

#[test]
fn test_map_res_parses_hex() {
    let hex = map_res(take_while1(|ch: char| ch.is_ascii_hexdigit()), |digits: &str| {
        u32::from_str_radix(digits, 16)
    });
    assert_eq!(hex.parse("ff;"), Ok((";", 255)));
}

fn u16_be(input: &[u8]) -> PResult<&[u8], u16> {
    take(2)
        .map(|bytes: &[u8]| u16::from_be_bytes([bytes[0], bytes[1]]))
        .parse(input)
}

#[test]
fn test_binary_frames() {
    let data: &[u8] = &[0, 2, b'h', b'i', 0, 3, b'y', b'o', b'u', 0];
    let frames: Vec<&[u8]> = pariter(data, length_data(from_fn(u16_be))).collect();
    assert_eq!(frames, vec![&b"hi"[..], &b"you"[..]]);
}

#[test]
fn test_binary_magic_header() {
    let data: &[u8] = b"NIB\x01payload";
    let header = terminated(tag(&b"NIB"[..]), char(1u8));
    assert_eq!(header.parse(data), Ok((&b"payload"[..], &b"NIB"[..])));
    assert_eq!(
        header.parse(&b"ZIP\x01"[..]),
        Err(Error::new(&b"ZIP\x01"[..], ErrorKind::Tag))
    );
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Let,
    Ident(&'static str),
    Equals,
    Number(i64),
    Semi,
}

#[test]
fn test_token_stream() {
    let tokens = [
        Token::Let,
        Token::Ident("x"),
        Token::Equals,
        Token::Number(7),
        Token::Semi,
        Token::Let,
        Token::Ident("y"),
        Token::Equals,
        Token::Number(9),
        Token::Semi,
    ];

    let ident = satisfy(|token: Token| matches!(token, Token::Ident(_))).map(|token: Token| match token {
        Token::Ident(name) => name,
        _ => "",
    });
    let number = satisfy(|token: Token| matches!(token, Token::Number(_))).map(|token: Token| match token {
        Token::Number(value) => value,
        _ => 0,
    });
    let binding = delimited(
        char(Token::Let),
        separated_pair(ident, char(Token::Equals), number),
        char(Token::Semi),
    );
    let program = terminated(many0(binding), eof());

    let (remaining, bindings) = program.parse(&tokens[..]).unwrap();
    assert!(remaining.is_empty());
    assert_eq!(bindings, vec![("x", 7), ("y", 9)]);
}

#[test]
fn test_token_stream_error_kind() {
    let tokens = [Token::Let, Token::Equals];
    let parser = preceded(char(Token::Let), satisfy(|token: Token| matches!(token, Token::Ident(_))))
        .map_kind(ErrorKind::Verify);
    assert_eq!(
        parser.parse(&tokens[..]),
        Err(Error::new(&tokens[1..], ErrorKind::Verify))
    );
}
