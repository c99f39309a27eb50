//! Classification tables for the Lexa toy language.
//!
//! All lookups are pure and allocation-free. Membership tests are written
//! as `match` expressions; the slice constants exist for documentation,
//! rendering and tests, and are kept in sync with the matches by the unit
//! tests in `tables/tests.rs`.
//!
//! # Reserved Words
//!
//! `true` and `false` appear both here and in the boolean-literal check.
//! Reserved membership is tested first, so they always classify as
//! [`WordClass::Reserved`]; see [`classify_word`].

/// Reserved words, in declaration order.
pub const RESERVED_WORDS: &[&str] = &[
    "if", "else", "while", "for", "int", "float", "return", "void", "function", "class", "true",
    "false",
];

/// Single-character operators.
pub const OPERATORS: &[char] = &['+', '-', '*', '/', '=', '<', '>', '!', '&', '|', '%', '^'];

/// Two-character compound operators. No other pair is ever merged.
pub const COMPOUND_OPERATORS: &[&str] = &["==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/="];

/// Delimiters. Each is always its own one-character token.
pub const DELIMITERS: &[char] = &['(', ')', '{', '}', '[', ']', ';', ',', ':', '.'];

/// Classification of an identifier-shaped lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
    Reserved,
    Boolean,
    Identifier,
}

/// Classify an identifier-shaped lexeme.
///
/// Total and mutually exclusive: reserved words first, then the boolean
/// literals, then plain identifiers.
#[inline]
pub fn classify_word(text: &str) -> WordClass {
    if is_reserved_word(text) {
        WordClass::Reserved
    } else if is_boolean_literal(text) {
        WordClass::Boolean
    } else {
        WordClass::Identifier
    }
}

/// Look up a reserved word.
///
/// Uses length-bucketing for fast rejection: reserved words are 2-8 chars.
#[inline]
pub fn is_reserved_word(text: &str) -> bool {
    match text.len() {
        2 => text == "if",
        3 => matches!(text, "for" | "int"),
        4 => matches!(text, "else" | "void" | "true"),
        5 => matches!(text, "while" | "float" | "class" | "false"),
        6 => text == "return",
        8 => text == "function",
        _ => false,
    }
}

/// `true` or `false`.
#[inline]
pub fn is_boolean_literal(text: &str) -> bool {
    matches!(text, "true" | "false")
}

#[inline]
pub fn is_operator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|' | '%' | '^'
    )
}

/// Whether `first` followed by `second` forms a compound operator.
#[inline]
pub fn is_compound_operator(first: char, second: char) -> bool {
    match second {
        '=' => matches!(first, '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/'),
        '&' => first == '&',
        '|' => first == '|',
        _ => false,
    }
}

#[inline]
pub fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | ':' | '.')
}

/// ASCII letter or underscore.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ASCII letter, digit or underscore.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `0-9`, `a-f`, `A-F`.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}
