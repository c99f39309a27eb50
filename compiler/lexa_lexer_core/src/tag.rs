//! Raw output of the scanning automaton.
//!
//! A [`RawToken`] is a `(tag, span, line)` triple; the lexeme is recovered
//! by slicing the source. Recoverable problems are [`RawError`] values, not
//! `Result::Err`: the automaton reports them and keeps going.

/// Raw token classification.
///
/// Discriminants are grouped by family so the numeric value reads well in
/// debug dumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Words: 0-2
    ReservedWord = 0,
    Identifier = 1,
    BooleanLiteral = 2,

    // Numbers: 16-18
    IntegerLiteral = 16,
    FloatLiteral = 17,
    HexLiteral = 18,

    // Operators & delimiters: 32-34
    Operator = 32,
    CompoundOperator = 33,
    Delimiter = 34,

    // Text: 48-50
    StringLiteral = 48,
    /// `//` comment.
    Comment = 49,
    /// `/* */` comment. Its span may cover newlines.
    BlockComment = 50,
}

impl RawTag {
    /// Human-readable name for debug output.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::ReservedWord => "reserved word",
            RawTag::Identifier => "identifier",
            RawTag::BooleanLiteral => "boolean literal",
            RawTag::IntegerLiteral => "integer literal",
            RawTag::FloatLiteral => "float literal",
            RawTag::HexLiteral => "hex literal",
            RawTag::Operator => "operator",
            RawTag::CompoundOperator => "compound operator",
            RawTag::Delimiter => "delimiter",
            RawTag::StringLiteral => "string literal",
            RawTag::Comment => "comment",
            RawTag::BlockComment => "block comment",
        }
    }
}

/// A classified lexeme, located by byte span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    /// Byte offset of the first lexeme character.
    pub start: usize,
    /// Byte offset one past the last lexeme character.
    pub end: usize,
    /// 1-based line on which the token was finalized.
    pub line: u32,
}

/// Recoverable problem found while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawError {
    pub kind: RawErrorKind,
    /// 1-based line the problem is reported on.
    pub line: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawErrorKind {
    /// A character that starts no token.
    UnrecognizedCharacter(char),
    /// A string literal reached a newline or end of input before `"`.
    UnterminatedString,
    /// A block comment reached end of input before `*/`.
    UnterminatedComment,
}
