//! Token model: [`TokenKind`] and [`Token`].

use std::borrow::Cow;
use std::fmt;

use lexa_lexer_core::RawTag;

/// Fixed lexeme of the end-of-input token.
pub const EOF_LEXEME: &str = "EOF";

/// Token classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    ReservedWord,
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    Operator,
    Delimiter,
    StringLiteral,
    Comment,
    CompoundOperator,
    HexLiteral,
    BooleanLiteral,
    EndOfInput,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::StringLiteral,
        TokenKind::Comment,
        TokenKind::CompoundOperator,
        TokenKind::HexLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::EndOfInput,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "ReservedWord",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::FloatLiteral => "FloatLiteral",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Comment => "Comment",
            TokenKind::CompoundOperator => "CompoundOperator",
            TokenKind::HexLiteral => "HexLiteral",
            TokenKind::BooleanLiteral => "BooleanLiteral",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Label of the automaton state that produces this kind, as printed by
    /// earlier versions of the tool. `q11` was never assigned.
    pub fn legacy_tag(self) -> &'static str {
        match self {
            TokenKind::Delimiter => "q0",
            TokenKind::ReservedWord => "q1",
            TokenKind::Identifier => "q2",
            TokenKind::IntegerLiteral => "q3",
            TokenKind::FloatLiteral => "q4",
            TokenKind::Operator => "q5",
            TokenKind::StringLiteral => "q6",
            TokenKind::Comment => "q7",
            TokenKind::CompoundOperator => "q8",
            TokenKind::HexLiteral => "q9",
            TokenKind::BooleanLiteral => "q10",
            TokenKind::EndOfInput => "q12",
        }
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        self == TokenKind::Comment
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        self == TokenKind::EndOfInput
    }
}

impl From<RawTag> for TokenKind {
    fn from(tag: RawTag) -> Self {
        match tag {
            RawTag::ReservedWord => TokenKind::ReservedWord,
            RawTag::Identifier => TokenKind::Identifier,
            RawTag::BooleanLiteral => TokenKind::BooleanLiteral,
            RawTag::IntegerLiteral => TokenKind::IntegerLiteral,
            RawTag::FloatLiteral => TokenKind::FloatLiteral,
            RawTag::HexLiteral => TokenKind::HexLiteral,
            RawTag::Operator => TokenKind::Operator,
            RawTag::CompoundOperator => TokenKind::CompoundOperator,
            RawTag::Delimiter => TokenKind::Delimiter,
            RawTag::StringLiteral => TokenKind::StringLiteral,
            RawTag::Comment | RawTag::BlockComment => TokenKind::Comment,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
///
/// `lexeme` borrows from the scanned source. It is owned only for a block
/// comment that spans lines, whose newlines are not part of the lexeme.
/// The end-of-input token carries [`EOF_LEXEME`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Recognized text (quotes and comment markers excluded).
    pub lexeme: Cow<'src, str>,
    /// 1-based line on which the token was finalized.
    pub line: u32,
    /// Debug label of the producing automaton state, when recorded.
    pub automaton_tag: Option<&'static str>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: impl Into<Cow<'src, str>>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            automaton_tag: None,
        }
    }

    /// The end-of-input token.
    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::EndOfInput, EOF_LEXEME, line)
    }

    /// Attach the legacy automaton tag for this token's kind.
    #[must_use]
    pub fn tagged(mut self) -> Self {
        self.automaton_tag = Some(self.kind.legacy_tag());
        self
    }
}
