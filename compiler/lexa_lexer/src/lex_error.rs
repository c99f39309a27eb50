//! Lexer error types.
//!
//! Every lexical problem is recoverable: the scanner records a [`LexError`]
//! and keeps going. Errors carry the line they are reported on and a
//! [`LexErrorKind`] whose `Display` is the user-facing message.

use lexa_lexer_core::RawErrorKind;

/// A recoverable lexical problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    /// 1-based line the problem is reported on.
    pub line: u32,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical problem occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token. It is skipped.
    #[error("unrecognized character '{}'", .0.escape_debug())]
    UnrecognizedCharacter(char),
    /// A string literal hit a newline or end of input before its closing `"`.
    /// The partial lexeme is discarded.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A block comment hit end of input before `*/`. Reported at the line
    /// the comment opened on.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

impl LexError {
    pub fn new(line: u32, kind: LexErrorKind) -> Self {
        LexError { line, kind }
    }

    /// The user-facing message, without the line prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<RawErrorKind> for LexErrorKind {
    fn from(kind: RawErrorKind) -> Self {
        match kind {
            RawErrorKind::UnrecognizedCharacter(c) => LexErrorKind::UnrecognizedCharacter(c),
            RawErrorKind::UnterminatedString => LexErrorKind::UnterminatedString,
            RawErrorKind::UnterminatedComment => LexErrorKind::UnterminatedComment,
        }
    }
}
