//! Lexer for the Lexa toy language.
//!
//! Drives the `lexa_lexer_core` automaton over a whole source text and
//! collects the result: an ordered token list terminated by an
//! end-of-input token, plus an ordered list of recoverable [`LexError`]s.
//!
//! ```text
//! let output = lexa_lexer::scan("int x = 5;");
//! assert_eq!(output.tokens.len(), 6); // int, x, =, 5, ;, EOF
//! assert!(!output.has_errors());
//! ```
//!
//! Scanning never fails: every problem is reported as a [`LexError`] value
//! and scanning continues to the end of the input.

mod config;
pub mod lex_error;
mod scanner;
mod token;

pub use config::ScanConfig;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::{ScanOutput, Scanner};
pub use token::{Token, TokenKind, EOF_LEXEME};

/// Scan `source` with the default configuration.
pub fn scan(source: &str) -> ScanOutput<'_> {
    Scanner::new().scan(source)
}
