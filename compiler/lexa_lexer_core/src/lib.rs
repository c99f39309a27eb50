//! Low-level scanning automaton for the Lexa toy language.
//!
//! This crate owns the pieces of the lexer that have real algorithmic
//! content and nothing else:
//!
//! - [`tables`]: reserved words, operators, compound operators, delimiters
//!   and the character predicates built on them.
//! - [`Cursor`]: a copyable cursor over source text that reports a virtual
//!   whitespace sentinel one position past the end.
//! - [`Automaton`]: the scanning state record and its pure
//!   [`step`](Automaton::step) function.
//!
//! The automaton produces raw, span-based output ([`RawToken`],
//! [`RawError`]). Turning spans into lexemes, tagging tokens and collecting
//! the scan result happens in `lexa_lexer`.

mod automaton;
mod cursor;
pub mod tables;
mod tag;

pub use automaton::{Automaton, Emit, Mode, Transition};
pub use cursor::{Cursor, SENTINEL};
pub use tag::{RawError, RawErrorKind, RawTag, RawToken};
