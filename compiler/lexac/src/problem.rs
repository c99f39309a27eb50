//! Lex-time problem rendering.
//!
//! [`LexError`]s are plain scanner output; this module turns each one into
//! a [`Diagnostic`] with its error code, message, notes and suggestions.

use lexa_diagnostic::{Diagnostic, ErrorCode};
use lexa_lexer::{LexError, LexErrorKind};

/// Render a `LexError` into a `Diagnostic`.
///
/// Unrecognized characters and unterminated strings are errors. A block
/// comment left open at end of input is a warning: everything after it is
/// lost, but the tokens before it are still valid.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let diag = match err.kind {
        LexErrorKind::UnrecognizedCharacter(_) => Diagnostic::error(ErrorCode::E0001)
            .with_suggestion("remove the character, or move it into a string literal or comment"),

        LexErrorKind::UnterminatedString => Diagnostic::error(ErrorCode::E0002)
            .with_note("string literals cannot span lines")
            .with_suggestion("add a closing `\"` before the end of the line"),

        LexErrorKind::UnterminatedComment => Diagnostic::warning(ErrorCode::E0003)
            .with_note("the comment runs to the end of input; nothing after it was scanned")
            .with_suggestion("close the comment with `*/`"),
    };
    diag.with_message(err.message()).with_line(err.line)
}

/// Render every error, preserving order.
pub fn render_lex_errors(errors: &[LexError]) -> Vec<Diagnostic> {
    errors.iter().map(render_lex_error).collect()
}

/// `(errors, warnings)` among `diagnostics`.
pub fn count_by_severity(diagnostics: &[Diagnostic]) -> (usize, usize) {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    (errors, diagnostics.len() - errors)
}
