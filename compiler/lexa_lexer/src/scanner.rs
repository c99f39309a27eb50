//! Scan sessions.
//!
//! A [`Scanner`] holds only configuration and can be reused. Every call to
//! [`Scanner::scan`] builds a fresh session (cursor, automaton, output
//! lists), runs the automaton to EOF, settles any mode still open, and
//! appends the end-of-input token. Nothing carries over between scans.

use std::borrow::Cow;

use lexa_lexer_core::{Automaton, Cursor, Emit, RawError, RawTag, RawToken};
use tracing::{debug, trace};

use crate::{LexError, ScanConfig, Token, TokenKind};

/// Result of one scan: ordered tokens and ordered diagnostics.
///
/// The last token is always [`TokenKind::EndOfInput`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

impl ScanOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Line of the end-of-input token, i.e. the final line count.
    pub fn final_line(&self) -> u32 {
        self.tokens.last().map_or(1, |tok| tok.line)
    }

    /// Token kinds in order, end-of-input included.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|tok| tok.kind).collect()
    }
}

/// Reusable scanner.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Scanner with the default [`ScanConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Scanner { config }
    }

    /// Scan the whole of `source`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn scan<'src>(&self, source: &'src str) -> ScanOutput<'src> {
        Session::new(source, self.config).run()
    }
}

/// State of a single scan.
struct Session<'src> {
    cursor: Cursor<'src>,
    automaton: Automaton,
    config: ScanConfig,
    output: ScanOutput<'src>,
}

impl<'src> Session<'src> {
    fn new(source: &'src str, config: ScanConfig) -> Self {
        Session {
            cursor: Cursor::new(source),
            automaton: Automaton::new(),
            config,
            // Rough estimate: one token per five source bytes.
            output: ScanOutput {
                tokens: Vec::with_capacity(source.len() / 5 + 1),
                errors: Vec::new(),
            },
        }
    }

    fn run(mut self) -> ScanOutput<'src> {
        while !self.cursor.is_eof() {
            let transition = self.automaton.step(&self.cursor);
            self.cursor.advance(transition.consumed);
            self.automaton = transition.next;
            if let Some(emit) = transition.emit {
                self.record(emit);
            }
        }

        let settled = self
            .automaton
            .finish(&self.cursor, self.config.report_unterminated_comments);
        if let Some(emit) = settled {
            self.record(emit);
        }

        let eof = Token::eof(self.automaton.line());
        self.push_token(eof);

        debug!(
            tokens = self.output.tokens.len(),
            errors = self.output.errors.len(),
            lines = self.automaton.line(),
            "scan complete"
        );
        self.output
    }

    fn record(&mut self, emit: Emit) {
        match emit {
            Emit::Token(raw) => self.record_token(raw),
            Emit::Error(raw) => self.record_error(raw),
        }
    }

    fn record_token(&mut self, raw: RawToken) {
        let lexeme = lexeme_of(raw.tag, self.cursor.slice(raw.start, raw.end));
        trace!(tag = raw.tag.name(), lexeme = &*lexeme, line = raw.line, "token");
        self.push_token(Token::new(TokenKind::from(raw.tag), lexeme, raw.line));
    }

    fn record_error(&mut self, raw: RawError) {
        let error = LexError::new(raw.line, raw.kind.into());
        trace!(%error, "lex error");
        self.output.errors.push(error);
    }

    fn push_token(&mut self, token: Token<'src>) {
        let token = if self.config.automaton_tags {
            token.tagged()
        } else {
            token
        };
        self.output.tokens.push(token);
    }
}

/// Lexeme for a raw span. Newlines inside a block comment only advance the
/// line; they are not part of the comment text.
fn lexeme_of(tag: RawTag, text: &str) -> Cow<'_, str> {
    if tag == RawTag::BlockComment && text.contains('\n') {
        Cow::Owned(text.replace('\n', ""))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests;
