//! The scanning automaton.
//!
//! [`Automaton`] is a small `Copy` record: the current [`Mode`], the byte
//! offset where the pending lexeme starts, the current line, and the line
//! the pending lexeme opened on. [`Automaton::step`] is a pure function of
//! that record and a [`Cursor`] positioned on the next character; it returns
//! a [`Transition`] describing the next record, how many bytes to consume,
//! and at most one [`Emit`].
//!
//! # Design
//!
//! Lexemes are never accumulated into strings. Entering a lexeme mode
//! records its start offset; finalizing it emits a `start..end` span and the
//! caller slices the source. Finalization on a non-matching character
//! consumes nothing, so the same character is reprocessed from `Start`.
//!
//! The cursor's trailing [`SENTINEL`](crate::SENTINEL) flushes identifier,
//! number and operator lexemes. String and comment modes can swallow the
//! sentinel; [`Automaton::finish`] settles them once the cursor is at EOF.

use crate::cursor::Cursor;
use crate::tables::{self, WordClass};
use crate::tag::{RawError, RawErrorKind, RawTag, RawToken};

/// Automaton state. `Start` is both the initial state and the state entered
/// after every completed token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Start,
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    HexLiteral,
    Operator,
    StringLiteral,
    LineComment,
    BlockComment,
}

/// Output of a single transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit {
    Token(RawToken),
    Error(RawError),
}

/// Result of [`Automaton::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a transition must be applied to the cursor and the automaton"]
pub struct Transition {
    /// The automaton record after this step.
    pub next: Automaton,
    /// Bytes to advance the cursor by. Zero means the current character is
    /// reprocessed from the next state.
    pub consumed: usize,
    /// Token or error produced by this step, if any.
    pub emit: Option<Emit>,
}

/// Scanning state record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Automaton {
    mode: Mode,
    /// Byte offset where the pending lexeme starts.
    start: usize,
    /// Current 1-based line.
    line: u32,
    /// Line on which the pending lexeme opened.
    open_line: u32,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// Fresh automaton in `Start` on line 1.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Start,
            start: 0,
            line: 1,
            open_line: 1,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Compute the transition for the character under `cursor`.
    ///
    /// Past EOF there is nothing to consume and the record is returned
    /// unchanged.
    pub fn step(self, cursor: &Cursor<'_>) -> Transition {
        let Some(c) = cursor.current() else {
            return self.hold(None);
        };
        match self.mode {
            Mode::Start => self.start(cursor, c),
            Mode::Identifier => self.identifier(cursor, c),
            Mode::IntegerLiteral => self.integer(cursor, c),
            Mode::FloatLiteral => self.float(cursor, c),
            Mode::HexLiteral => self.hex(cursor, c),
            Mode::Operator => self.operator(cursor, c),
            Mode::StringLiteral => self.string(cursor, c),
            Mode::LineComment => self.line_comment(cursor, c),
            Mode::BlockComment => self.block_comment(cursor, c),
        }
    }

    /// Settle whatever mode is still open once the cursor is at EOF.
    ///
    /// - A line comment is terminated by end of input and emitted.
    /// - A string reports [`RawErrorKind::UnterminatedString`].
    /// - A block comment reports [`RawErrorKind::UnterminatedComment`] at
    ///   the line it opened on, or vanishes when `report_unterminated_comments`
    ///   is off.
    ///
    /// Every other mode has already been flushed by the sentinel.
    pub fn finish(self, cursor: &Cursor<'_>, report_unterminated_comments: bool) -> Option<Emit> {
        match self.mode {
            Mode::LineComment => Some(self.token(RawTag::Comment, cursor.source_len())),
            Mode::StringLiteral => Some(self.error(RawErrorKind::UnterminatedString, self.line)),
            Mode::BlockComment if report_unterminated_comments => {
                Some(self.error(RawErrorKind::UnterminatedComment, self.open_line))
            }
            _ => None,
        }
    }

    // ─── Start ──────────────────────────────────────────────────────

    fn start(self, cursor: &Cursor<'_>, c: char) -> Transition {
        let pos = cursor.pos();

        if c.is_whitespace() {
            let line = if c == '\n' { self.line + 1 } else { self.line };
            return Self { line, ..self }.consume(c, None);
        }

        match c {
            '/' if cursor.peek() == Some('/') => self.enter(Mode::LineComment, pos + 2).skip(2),
            '/' if cursor.peek() == Some('*') => self.enter(Mode::BlockComment, pos + 2).skip(2),
            '"' => self.enter(Mode::StringLiteral, pos + 1).consume(c, None),
            c if tables::is_ident_start(c) => self.enter(Mode::Identifier, pos).consume(c, None),
            c if c.is_ascii_digit() => self.enter(Mode::IntegerLiteral, pos).consume(c, None),
            c if tables::is_operator(c) => self.enter(Mode::Operator, pos).consume(c, None),
            c if tables::is_delimiter(c) => {
                let token = RawToken {
                    tag: RawTag::Delimiter,
                    start: pos,
                    end: pos + c.len_utf8(),
                    line: self.line,
                };
                self.consume(c, Some(Emit::Token(token)))
            }
            _ => {
                let error = self.error(RawErrorKind::UnrecognizedCharacter(c), self.line);
                self.consume(c, Some(error))
            }
        }
    }

    // ─── Words & Numbers ────────────────────────────────────────────

    fn identifier(self, cursor: &Cursor<'_>, c: char) -> Transition {
        if tables::is_ident_continue(c) {
            return self.consume(c, None);
        }
        let tag = match tables::classify_word(cursor.slice(self.start, cursor.pos())) {
            WordClass::Reserved => RawTag::ReservedWord,
            WordClass::Boolean => RawTag::BooleanLiteral,
            WordClass::Identifier => RawTag::Identifier,
        };
        self.finalize(tag, cursor.pos())
    }

    fn integer(self, cursor: &Cursor<'_>, c: char) -> Transition {
        match c {
            '0'..='9' => self.consume(c, None),
            '.' => Self {
                mode: Mode::FloatLiteral,
                ..self
            }
            .consume(c, None),
            'x' | 'X' if cursor.slice(self.start, cursor.pos()) == "0" => Self {
                mode: Mode::HexLiteral,
                ..self
            }
            .consume(c, None),
            _ => self.finalize(RawTag::IntegerLiteral, cursor.pos()),
        }
    }

    /// The fraction may be empty: `1.` is a complete float.
    fn float(self, cursor: &Cursor<'_>, c: char) -> Transition {
        if c.is_ascii_digit() {
            self.consume(c, None)
        } else {
            self.finalize(RawTag::FloatLiteral, cursor.pos())
        }
    }

    /// The digit run may be empty: `0x` is a complete hex literal.
    fn hex(self, cursor: &Cursor<'_>, c: char) -> Transition {
        if tables::is_hex_digit(c) {
            self.consume(c, None)
        } else {
            self.finalize(RawTag::HexLiteral, cursor.pos())
        }
    }

    // ─── Operators ──────────────────────────────────────────────────

    /// The pending lexeme is always exactly one operator character. Either
    /// the current character completes a compound pair, or the single
    /// character is emitted and the current one goes back through `Start`.
    fn operator(self, cursor: &Cursor<'_>, c: char) -> Transition {
        let pos = cursor.pos();
        let first = cursor.slice(self.start, pos).chars().next();
        match first {
            Some(first) if tables::is_compound_operator(first, c) => {
                let token = self.token(RawTag::CompoundOperator, pos + c.len_utf8());
                Self {
                    mode: Mode::Start,
                    ..self
                }
                .consume(c, Some(token))
            }
            _ => self.finalize(RawTag::Operator, pos),
        }
    }

    // ─── Strings & Comments ─────────────────────────────────────────

    /// No escapes, no multi-line strings. The newline that ends an
    /// unterminated string is left for `Start`, which counts it.
    fn string(self, cursor: &Cursor<'_>, c: char) -> Transition {
        match c {
            '"' => {
                let token = self.token(RawTag::StringLiteral, cursor.pos());
                Self {
                    mode: Mode::Start,
                    ..self
                }
                .consume(c, Some(token))
            }
            '\n' => {
                let error = self.error(RawErrorKind::UnterminatedString, self.line);
                Self {
                    mode: Mode::Start,
                    ..self
                }
                .hold(Some(error))
            }
            _ => self.consume(c, None),
        }
    }

    /// The terminating newline is consumed here and excluded from the body.
    fn line_comment(self, cursor: &Cursor<'_>, c: char) -> Transition {
        if c != '\n' {
            return self.consume(c, None);
        }
        let token = self.token(RawTag::Comment, cursor.pos());
        Self {
            mode: Mode::Start,
            line: self.line + 1,
            ..self
        }
        .consume(c, Some(token))
    }

    /// A bare `*` is body text. Newlines advance the line and stay inside the
    /// span; `lexa_lexer` drops them when it builds the lexeme.
    fn block_comment(self, cursor: &Cursor<'_>, c: char) -> Transition {
        match c {
            '*' if cursor.peek() == Some('/') => {
                let token = self.token(RawTag::BlockComment, cursor.pos());
                Self {
                    mode: Mode::Start,
                    ..self
                }
                .skip_with(2, Some(token))
            }
            '\n' => Self {
                line: self.line + 1,
                ..self
            }
            .consume(c, None),
            _ => self.consume(c, None),
        }
    }

    // ─── Helpers ────────────────────────────────────────────────────

    fn enter(self, mode: Mode, start: usize) -> Self {
        Self {
            mode,
            start,
            open_line: self.line,
            ..self
        }
    }

    /// Emit the pending lexeme as `tag`, ending at `end`, without consuming.
    fn finalize(self, tag: RawTag, end: usize) -> Transition {
        let token = self.token(tag, end);
        Self {
            mode: Mode::Start,
            ..self
        }
        .hold(Some(token))
    }

    fn token(self, tag: RawTag, end: usize) -> Emit {
        Emit::Token(RawToken {
            tag,
            start: self.start,
            end,
            line: self.line,
        })
    }

    fn error(self, kind: RawErrorKind, line: u32) -> Emit {
        Emit::Error(RawError { kind, line })
    }

    fn consume(self, c: char, emit: Option<Emit>) -> Transition {
        self.skip_with(c.len_utf8(), emit)
    }

    fn skip(self, bytes: usize) -> Transition {
        self.skip_with(bytes, None)
    }

    fn skip_with(self, bytes: usize, emit: Option<Emit>) -> Transition {
        Transition {
            next: self,
            consumed: bytes,
            emit,
        }
    }

    fn hold(self, emit: Option<Emit>) -> Transition {
        Transition {
            next: self,
            consumed: 0,
            emit,
        }
    }
}
