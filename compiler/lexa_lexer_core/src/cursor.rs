//! Cursor over sentinel-terminated source text.
//!
//! The cursor walks the source one character at a time. One position past
//! the last source byte it reports a virtual [`SENTINEL`] whitespace
//! character, so any identifier, number or operator still in progress when
//! the text runs out is flushed by the ordinary "non-matching character"
//! transition. Once the sentinel has been consumed the cursor is at EOF and
//! [`current()`](Cursor::current) returns `None`.
//!
//! No copy of the source is made: the sentinel exists only in the cursor's
//! view of the text.

/// Virtual character reported at `pos == source_len`.
pub const SENTINEL: char = ' ';

/// Copyable cursor over source text with a virtual trailing sentinel.
///
/// Positions are byte offsets into the source and always fall on a
/// character boundary (the automaton only ever advances by whole
/// characters).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Length of the source in bytes (the sentinel is not counted).
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Current byte position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once the sentinel has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos > self.source.len()
    }

    /// Returns `true` when positioned on the virtual sentinel.
    #[inline]
    pub fn is_at_sentinel(&self) -> bool {
        self.pos == self.source.len()
    }

    /// The character at the current position.
    ///
    /// Returns [`SENTINEL`] at `pos == source_len` and `None` past it.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    /// The character following the current one (one character of lookahead).
    ///
    /// Looking ahead from the last source character yields the sentinel.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let width = self.current()?.len_utf8();
        self.char_at(self.pos + width)
    }

    /// Advance by `bytes`. The caller passes whole character widths.
    #[inline]
    pub fn advance(&mut self, bytes: usize) {
        self.pos += bytes;
    }

    /// Source text between two byte offsets.
    ///
    /// `end` is clamped to the source length, so a span that swallowed the
    /// sentinel never exposes it.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.source.len());
        self.source.get(start..end).unwrap_or_default()
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        let rest = self.source.get(pos..)?;
        Some(rest.chars().next().unwrap_or(SENTINEL))
    }
}
