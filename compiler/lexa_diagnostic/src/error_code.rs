//! Error codes for all scanner diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E0001`). Used for
//! `--explain` lookups and documentation.

use std::fmt;

/// Error codes for all scanner diagnostics.
///
/// Format: E#### where the first digit is the phase. Lexa only has a
/// lexical phase, so every code lives in E0xxx.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unrecognized character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Unterminated block comment
    E0003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E0003];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
        }
    }

    /// One-line title, matching the heading of the code's documentation.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "Unrecognized Character",
            ErrorCode::E0002 => "Unterminated String",
            ErrorCode::E0003 => "Unterminated Block Comment",
        }
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
