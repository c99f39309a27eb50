//! JSON report.
//!
//! ```text
//! {
//!   "tokens": [{ "kind": "Identifier", "lexeme": "x", "line": 1, "tag": "q2" }],
//!   "diagnostics": [
//!     { "code": "E0001", "severity": "error", "line": 1, "message": "unrecognized character '@'" }
//!   ]
//! }
//! ```

use std::io::{self, Write};

use lexa_diagnostic::Diagnostic;
use lexa_lexer::Token;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    tokens: Vec<TokenRecord<'a>>,
    diagnostics: Vec<DiagnosticRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    tag: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct DiagnosticRecord<'a> {
    code: &'static str,
    severity: String,
    line: Option<u32>,
    message: &'a str,
}

/// Write `tokens` and `diagnostics` as one pretty-printed JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    tokens: &[Token<'_>],
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    let report = Report {
        tokens: tokens
            .iter()
            .map(|tok| TokenRecord {
                kind: tok.kind.as_str(),
                lexeme: &tok.lexeme,
                line: tok.line,
                tag: tok.automaton_tag,
            })
            .collect(),
        diagnostics: diagnostics
            .iter()
            .map(|diag| DiagnosticRecord {
                code: diag.code.as_str(),
                severity: diag.severity.to_string(),
                line: diag.line,
                message: &diag.message,
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
