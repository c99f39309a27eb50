//! Tabular token listing.

use std::borrow::Cow;
use std::io::{self, Write};

use lexa_lexer::Token;

const HEADER: [&str; 4] = ["KIND", "LEXEME", "LINE", "TAG"];

/// Shown in the tag column when a token carries no automaton tag.
const NO_TAG: &str = "-";

/// Escape the control characters that would break a table row.
pub fn escape_lexeme(lexeme: &str) -> Cow<'_, str> {
    if !lexeme.contains(|c: char| matches!(c, '\n' | '\t' | '\r')) {
        return Cow::Borrowed(lexeme);
    }
    let mut escaped = String::with_capacity(lexeme.len() + 4);
    for c in lexeme.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Write one header row and one row per token, columns padded to fit.
pub fn write_table<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> io::Result<()> {
    let rows: Vec<[Cow<'_, str>; 4]> = tokens
        .iter()
        .map(|tok| {
            [
                Cow::Borrowed(tok.kind.as_str()),
                escape_lexeme(&tok.lexeme),
                Cow::Owned(tok.line.to_string()),
                Cow::Borrowed(tok.automaton_tag.unwrap_or(NO_TAG)),
            ]
        })
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADER, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

/// The last column is not padded, so rows carry no trailing spaces.
fn write_row<W: Write, S: AsRef<str>>(
    out: &mut W,
    cells: &[S; 4],
    widths: &[usize; 4],
) -> io::Result<()> {
    let [kind, lexeme, line, tag] = cells;
    writeln!(
        out,
        "{:<kw$}  {:<lw$}  {:<nw$}  {}",
        kind.as_ref(),
        lexeme.as_ref(),
        line.as_ref(),
        tag.as_ref(),
        kw = widths[0],
        lw = widths[1],
        nw = widths[2],
    )
}
