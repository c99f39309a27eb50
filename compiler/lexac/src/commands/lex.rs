//! The `lex` command: scan a source file and print its tokens.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use lexa_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lexa_lexer::{ScanOutput, Scanner};
use tracing::debug;

use super::{LexOptions, Status};
use crate::problem::{count_by_severity, render_lex_errors};
use crate::render::{write_json, write_table, OutputFormat};
use crate::source::{load_source, prompt_for_path};

/// Printed after the token table when the scan reported nothing.
pub const CLEAN_SCAN_MESSAGE: &str = "lexical analysis completed without errors";

/// Load, scan and render the file named by `options`, prompting for a path
/// on stdin when none was given.
pub fn lex_file(options: &LexOptions) -> Status {
    let Some(path) = resolve_path(options) else {
        return Status::Failure;
    };

    let source = match load_source(&path) {
        Ok(source) => source,
        Err(err) => {
            debug!(path = %err.path().display(), "source not loaded");
            eprintln!("error: {err}");
            return Status::Failure;
        }
    };

    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
    let mut out = io::stdout().lock();

    match lex_source(&source, options, &mut out, &mut emitter) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: cannot write output: {err}");
            Status::Failure
        }
    }
}

fn resolve_path(options: &LexOptions) -> Option<PathBuf> {
    if let Some(path) = &options.path {
        return Some(path.clone());
    }
    match prompt_for_path(&mut io::stdin().lock(), &mut io::stdout()) {
        Ok(Some(path)) => Some(path),
        Ok(None) => {
            eprintln!("error: no source file given");
            None
        }
        Err(err) => {
            eprintln!("error: cannot read the source path: {err}");
            None
        }
    }
}

/// Scan `source` with the configuration `options` asks for and report the
/// result.
pub fn lex_source<W: Write, E: DiagnosticEmitter>(
    source: &str,
    options: &LexOptions,
    out: &mut W,
    emitter: &mut E,
) -> io::Result<Status> {
    let output = Scanner::with_config(options.scan_config()).scan(source);
    report_scan(&output, options.format, out, emitter)
}

/// Render a finished scan.
///
/// Table output goes to `out` and diagnostics through `emitter`, followed
/// by a summary. JSON output carries both tokens and diagnostics in one
/// document on `out`.
pub fn report_scan<W: Write, E: DiagnosticEmitter>(
    output: &ScanOutput<'_>,
    format: OutputFormat,
    out: &mut W,
    emitter: &mut E,
) -> io::Result<Status> {
    let diagnostics = render_lex_errors(&output.errors);

    match format {
        OutputFormat::Table => {
            write_table(out, &output.tokens)?;
            if diagnostics.is_empty() {
                writeln!(out, "{CLEAN_SCAN_MESSAGE}")?;
            } else {
                out.flush()?;
                emitter.emit_all(&diagnostics);
                let (errors, warnings) = count_by_severity(&diagnostics);
                emitter.emit_summary(errors, warnings);
                emitter.flush();
            }
        }
        OutputFormat::Json => write_json(out, &output.tokens, &diagnostics)?,
    }
    out.flush()?;

    Ok(if diagnostics.is_empty() {
        Status::Clean
    } else {
        Status::Diagnostics
    })
}
