#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message("unterminated string literal")
        .with_line(7)
        .with_note("string literals cannot span lines")
        .with_suggestion("add a closing `\"` before the end of the line")
}

fn render(colors: ColorMode, f: impl FnOnce(&mut TerminalEmitter<&mut Vec<u8>>)) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, colors, false);
    f(&mut emitter);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(ColorMode::Never, |e| e.emit(&sample_diagnostic()));
    assert!(text.starts_with("error[E0002]: unterminated string literal\n"));
    assert!(text.contains("  --> line 7"));
    assert!(text.contains("  = note: string literals cannot span lines"));
    assert!(text.contains("  = help: add a closing"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, |e| e.emit(&sample_diagnostic()));
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0002"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E0001).with_message("error 1"),
        Diagnostic::warning(ErrorCode::E0003).with_message("warning 1"),
    ];
    let text = render(ColorMode::Never, |e| e.emit_all(&diagnostics));
    assert!(text.contains("error[E0001]: error 1"));
    assert!(text.contains("warning[E0003]: warning 1"));
}

#[test]
fn test_diagnostic_without_line_has_no_arrow() {
    let diag = Diagnostic::error(ErrorCode::E0001).with_message("no line");
    let text = render(ColorMode::Never, |e| e.emit(&diag));
    assert!(!text.contains("-->"));
}

#[test]
fn test_summary_errors_only() {
    let text = render(ColorMode::Never, |e| e.emit_summary(2, 0));
    assert_eq!(text, "error: lexical analysis found 2 errors\n");
}

#[test]
fn test_summary_errors_and_warnings() {
    let text = render(ColorMode::Never, |e| e.emit_summary(1, 1));
    assert_eq!(
        text,
        "error: lexical analysis found 1 error; 1 warning emitted\n"
    );
}

#[test]
fn test_summary_warnings_only() {
    let text = render(ColorMode::Never, |e| e.emit_summary(0, 3));
    assert_eq!(text, "warning: 3 warnings emitted\n");
}

#[test]
fn test_summary_nothing() {
    let text = render(ColorMode::Never, |e| e.emit_summary(0, 0));
    assert!(text.is_empty());
}
