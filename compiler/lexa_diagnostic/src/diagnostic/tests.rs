use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("unterminated string")
        .with_line(4)
        .with_note("strings cannot span lines")
        .with_suggestion("add a closing `\"`");

    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "unterminated string");
    assert_eq!(diag.line, Some(4));
    assert_eq!(diag.notes, vec!["strings cannot span lines".to_string()]);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_severity_predicates() {
    let err = Diagnostic::error(ErrorCode::E0001);
    let warn = Diagnostic::warning(ErrorCode::E0003);
    assert!(err.is_error());
    assert!(!err.is_warning());
    assert!(warn.is_warning());
    assert!(!warn.is_error());
}

#[test]
fn test_display_with_line() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("unrecognized character '@'")
        .with_line(3);
    assert_eq!(
        diag.to_string(),
        "error[E0001]: unrecognized character '@' (line 3)"
    );
}

#[test]
fn test_display_without_line() {
    let diag = Diagnostic::warning(ErrorCode::E0003).with_message("unterminated block comment");
    assert_eq!(diag.to_string(), "warning[E0003]: unterminated block comment");
}
