use pretty_assertions::assert_eq;

use super::*;
use crate::{scan, LexErrorKind};

use crate::TokenKind::{
    BooleanLiteral, Comment, CompoundOperator, Delimiter, EndOfInput, FloatLiteral, HexLiteral,
    Identifier, IntegerLiteral, Operator, ReservedWord, StringLiteral,
};

/// Helper: `(kind, lexeme)` for every token, end-of-input included.
fn pairs<'a>(output: &'a ScanOutput<'_>) -> Vec<(TokenKind, &'a str)> {
    output
        .tokens
        .iter()
        .map(|tok| (tok.kind, tok.lexeme.as_ref()))
        .collect()
}

/// Helper: `(kind, lexeme)` without the end-of-input token.
fn body<'a>(output: &'a ScanOutput<'_>) -> Vec<(TokenKind, &'a str)> {
    let mut pairs = pairs(output);
    assert_eq!(pairs.pop(), Some((EndOfInput, "EOF")));
    pairs
}

// ─── Scenarios ─────────────────────────────────────────────────

#[test]
fn declaration_statement() {
    assert_eq!(
        pairs(&scan("int x = 5;")),
        vec![
            (ReservedWord, "int"),
            (Identifier, "x"),
            (Operator, "="),
            (IntegerLiteral, "5"),
            (Delimiter, ";"),
            (EndOfInput, "EOF"),
        ]
    );
}

#[test]
fn compound_operators_and_true() {
    assert_eq!(
        body(&scan("x == 10 && true")),
        vec![
            (Identifier, "x"),
            (CompoundOperator, "=="),
            (IntegerLiteral, "10"),
            (CompoundOperator, "&&"),
            (ReservedWord, "true"),
        ]
    );
}

#[test]
fn hex_literal() {
    assert_eq!(body(&scan("0xFF")), vec![(HexLiteral, "0xFF")]);
}

#[test]
fn unterminated_string_reports_and_drops_lexeme() {
    let output = scan("\"abc\n");
    assert_eq!(
        output.errors,
        vec![LexError::new(1, LexErrorKind::UnterminatedString)]
    );
    assert!(output.tokens.iter().all(|tok| tok.kind != StringLiteral));
    assert_eq!(output.final_line(), 2);
}

#[test]
fn unrecognized_character() {
    let output = scan("@");
    assert_eq!(
        output.errors,
        vec![LexError::new(1, LexErrorKind::UnrecognizedCharacter('@'))]
    );
    assert_eq!(output.kinds(), vec![EndOfInput]);
}

#[test]
fn line_comment_then_declaration() {
    let output = scan("// hello\nint y;");
    assert_eq!(
        output
            .tokens
            .iter()
            .map(|tok| (tok.kind, tok.lexeme.as_ref(), tok.line))
            .collect::<Vec<_>>(),
        vec![
            (Comment, " hello", 1),
            (ReservedWord, "int", 2),
            (Identifier, "y", 2),
            (Delimiter, ";", 2),
            (EndOfInput, "EOF", 2),
        ]
    );
}

// ─── Classification ────────────────────────────────────────────

#[test]
fn true_and_false_are_reserved_not_boolean() {
    // Both are listed as reserved words, and reserved membership is tested
    // before the boolean check, so BooleanLiteral is never produced here.
    assert_eq!(
        body(&scan("true false")),
        vec![(ReservedWord, "true"), (ReservedWord, "false")]
    );
    assert!(!scan("true false").kinds().contains(&BooleanLiteral));
}

#[test]
fn every_reserved_word() {
    for word in lexa_lexer_core::tables::RESERVED_WORDS {
        assert_eq!(body(&scan(word)), vec![(ReservedWord, *word)]);
    }
}

#[test]
fn identifiers_with_digits_and_underscores() {
    assert_eq!(
        body(&scan("_a1 b_2 iffy")),
        vec![(Identifier, "_a1"), (Identifier, "b_2"), (Identifier, "iffy")]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        body(&scan("7 3.5 2. 0x1aF 0X")),
        vec![
            (IntegerLiteral, "7"),
            (FloatLiteral, "3.5"),
            (FloatLiteral, "2."),
            (HexLiteral, "0x1aF"),
            (HexLiteral, "0X"),
        ]
    );
}

#[test]
fn signs_are_separate_operators() {
    assert_eq!(
        body(&scan("-5")),
        vec![(Operator, "-"), (IntegerLiteral, "5")]
    );
}

#[test]
fn delimiters_never_merge() {
    assert_eq!(
        body(&scan("(){}[];,:.")),
        "(){}[];,:."
            .char_indices()
            .map(|(i, _)| (Delimiter, &"(){}[];,:."[i..=i]))
            .collect::<Vec<_>>()
    );
}

#[test]
fn non_compound_operator_runs_are_singles() {
    assert_eq!(
        body(&scan("a=-b")),
        vec![
            (Identifier, "a"),
            (Operator, "="),
            (Operator, "-"),
            (Identifier, "b"),
        ]
    );
}

#[test]
fn strings_and_block_comments() {
    assert_eq!(
        body(&scan("s = \"hi there\"; /* note\n * more */ t")),
        vec![
            (Identifier, "s"),
            (Operator, "="),
            (StringLiteral, "hi there"),
            (Delimiter, ";"),
            (Comment, " note * more "),
            (Identifier, "t"),
        ]
    );
}

#[test]
fn block_comment_drops_newlines() {
    let output = scan("/* a\nb */");
    assert_eq!(
        output
            .tokens
            .iter()
            .map(|tok| (tok.kind, tok.lexeme.as_ref(), tok.line))
            .collect::<Vec<_>>(),
        vec![(Comment, " ab ", 2), (EndOfInput, "EOF", 2)]
    );
    assert!(matches!(output.tokens[0].lexeme, Cow::Owned(_)));
}

#[test]
fn single_line_block_comment_borrows() {
    let output = scan("/* a b */ // c");
    assert_eq!(body(&output), vec![(Comment, " a b "), (Comment, " c")]);
    assert!(output
        .tokens
        .iter()
        .all(|tok| matches!(tok.lexeme, Cow::Borrowed(_))));
}

// ─── End of Input ──────────────────────────────────────────────

#[test]
fn empty_source_is_just_eof() {
    let output = scan("");
    assert_eq!(output.kinds(), vec![EndOfInput]);
    assert_eq!(output.final_line(), 1);
    assert!(!output.has_errors());
}

#[test]
fn eof_line_counts_newlines() {
    assert_eq!(scan("a\nb\n\n").final_line(), 4);
}

#[test]
fn line_comment_at_eof_is_kept() {
    assert_eq!(body(&scan("x // done")), vec![(Identifier, "x"), (Comment, " done")]);
}

#[test]
fn unterminated_block_comment_is_reported() {
    let output = scan("a\n/* open\nstill open");
    assert_eq!(
        output.errors,
        vec![LexError::new(2, LexErrorKind::UnterminatedComment)]
    );
    assert_eq!(output.kinds(), vec![Identifier, EndOfInput]);
    assert_eq!(output.final_line(), 3);
}

#[test]
fn unterminated_block_comment_can_be_silenced() {
    let scanner = Scanner::with_config(ScanConfig::new().with_unterminated_comment_reports(false));
    let output = scanner.scan("/* open");
    assert!(!output.has_errors());
    assert_eq!(output.kinds(), vec![EndOfInput]);
}

#[test]
fn unterminated_string_at_eof() {
    let output = scan("x = \"abc");
    assert_eq!(
        output.errors,
        vec![LexError::new(1, LexErrorKind::UnterminatedString)]
    );
}

// ─── Configuration & Reuse ─────────────────────────────────────

#[test]
fn automaton_tags_recorded_by_default() {
    let output = scan("x;");
    let tags: Vec<_> = output.tokens.iter().map(|tok| tok.automaton_tag).collect();
    assert_eq!(tags, vec![Some("q2"), Some("q0"), Some("q12")]);
}

#[test]
fn automaton_tags_can_be_disabled() {
    let scanner = Scanner::with_config(ScanConfig::new().with_automaton_tags(false));
    let output = scanner.scan("x;");
    assert!(output.tokens.iter().all(|tok| tok.automaton_tag.is_none()));
}

#[test]
fn scanner_is_reusable_without_leaking_state() {
    let scanner = Scanner::new();
    let first = scanner.scan("\"open\n@\n");
    let second = scanner.scan("ok");
    assert_eq!(first.errors.len(), 2);
    assert!(second.errors.is_empty());
    assert_eq!(second.final_line(), 1);
    assert_eq!(second.kinds(), vec![Identifier, EndOfInput]);
}

#[test]
fn errors_keep_scanning() {
    let output = scan("a @ b $ c");
    assert_eq!(output.errors.len(), 2);
    assert_eq!(output.kinds(), vec![Identifier, Identifier, Identifier, EndOfInput]);
}

// ─── Property Tests ────────────────────────────────────────────

mod proptest_scanner {
    use super::super::Scanner;
    use crate::TokenKind;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whitespace_only_yields_only_eof(source in "[ \t\r\n]{0,40}") {
            let output = Scanner::new().scan(&source);
            prop_assert_eq!(output.kinds(), vec![TokenKind::EndOfInput]);
            let newlines = source.matches('\n').count() + 1;
            prop_assert_eq!(output.final_line() as usize, newlines);
        }

        #[test]
        fn identifier_shaped_words_classify(word in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
            let output = Scanner::new().scan(&word);
            let expected = if lexa_lexer_core::tables::is_reserved_word(&word) {
                TokenKind::ReservedWord
            } else {
                TokenKind::Identifier
            };
            prop_assert_eq!(output.kinds(), vec![expected, TokenKind::EndOfInput]);
            prop_assert_eq!(output.tokens[0].lexeme.as_ref(), word.as_str());
        }

        #[test]
        fn digit_runs_are_integers_or_floats(
            int in "[1-9][0-9]{0,8}",
            frac in proptest::option::of("[0-9]{0,4}"),
        ) {
            let source = match &frac {
                Some(frac) => format!("{int}.{frac}"),
                None => int.clone(),
            };
            let expected = if frac.is_some() {
                TokenKind::FloatLiteral
            } else {
                TokenKind::IntegerLiteral
            };
            let output = Scanner::new().scan(&source);
            prop_assert_eq!(output.kinds(), vec![expected, TokenKind::EndOfInput]);
            prop_assert_eq!(output.tokens[0].lexeme.as_ref(), source.as_str());
        }

        #[test]
        fn hex_prefix_and_digits(x in "[xX]", digits in "[0-9a-fA-F]{0,8}") {
            let source = format!("0{x}{digits}");
            let output = Scanner::new().scan(&source);
            prop_assert_eq!(output.kinds(), vec![TokenKind::HexLiteral, TokenKind::EndOfInput]);
        }

        #[test]
        fn eof_last_and_lines_monotonic(source in "[a-z0-9 \n+=<>!&|;(){}.\"/*@]{0,80}") {
            let output = Scanner::new().scan(&source);
            let last = output.tokens.last().map(|tok| tok.kind);
            prop_assert_eq!(last, Some(TokenKind::EndOfInput));
            prop_assert_eq!(
                output.tokens.iter().filter(|tok| tok.kind.is_eof()).count(),
                1
            );
            for pair in output.tokens.windows(2) {
                prop_assert!(pair[0].line <= pair[1].line);
            }
            // Every newline is counted exactly once.
            let newlines = u32::try_from(source.matches('\n').count()).unwrap_or(u32::MAX);
            prop_assert_eq!(output.final_line(), newlines + 1);
        }
    }
}
