//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals with underscore separators
//! - Operators and punctuation
//! - Newline terminators
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "let in if then else".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::In);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Then);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_booleans() {
    let source = "True False".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Boolean);
    assert_eq!(tokens[0].value, "True");
    assert_eq!(tokens[1].kind, TokenKind::Boolean);
    assert_eq!(tokens[1].value, "False");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_123 _underscore x' CamelCase Truthy".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar_123");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "x'");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].value, "Truthy");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 1_000_000".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "1_000_000");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_negative_number_is_one_token() {
    let source = "-5".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "-5");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_spaced_minus_is_an_operator() {
    let source = "3 - 5".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "5");
}

#[test]
fn test_tokenize_greedy_negative_literal() {
    // The lexer always takes the longest literal match; the parser splits
    // it back apart when an infix operator is expected.
    let source = "3 -5".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "3");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "-5");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_malformed_number_trailing_underscore() {
    let source = "1_".to_string();
    let result = tokenize(source, Some("test.fang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "MalformedNumber");
}

#[test]
fn test_tokenize_malformed_number_double_underscore() {
    let source = "1__2".to_string();
    let result = tokenize(source, Some("test.fang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "MalformedNumber");
}

#[test]
fn test_tokenize_malformed_number_leading_underscore() {
    let source = "_1".to_string();
    let result = tokenize(source, Some("test.fang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "MalformedNumber");
}

#[test]
fn test_tokenize_malformed_number_underscore_after_minus() {
    let source = "-_5".to_string();
    let result = tokenize(source, Some("test.fang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "MalformedNumber");
}

#[test]
fn test_tokenize_operators() {
    let source = "* / + - < <= > >= ==".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Star);
    assert_eq!(tokens[1].kind, TokenKind::Slash);
    assert_eq!(tokens[2].kind, TokenKind::Plus);
    assert_eq!(tokens[3].kind, TokenKind::Dash);
    assert_eq!(tokens[4].kind, TokenKind::Less);
    assert_eq!(tokens[5].kind, TokenKind::LessEquals);
    assert_eq!(tokens[6].kind, TokenKind::Greater);
    assert_eq!(tokens[7].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[8].kind, TokenKind::Equals);
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) , = -> \\".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::Assignment);
    assert_eq!(tokens[4].kind, TokenKind::Arrow);
    assert_eq!(tokens[5].kind, TokenKind::Backslash);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_arrow_before_dash() {
    let source = "a->b".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Arrow);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_newline_is_a_terminator() {
    let source = "a\nb".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Terminator);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_blank_lines_emit_terminators() {
    let source = "a\n\n\nb".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Terminator);
    assert_eq!(tokens[2].kind, TokenKind::Terminator);
    assert_eq!(tokens[3].kind, TokenKind::Terminator);
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  let   x   =   42  ".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_lambda_expression() {
    let source = "\\x -> x + 1".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Backslash);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Arrow);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].kind, TokenKind::Plus);
    assert_eq!(tokens[5].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_let_expression() {
    let source = "let a = 1, b = 2 in a + b".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[8].kind, TokenKind::In);
}

#[test]
fn test_tokenize_unexpected_character() {
    let source = "let x = @".to_string();
    let result = tokenize(source, Some("test.fang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_tokenize_semicolon_is_not_in_the_language() {
    let source = "a;".to_string();
    let result = tokenize(source, Some("test.fang".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_spans() {
    let source = "ab + 12".to_string();
    let tokens = tokenize(source, Some("test.fang".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[1].span.end.0, 4);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 7);
}
