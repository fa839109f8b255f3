//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.fang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.fang".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "then".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_character_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            token: ";".to_string(),
        },
        Position(0, Rc::new("test.fang".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_malformed_number_error() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            token: "1_".to_string(),
        },
        Position(0, Rc::new("test.fang".to_string())),
    );

    assert_eq!(error.get_error_name(), "MalformedNumber");
}

#[test]
fn test_empty_let_binding_list_error() {
    let error = Error::new(
        ErrorImpl::EmptyLetBindingList,
        Position(0, Rc::new("test.fang".to_string())),
    );

    assert_eq!(error.get_error_name(), "EmptyLetBindingList");
}

#[test]
fn test_duplicate_parameter_error() {
    let error = Error::new(
        ErrorImpl::DuplicateParameter {
            name: "x".to_string(),
        },
        Position(0, Rc::new("test.fang".to_string())),
    );

    assert_eq!(error.get_error_name(), "DuplicateParameter");
    let tip = format!("{}", error.get_tip());
    assert!(tip.contains("x"));
}

#[test]
fn test_unclosed_parenthesis_error() {
    let error = Error::new(
        ErrorImpl::UnclosedParenthesis,
        Position(3, Rc::new("test.fang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnclosedParenthesis");
    assert_eq!(error.get_position().0, 3);
}
