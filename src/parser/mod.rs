//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Expression parsing (infix ops, application, literals)
//! - Binding-vs-identifier disambiguation via bounded lookahead
//! - Negative-literal-vs-subtraction disambiguation
//! - Newline-separated top-level expression sequencing
//!
//! The parser uses NUD (null denotation) and LED (left denotation)
//! functions for expression parsing with binding power for precedence
//! handling.

pub mod expr;
pub mod lookups;
pub mod parser;
