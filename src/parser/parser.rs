//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level unit
//! driver. Expressions are parsed with a Pratt parser: NUD (null
//! denotation) handlers for tokens that can begin an expression and LED
//! (left denotation) handlers for infix and postfix operators, with
//! binding powers deciding precedence.
//!
//! The parser also owns the two disambiguation devices the language
//! needs: in-place splitting of greedily lexed negative literals, and
//! bounded lookahead to tell a binding `f x = e` from a plain identifier.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Unit,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the cursor into it, and the lookup tables for
/// expression parsing.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        let kind = token.kind;
        if kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos + 1 < self.tokens.len() as i32 && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// A LED-registered binding power wins: `Dash` keeps its Additive
    /// power and `OpenParen` its Call power even though both also start
    /// expressions.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns the end position of the most recently consumed token.
    pub fn last_position(&self) -> Position {
        if self.pos == 0 {
            Position(0, Rc::clone(&self.file))
        } else {
            self.tokens[(self.pos - 1) as usize].span.end.clone()
        }
    }

    /// Looks ahead for the binding form `name param* =`.
    ///
    /// Scans the run of consecutive identifier tokens starting at the
    /// cursor; a binding is announced by an `=` directly after the run.
    /// Never descends into nested expressions, so the scan is bounded.
    pub fn binding_follows(&self) -> bool {
        let mut offset = self.pos as usize;
        while self.tokens.get(offset).map(|t| t.kind) == Some(TokenKind::Identifier) {
            offset += 1;
        }
        self.tokens.get(offset).map(|t| t.kind) == Some(TokenKind::Assignment)
    }

    /// Splits a greedily lexed negative literal like `-5` in place into a
    /// `-` operator token followed by the bare literal.
    ///
    /// The lexer always emits the longest integer match; when the parser
    /// has just finished a left operand, the `-` actually belongs to an
    /// infix subtraction, so the token is re-cut here where that one bit
    /// of state is known.
    pub fn split_negative_literal(&mut self) {
        let token = self.tokens[self.pos as usize].clone();
        let split = Position(token.span.start.0 + 1, Rc::clone(&token.span.start.1));

        let dash = Token {
            kind: TokenKind::Dash,
            value: String::from("-"),
            span: Span {
                start: token.span.start.clone(),
                end: split.clone(),
            },
        };
        let literal = Token {
            kind: TokenKind::Number,
            value: token.value[1..].to_string(),
            span: Span {
                start: split,
                end: token.span.end.clone(),
            },
        };

        self.tokens[self.pos as usize] = dash;
        self.tokens.insert((self.pos + 1) as usize, literal);
    }
}

/// Parses a stream of tokens into a compilation unit.
///
/// This is the main entry point for parsing. It creates a parser
/// instance, initializes the lookup tables, and parses newline-separated
/// expressions until EOF. Runs of terminators collapse into a single
/// separator, so blank lines never produce empty expression slots.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root Unit or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Unit, Error>) {
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let mut nodes = vec![];

    while parser.current_token_kind() == TokenKind::Terminator {
        parser.advance();
    }

    while parser.has_tokens() {
        match parse_expr(&mut parser, BindingPower::Default) {
            Ok(expr) => nodes.push(expr),
            Err(error) => return (parser, Err(error)),
        }

        if parser.current_token_kind() == TokenKind::Terminator {
            while parser.current_token_kind() == TokenKind::Terminator {
                parser.advance();
            }
        } else if parser.current_token_kind() != TokenKind::EOF {
            let error = Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a newline between top-level expressions"),
                },
                parser.get_position(),
            );
            return (parser, Err(error));
        }
    }

    let unit = Unit {
        nodes,
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end: parser.last_position(),
        },
    };

    (parser, Ok(unit))
}
