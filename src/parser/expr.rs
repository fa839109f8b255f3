use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BindingExpr, BooleanExpr, CallExpr, CondExpr, InfixExpr, InfixOp, IntegerExpr,
            LambdaExpr, LetExpr, PrefixExpr, PrefixOp, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    let mut left = parser.get_nud_lookup().get(&token_kind).unwrap()(parser)?;

    // While LED and current BP is greater than BP of current token, continue parsing lhs
    loop {
        // With a finished left operand a negative literal reads as a
        // subtraction: `3 -5` is `3 - 5`, only a bare `-5` is negative.
        if parser.current_token_kind() == TokenKind::Number
            && parser.current_token().value.starts_with('-')
        {
            parser.split_negative_literal();
        }

        let next_bp = *parser
            .get_bp_lookup()
            .get(&parser.current_token_kind())
            .unwrap_or(&BindingPower::Default);
        if next_bp <= bp {
            break;
        }

        let token_kind = parser.current_token_kind();
        if !parser.get_led_lookup().contains_key(&token_kind) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }

        left = parser.get_led_lookup().get(&token_kind).unwrap()(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let raw = parser.current_token().value.clone();

            match raw.replace('_', "").parse::<i64>() {
                Ok(value) => {
                    let token = parser.advance();
                    Ok(Expr::Integer(IntegerExpr {
                        value,
                        span: token.span.clone(),
                    }))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: raw },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Boolean => {
            let token = parser.advance().clone();
            Ok(Expr::Boolean(BooleanExpr {
                value: token.value == "True",
                span: token.span,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.binding_follows() {
        return parse_binding(parser).map(Expr::Binding);
    }

    let token = parser.advance().clone();
    Ok(Expr::Symbol(SymbolExpr {
        name: token.value,
        span: token.span,
    }))
}

/// Parses `name param* = rhs`. Shared by the top-level binding form and
/// the `let` binding list.
pub fn parse_binding(parser: &mut Parser) -> Result<BindingExpr, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    let start = name_token.span.start.clone();

    let mut params: Vec<String> = Vec::new();
    while parser.current_token_kind() == TokenKind::Identifier {
        let param = parser.advance().clone();
        if params.contains(&param.value) {
            return Err(Error::new(
                ErrorImpl::DuplicateParameter { name: param.value },
                param.span.start.clone(),
            ));
        }
        params.push(param.value);
    }

    parser.expect(TokenKind::Assignment)?;

    let rhs = parse_expr(parser, BindingPower::Default)?;
    let end = rhs.get_span().end.clone();

    Ok(BindingExpr {
        name: name_token.value,
        params,
        rhs: Box::new(rhs),
        span: Span { start, end },
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let op = match InfixOp::from_token_kind(operator_token.kind) {
        Some(op) => op,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        op,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: operand.get_span().end.clone(),
        },
        op: PrefixOp::Neg,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance().clone();
    let expr = parse_expr(parser, BindingPower::Default)?;

    let error = Error::new(ErrorImpl::UnclosedParenthesis, open.span.start.clone());
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let open = parser.advance().clone();

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();

            // Trailing comma before the closing parenthesis is permitted.
            if parser.current_token_kind() == TokenKind::CloseParen {
                break;
            }
        }
    }

    let error = Error::new(ErrorImpl::UnclosedParenthesis, open.span.start.clone());
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.last_position(),
        },
        callee: Box::new(left),
        arguments: args,
    }))
}

pub fn parse_let_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    if parser.current_token_kind() == TokenKind::In {
        return Err(Error::new(ErrorImpl::EmptyLetBindingList, start));
    }

    let mut bindings = vec![parse_binding(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        bindings.push(parse_binding(parser)?);
    }

    parser.expect(TokenKind::In)?;

    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Let(LetExpr {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        bindings,
        body: Box::new(body),
    }))
}

pub fn parse_lambda_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    let mut params: Vec<String> = Vec::new();
    while parser.current_token_kind() == TokenKind::Identifier {
        let param = parser.advance().clone();
        if params.contains(&param.value) {
            return Err(Error::new(
                ErrorImpl::DuplicateParameter { name: param.value },
                param.span.start.clone(),
            ));
        }
        params.push(param.value);
    }

    parser.expect(TokenKind::Arrow)?;

    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Lambda(LambdaExpr {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        params,
        body: Box::new(body),
    }))
}

pub fn parse_cond_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Then)?;
    let then_branch = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Else)?;
    let else_branch = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Cond(CondExpr {
        span: Span {
            start,
            end: else_branch.get_span().end.clone(),
        },
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }))
}
