//! rpn.rs
//!
//! Converts an infix token sequence into Reverse Polish Notation (RPN)
//! using the Shunting-yard algorithm. The implementation handles parentheses,
//! commas (for function arguments), function keywords and the postfix
//! factorial.
//!
//! An incoming operator pops every stacked operator of greater *or equal*
//! precedence, so all binary operators associate to the left, `^` included.

use crate::error::{Parenthesis, ParseError};
use crate::operators::Operator;
use crate::token::{self, Token, Tokens};

/// Handles the case when a right parenthesis `)` is encountered.
///
/// Pops tokens from the stack and pushes them into the RPN output until a left
/// parenthesis `(` is found. If a function token is found directly before the
/// left parenthesis, it is also pushed to the output.
///
/// # Errors
///
/// Returns an error if no matching left parenthesis is found.
fn make_rpn_case_of_rparen(rpn: &mut Tokens, stack: &mut Tokens) -> Result<(), ParseError> {
    loop {
        match stack.pop() {
            Some(Token::LParen) => {
                if let Some(func @ Token::Function(_)) = stack.last().copied() {
                    stack.pop();
                    rpn.push(func);
                }
                return Ok(());
            },
            Some(token) => rpn.push(token),
            None => return Err(ParseError::UnmatchedParenthesis(Parenthesis::Right)),
        }
    }
}

/// Handles the case when a comma `,` is encountered inside a function argument list.
///
/// Pops tokens from the stack into the RPN output until a left parenthesis `(`
/// is found. The `(` stays on the stack, since it still bounds the remaining
/// arguments.
///
/// # Errors
///
/// Returns an error if no matching left parenthesis is found.
fn make_rpn_case_of_comma(rpn: &mut Tokens, stack: &mut Tokens) -> Result<(), ParseError> {
    loop {
        match stack.last() {
            Some(Token::LParen) => return Ok(()),
            Some(_) => {
                if let Some(token) = stack.pop() {
                    rpn.push(token);
                }
            },
            None => return Err(ParseError::UnmatchedParenthesis(Parenthesis::Right)),
        }
    }
}

/// Handles the case when a binary operator is encountered.
///
/// Pops operators from the stack into the RPN output while the stacked
/// operator has greater or equal precedence. A `(` or a function keyword
/// on the stack stops the popping.
fn make_rpn_case_of_operator(oper: Operator, rpn: &mut Tokens, stack: &mut Tokens) {
    while let Some(&top) = stack.last() {
        let is_barrier = matches!(top, Token::LParen | Token::Function(_));
        if is_barrier || oper.precedence() > top.precedence() {
            break;
        }
        stack.pop();
        rpn.push(top);
    }
    stack.push(Token::Operator(oper));
}

/// Converts an infix token sequence into Reverse Polish Notation (RPN).
///
/// # Arguments
///
/// * `tokens` - Infix tokens, with unary minus already rewritten.
/// * `allow_unclosed_parens` - When `true`, a `(` still open at the end of
///   the input is dropped instead of being reported.
///
/// # Returns
///
/// * `Ok(Tokens)` - The tokens in RPN order, without parentheses or commas.
/// * `Err(ParseError::UnmatchedParenthesis)` - For a `)` or `,` with no open
///   `(`, or (unless allowed) a `(` that is never closed.
pub fn make_rpn(tokens: Tokens, allow_unclosed_parens: bool) -> Result<Tokens, ParseError> {
    let mut rpn = Tokens::with_capacity(tokens.len());
    let mut stack = Tokens::new();

    for token in tokens {
        match token {
            Token::Number(_) |
            Token::Operator(Operator::Fact)
                => rpn.push(token),

            Token::Function(_) |
            Token::LParen
                => stack.push(token),

            Token::RParen
                => make_rpn_case_of_rparen(&mut rpn, &mut stack)?,

            Token::Comma
                => make_rpn_case_of_comma(&mut rpn, &mut stack)?,

            Token::Operator(oper)
                => make_rpn_case_of_operator(oper, &mut rpn, &mut stack),
        }
        log::trace!("rpn: [{}] stack: [{}]", token::join(&rpn), token::join(&stack));
    }

    // Push any remaining stack contents to the RPN output
    while let Some(token) = stack.pop() {
        match token {
            Token::LParen if allow_unclosed_parens => (),
            Token::LParen => return Err(ParseError::UnmatchedParenthesis(Parenthesis::Left)),
            _ => rpn.push(token),
        }
    }

    log::debug!("postfix: {}", token::join(&rpn));
    Ok(rpn)
}
