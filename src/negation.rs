//! # negation.rs
//!
//! Rewrites unary minus into ordinary binary subtraction.
//!
//! A `-` is unary when it starts the expression or follows anything that
//! does not close an operand (an operator, `(`, `,` or a function keyword).
//! The negated operand is wrapped as `(0 - operand)`:
//!
//! * `-5` becomes `(0-5)`,
//! * `-(expr)` becomes `(0-(expr))`,
//! * `-f(x)` becomes `(0-f(x))`.
//!
//! After the rewrite the later phases never see a unary operator.

use crate::error::{Parenthesis, ParseError};
use crate::operators::Operator;
use crate::token::{self, Token, Tokens};

/// Finds the `)` closing the parenthesis at `open`.
///
/// # Errors
///
/// [`ParseError::UnmatchedParenthesis`] if `open` is not a `(` or the group
/// is never closed.
fn find_closing_paren(tokens: &[Token], open: usize) -> Result<usize, ParseError>
{
    if tokens.get(open) != Some(&Token::LParen) {
        return Err(ParseError::UnmatchedParenthesis(Parenthesis::Left));
    }

    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx);
                }
            },
            _ => (),
        }
    }

    Err(ParseError::UnmatchedParenthesis(Parenthesis::Left))
}

/// Rewrites every unary minus in `tokens` into a subtraction from zero.
///
/// # Errors
///
/// * [`ParseError::InvalidNegationContext`] if a unary `-` is not followed by
///   a number, `(` or a function keyword. `position` is the index of the `-`
///   in the sequence passed in.
/// * [`ParseError::UnmatchedParenthesis`] if the negated group or argument
///   list is never closed.
pub fn rewrite(mut tokens: Tokens) -> Result<Tokens, ParseError> {
    // input index of every token, `None` for inserted ones
    let mut origins: Vec<Option<usize>> = (0..tokens.len()).map(Some).collect();
    let mut rewrites = 0;
    let mut idx = 0;

    while idx < tokens.len() {
        let is_unary = tokens[idx] == Token::Operator(Operator::Sub)
            && (idx == 0 || !tokens[idx - 1].ends_operand());
        if !is_unary {
            idx += 1;
            continue;
        }

        let close = match tokens.get(idx + 1) {
            Some(Token::Number(_)) => idx + 1,
            Some(Token::LParen) => find_closing_paren(&tokens, idx + 1)?,
            Some(Token::Function(_)) => find_closing_paren(&tokens, idx + 2)?,
            _ => {
                let position = origins.get(idx).copied().flatten().unwrap_or(idx);
                return Err(ParseError::InvalidNegationContext { position });
            },
        };

        tokens.insert(close + 1, Token::RParen);
        tokens.insert(idx, Token::Number(0.0));
        tokens.insert(idx, Token::LParen);
        origins.insert(close + 1, None);
        origins.insert(idx, None);
        origins.insert(idx, None);
        rewrites += 1;

        // resume on the negated operand, so nested negations are seen too
        idx += 3;
    }

    log::debug!("rewrote {} negation(s): {}", rewrites, token::join(&tokens));
    Ok(tokens)
}
