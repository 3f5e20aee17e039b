//! # evaluator.rs
//!
//! Evaluates a postfix (RPN) token sequence on a stack of numbers.

use smallvec::SmallVec;

use crate::error::ParseError;
use crate::functions::Registry;
use crate::operators::{factorial, Operator};
use crate::token::Token;

/// Argument count kept inline before spilling to the heap.
const ARITY_THRESH: usize = 2;

/// Evaluates `rpn` and returns the single value left on the stack.
///
/// Function arguments are popped one by one, so the argument slice handed to
/// the registry starts with the last argument written in the expression.
///
/// # Errors
///
/// * [`ParseError::MalformedExpression`] on stack underflow for an operator,
///   or when the stack does not end with exactly one value.
/// * [`ParseError::TooFewArguments`] when a function finds fewer values than
///   its arity.
/// * [`ParseError::FactorialOutOfRange`] from the factorial operator.
/// * [`ParseError::UnknownKeyword`] if `registry` does not know a function.
pub fn evaluate_rpn(rpn: &[Token], registry: &Registry) -> Result<f64, ParseError>
{
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for token in rpn {
        match *token {
            Token::Number(val) => stack.push(val),

            Token::Operator(Operator::Fact) => {
                let x = stack.pop().ok_or(ParseError::MalformedExpression)?;
                stack.push(factorial(x)?);
            },

            Token::Operator(oper) => {
                if stack.len() < 2 {
                    return Err(ParseError::MalformedExpression);
                }
                let r = stack.pop().ok_or(ParseError::MalformedExpression)?;
                let l = stack.pop().ok_or(ParseError::MalformedExpression)?;
                let val = oper.apply(l, r).ok_or(ParseError::MalformedExpression)?;
                stack.push(val);
            },

            Token::Function(keyword) => {
                let name = keyword.name();
                let n = registry.arity(name)?;
                if stack.len() < n {
                    return Err(ParseError::TooFewArguments {
                        keyword: name,
                        expected: n,
                        found: stack.len(),
                    });
                }

                let from = stack.len() - n;
                let args: SmallVec<[f64; ARITY_THRESH]> = stack.drain(from..).rev().collect();
                stack.push(registry.evaluate(name, &args)?);
            },

            // parentheses and commas never survive the conversion to postfix
            Token::LParen | Token::RParen | Token::Comma
                => return Err(ParseError::MalformedExpression),
        }
        log::trace!("{} -> {:?}", token, stack);
    }

    match stack.as_slice() {
        [val] => Ok(*val),
        _ => Err(ParseError::MalformedExpression),
    }
}
