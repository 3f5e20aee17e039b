//! # expressions
//!
//! `expressions` is a Rust library for evaluating textual infix expressions
//! such as `-sin(0.5) * max(2, 3)^2 + 4!`.
//!
//! ## Overview
//! - Decimal literals, `+ - * / ^`, parentheses and multi-argument functions.
//! - Postfix factorial `!`, extended to real operands with the gamma function.
//! - Implicit unary minus (`-5`, `2*-3`, `-(1+2)`, `-cos(0)`).
//! - Case-insensitive function keywords.
//!
//! Internally, an expression goes through four steps:
//!
//! 1. the lexer cuts the text into symbols,
//! 2. every unary `-` is rewritten into a subtraction from zero,
//! 3. the Shunting-Yard algorithm reorders the symbols into
//!    Reverse Polish Notation (RPN),
//! 4. the RPN sequence is evaluated on a stack of `f64`.
//!
//! Every binary operator is left-associative, exponentiation included, so
//! `2^3^2` is `64`.
//!
//! Nothing is cached between calls and the function table is immutable, so
//! any number of threads may evaluate expressions at the same time.
//!
//! ## Example
//! ```rust
//! use expressions::{evaluate, tokenize};
//!
//! assert_eq!(tokenize("Sqrt(16) + 1").unwrap(), vec!["sqrt", "(", "16", ")", "+", "1"]);
//! assert_eq!(evaluate("sqrt(16) + 1"), Ok(5.0));
//! assert_eq!(evaluate("-5 + 3"), Ok(-2.0));
//! assert!(evaluate("1 +").is_err());
//! ```
//!
//! ## Example: Retrieving All Function Names
//! ```rust
//! let names: Vec<&'static str> = expressions::supported_function_names();
//! assert!(names.contains(&"sinh"));
//! ```
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

pub mod builder;
pub mod error;
pub mod functions;
pub mod lexer;
pub mod operators;
pub mod token;

mod evaluator;
mod negation;
mod rpn;

pub use builder::Builder;
pub use error::{LexError, Parenthesis, ParseError};
pub use functions::{Keyword, Registry};

/// Splits an expression into lower-case symbol strings.
///
/// # Errors
///
/// [`LexError::UnknownSymbol`] for text that is not a number, an operator,
/// a parenthesis, a comma or a function keyword.
///
/// # Example
/// ```rust
/// use expressions::tokenize;
///
/// assert_eq!(tokenize("max(3,7)").unwrap(), vec!["max", "(", "3", ",", "7", ")"]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<String>, LexError>
{
    Builder::new(expression).tokenize()
}

/// Evaluates an infix expression.
///
/// # Errors
///
/// Any [`ParseError`]. A caller that only needs "valid or not" may treat every
/// variant the same way.
///
/// # Example
/// ```rust
/// use expressions::{evaluate, ParseError};
///
/// assert_eq!(evaluate("8/4/2"), Ok(1.0));
/// assert_eq!(evaluate("1 2"), Err(ParseError::MalformedExpression));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, ParseError>
{
    Builder::new(expression).evaluate()
}

/// Returns the names of the built-in functions in lexing order.
pub fn supported_function_names() -> Vec<&'static str>
{
    functions::names()
}

#[cfg(test)]
mod evaluate_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_left_associative_arithmetic() {
        assert_eq!(evaluate("8/4/2"), Ok(1.0));
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("2^3^2"), Ok(64.0));
    }

    #[test]
    fn test_unary_negation() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("3-(-5)"), Ok(8.0));
        assert_eq!(evaluate("-sin(0)"), Ok(0.0));
        assert_eq!(evaluate("-(2+3)"), Ok(-5.0));
        assert_eq!(evaluate("2*-3"), Ok(-6.0));
        assert_eq!(evaluate("2^-1"), Ok(0.5));
        // the operand is wrapped first, so the sign binds tighter than '^'
        assert_eq!(evaluate("-2^2"), Ok(4.0));
        assert_eq!(evaluate("--5"), Err(ParseError::InvalidNegationContext { position: 0 }));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(evaluate("0!"), Ok(1.0));
        assert_eq!(evaluate("5!"), Ok(120.0));
        assert_eq!(evaluate("3!!"), Ok(720.0));
        assert_eq!(evaluate("(1+2)!*2"), Ok(12.0));
        assert!(evaluate("170!").unwrap().is_finite());
        assert_eq!(evaluate("171!"), Err(ParseError::FactorialOutOfRange(171.0)));
        assert_eq!(evaluate("-171!"), Err(ParseError::FactorialOutOfRange(-171.0)));
        // the sign is applied before the factorial, and negative integers are poles
        assert_eq!(evaluate("-3!"), Err(ParseError::FactorialOutOfRange(-3.0)));
        assert_abs_diff_eq!(evaluate("0.5!").unwrap(), 0.886_226_925_452_758, epsilon = 1.0e-12);
    }

    #[test]
    fn test_functions() {
        assert_eq!(evaluate("sqrt(16)"), Ok(4.0));
        assert_eq!(evaluate("max(3,7)"), Ok(7.0));
        assert_eq!(evaluate("min(3,7)"), Ok(3.0));
        assert_abs_diff_eq!(evaluate("degtorad(180)").unwrap(), PI, epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("sinh(1)").unwrap(), 1.0f64.sinh(), epsilon = 1.0e-12);
        assert_abs_diff_eq!(evaluate("2*cos(0)+ln(exp(2))").unwrap(), 4.0, epsilon = 1.0e-12);
        assert_eq!(evaluate("max(1+2, 2*2)"), Ok(4.0));
        assert_eq!(evaluate("abs(-3)"), Ok(3.0));
    }

    #[test]
    fn test_mod_uses_written_argument_order() {
        assert_eq!(evaluate("mod(10, 3)"), Ok(1.0));
        assert_eq!(evaluate("mod(3, 10)"), Ok(3.0));
        assert_eq!(evaluate("mod(-10, 3)"), Ok(-1.0));
        assert_eq!(evaluate("mod(7.5, 2)"), Ok(1.5));
    }

    #[test]
    fn test_keyword_prefix_disambiguation() {
        assert_eq!(tokenize("sinh(1)").unwrap(), vec!["sinh", "(", "1", ")"]);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(evaluate("+"), Err(ParseError::MalformedExpression));
        assert_eq!(evaluate("1 2"), Err(ParseError::MalformedExpression));
        assert_eq!(evaluate(""), Err(ParseError::MalformedExpression));
        assert_eq!(evaluate("sin(1, 2)"), Err(ParseError::MalformedExpression));
        assert_eq!(evaluate("(1+2"), Err(ParseError::UnmatchedParenthesis(Parenthesis::Left)));
        assert_eq!(evaluate("1+2)"), Err(ParseError::UnmatchedParenthesis(Parenthesis::Right)));
        assert_eq!(
            evaluate("max(1)"),
            Err(ParseError::TooFewArguments { keyword: "max", expected: 2, found: 1 })
        );
        assert_eq!(
            evaluate("1 + y"),
            Err(ParseError::UnknownSymbol(LexError::UnknownSymbol { offset: 4, symbol: 'y' }))
        );
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        for expression in ["-sin(0.5) * max(2, 3)^2 + 4!", "DegToRad(180)/.5", "1.25-(-3)", "ln( 10 )"] {
            let tokens = tokenize(expression).unwrap();
            assert_eq!(tokenize(&tokens.join(" ")).unwrap(), tokens, "expression: {}", expression);
        }
    }

    #[test]
    fn test_supported_function_names() {
        let names = supported_function_names();
        for name in ["sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh",
                     "degtorad", "radtodeg", "abs", "sqrt", "max", "min", "floor", "ceiling",
                     "exp", "ln", "log", "mod"] {
            assert!(names.contains(&name), "missing {}", name);
        }
    }

    #[test]
    fn test_concurrent_evaluation() {
        let results: Vec<Result<f64, ParseError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|n| scope.spawn(move || evaluate(&format!("{}! / {}", n, n + 1))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results[0], Ok(1.0));
        assert_eq!(results[3], Ok(1.5));
    }
}
