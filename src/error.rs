//! # error.rs
//!
//! Failure taxonomy shared by the lexer and the parser/evaluator.
//!
//! Every phase of the pipeline either completes or stops with one of these
//! errors. Callers that only need a "valid / invalid" answer can treat all
//! variants alike, while tests and diagnostics can match on the exact kind.

use thiserror::Error;

/// Which side of a parenthesis pair could not be matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthesis {
    Left,
    Right,
}

impl std::fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Error produced while splitting text into symbols.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// No symbol pattern matched at `offset` (a byte offset into the input).
    #[error("Unknown symbol '{symbol}' at offset {offset}")]
    UnknownSymbol { offset: usize, symbol: char },
}

/// Error produced while rewriting, reordering or evaluating an expression.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    UnknownSymbol(#[from] LexError),

    /// A unary `-` is followed by something that cannot be negated.
    #[error("Invalid formula: '-' at token {position} must be followed by a number, '(' or a function")]
    InvalidNegationContext { position: usize },

    #[error("Invalid formula: unmatched {0} parenthesis")]
    UnmatchedParenthesis(Parenthesis),

    #[error("Unknown keyword \"{0}\"")]
    UnknownKeyword(String),

    #[error("Function \"{keyword}\" takes {expected} argument(s), but only {found} value(s) are available")]
    TooFewArguments {
        keyword: &'static str,
        expected: usize,
        found: usize,
    },

    /// Factorial operand outside of `[-170, 170]`, or a negative integer.
    #[error("Factorial is not defined for {0}")]
    FactorialOutOfRange(f64),

    #[error("Malformed expression")]
    MalformedExpression,
}
