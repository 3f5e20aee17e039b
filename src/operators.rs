//! # operators.rs
//!
//! Operator kinds, their precedence, and how they are applied to numbers.
//!
//! Every binary operator is left-associative, exponentiation included:
//! `2^3^2` is `(2^3)^2`. Factorial is postfix and extends to real operands
//! through the gamma function.

use num_traits::ToPrimitive;

use crate::error::ParseError;

/// Largest operand whose factorial is a finite `f64`.
pub const FACTORIAL_LIMIT: f64 = 170.0;

/// Operator precedence levels, lowest first.
///
/// Only used for comparison while reordering tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Parentheses, commas and function keywords.
    ParenFuncComma,
    AddSub,
    MultDiv,
    Pow,
    Fact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
    Pow,
    /// Postfix factorial `!`.
    Fact,
}

impl Operator {
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::AddSub,
            Self::Mult | Self::Div => Precedence::MultDiv,
            Self::Pow => Precedence::Pow,
            Self::Fact => Precedence::Fact,
        }
    }

    /// Returns the symbol as written in an expression.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mult => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Fact => "!",
        }
    }

    /// Applies a binary operator to `l` and `r`.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity or NaN.
    /// Returns `None` for the unary factorial.
    pub fn apply(&self, l: f64, r: f64) -> Option<f64> {
        match self {
            Self::Add => Some(l + r),
            Self::Sub => Some(l - r),
            Self::Mult => Some(l * r),
            Self::Div => Some(l / r),
            Self::Pow => Some(l.powf(r)),
            Self::Fact => None,
        }
    }
}

/// Factorial extended to real operands.
///
/// * `0` gives `1`.
/// * A positive integer up to 170 gives its exact running product.
/// * A non-integer in `[-170, 170]` gives `Γ(x + 1)`.
///
/// # Errors
///
/// [`ParseError::FactorialOutOfRange`] for negative integers, values beyond
/// ±170, and non-finite values.
pub fn factorial(x: f64) -> Result<f64, ParseError> {
    if x == 0.0 {
        return Ok(1.0);
    }

    if !x.is_finite() || x.abs() > FACTORIAL_LIMIT {
        return Err(ParseError::FactorialOutOfRange(x));
    }

    if x.fract() != 0.0 {
        return Ok(libm::tgamma(x + 1.0));
    }

    match x.to_u32() {
        Some(n) => Ok((2..=n).fold(1.0, |acc, k| acc * f64::from(k))),
        // negative integers are poles of the gamma function
        None => Err(ParseError::FactorialOutOfRange(x)),
    }
}
