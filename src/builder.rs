//! # builder.rs
//!
//! This module provides a configurable front door to the evaluation pipeline.

use crate::error::{LexError, ParseError};
use crate::functions::Registry;
use crate::lexer::Lexeme;
use crate::token::Tokens;
use crate::{evaluator, lexer, negation, rpn, token};

/// Evaluates one expression with non-default options.
///
/// The free functions [`crate::evaluate`] and [`crate::tokenize`] are
/// shorthands for a `Builder` with every option left at its default.
#[derive(Clone, Debug)]
pub struct Builder
{
    formula: String,
    registry: Registry,
    allow_unclosed_parens: bool,
    blank_value: Option<f64>,
}

impl Builder
{
    /// Creates a new `Builder` for `formula`.
    ///
    /// Defaults: the standard [`Registry`], unclosed parentheses rejected,
    /// and a blank formula reported as malformed.
    ///
    /// # Examples
    /// ```rust
    /// use expressions::Builder;
    ///
    /// let value = Builder::new("max(3, 7) - 1").evaluate().unwrap();
    /// assert_eq!(value, 6.0);
    /// ```
    pub fn new(formula: &str) -> Self
    {
        Self {
            formula: formula.to_string(),
            registry: Registry::standard(),
            allow_unclosed_parens: false,
            blank_value: None,
        }
    }

    /// Drops `(` that are still open at the end of the formula instead of
    /// failing with [`ParseError::UnmatchedParenthesis`].
    ///
    /// # Examples
    /// ```rust
    /// use expressions::Builder;
    ///
    /// assert!(Builder::new("2 * (3 + 4").evaluate().is_err());
    /// let value = Builder::new("2 * (3 + 4")
    ///     .allow_unclosed_parens(true)
    ///     .evaluate()
    ///     .unwrap();
    /// assert_eq!(value, 14.0);
    /// ```
    pub fn allow_unclosed_parens(mut self, allow: bool) -> Self
    {
        self.allow_unclosed_parens = allow;
        self
    }

    /// Returns `value` for a formula that contains no symbols at all.
    ///
    /// # Examples
    /// ```rust
    /// use expressions::Builder;
    ///
    /// assert_eq!(Builder::new("  ").blank_as(0.0).evaluate(), Ok(0.0));
    /// ```
    pub fn blank_as(mut self, value: f64) -> Self
    {
        self.blank_value = Some(value);
        self
    }

    /// Splits the formula into lower-case symbol strings.
    pub fn tokenize(&self) -> Result<Vec<String>, LexError>
    {
        let lexemes = lexer::from(&self.formula, &self.registry)?;
        Ok(lexemes.into_iter().map(Lexeme::into_text).collect())
    }

    /// Runs the formula up to, and including, the conversion to postfix.
    pub fn postfix(&self) -> Result<Tokens, ParseError>
    {
        let lexemes = lexer::from(&self.formula, &self.registry)?;
        self.postfix_of(&lexemes)
    }

    fn postfix_of(&self, lexemes: &[Lexeme]) -> Result<Tokens, ParseError>
    {
        let tokens = token::from_lexemes(lexemes, &self.registry)?;
        let tokens = negation::rewrite(tokens)?;
        rpn::make_rpn(tokens, self.allow_unclosed_parens)
    }

    /// Evaluates the formula.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]; lexing failures arrive as
    /// [`ParseError::UnknownSymbol`].
    pub fn evaluate(&self) -> Result<f64, ParseError>
    {
        let lexemes = lexer::from(&self.formula, &self.registry)?;
        match self.blank_value {
            Some(value) if lexemes.is_empty() => return Ok(value),
            _ => (),
        }

        let rpn = self.postfix_of(&lexemes)?;
        let result = evaluator::evaluate_rpn(&rpn, &self.registry);
        log::debug!("{:?} evaluated to {:?}", self.formula, result);
        result
    }
}
