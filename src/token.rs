//! # token.rs
//!
//! This source file is responsible for classifying lexemes into tokens.
//!
//! The lexer only cuts the text into pieces. Here each piece becomes a tagged
//! [`Token`]: a number with its parsed value, an operator, a parenthesis, a
//! comma, or a reference to a registered function keyword.

use phf::Map;
use phf_macros::phf_map;

use crate::error::ParseError;
use crate::functions::{Keyword, Registry};
use crate::lexer::Lexeme;
use crate::operators::{Operator, Precedence};

/// Token enum representing the symbols of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token
{
    /// Numeric literal with its parsed value.
    Number(f64),

    /// Binary operator or the postfix factorial.
    Operator(Operator),

    /// Function keyword.
    Function(&'static Keyword),

    /// Left parenthesis token '('.
    LParen,

    /// Right parenthesis token ')'.
    RParen,

    /// Comma token ',' used as argument separator.
    Comma,
}

impl Token {
    /// Returns the precedence used while reordering into postfix.
    ///
    /// Parentheses, commas and functions share the lowest level. Numbers
    /// never reach the operator stack and report the lowest level too.
    pub fn precedence(&self) -> Precedence {
        match self {
            Token::Operator(oper) => oper.precedence(),
            _ => Precedence::ParenFuncComma,
        }
    }

    /// Whether this token closes an operand: a number, `)` or `!`.
    ///
    /// A `-` right after such a token is a binary minus.
    pub fn ends_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::RParen | Token::Operator(Operator::Fact))
    }
}

impl std::fmt::Display for Token
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(val) => write!(f, "{}", val),
            Token::Operator(oper) => write!(f, "{}", oper.symbol()),
            Token::Function(func) => write!(f, "{}", func.name()),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
        }
    }
}

/// A collection of tokens.
pub type Tokens = Vec<Token>;

/// Map of single-character symbols by their string representation.
static SYMBOLS: Map<&'static str, Token> = phf_map! {
    "+" => Token::Operator(Operator::Add),
    "-" => Token::Operator(Operator::Sub),
    "*" => Token::Operator(Operator::Mult),
    "/" => Token::Operator(Operator::Div),
    "^" => Token::Operator(Operator::Pow),
    "!" => Token::Operator(Operator::Fact),
    "(" => Token::LParen,
    ")" => Token::RParen,
    "," => Token::Comma,
};

/// Whether `str` is one of the single-character symbols.
pub(crate) fn is_symbol(str: &str) -> bool {
    SYMBOLS.contains_key(str)
}

/// Attempts to convert a string slice into the corresponding Token.
///
/// # Arguments
///
/// * `str` - The string slice to convert.
/// * `registry` - Keyword table used to resolve function names.
///
/// # Returns
///
/// * `Ok(Token)` if the string is a symbol, a decimal literal or a keyword.
/// * `Err(ParseError::UnknownKeyword)` otherwise.
pub fn make_token(str: &str, registry: &Registry) -> Result<Token, ParseError> {
    if let Some(token) = SYMBOLS.get(str) {
        return Ok(*token);
    }

    let starts_numeric = str.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.');
    if starts_numeric {
        if let Ok(val) = str.parse::<f64>() {
            return Ok(Token::Number(val));
        }
    }

    registry.get(str)
        .map(Token::Function)
        .ok_or_else(|| ParseError::UnknownKeyword(str.to_string()))
}

/// Classifies every lexeme into a token.
pub fn from_lexemes(lexemes: &[Lexeme], registry: &Registry) -> Result<Tokens, ParseError> {
    lexemes.iter()
        .map(|lexeme| make_token(lexeme.text(), registry))
        .collect()
}

/// Joins tokens back into expression text, one space between tokens.
pub fn join(tokens: &[Token]) -> String {
    tokens.iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
