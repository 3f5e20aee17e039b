//! lexer.rs
//!
//! This module provides the lexical analyzer (lexer) for infix expressions.
//! It splits an input string into a sequence of `Lexeme`s, each representing a
//! symbol together with its position in the original string.
//!
//! At every position the lexer tries, in this order:
//!
//! 1. a decimal literal (`12`, `1.5`, `.5`; a sign is never part of a number),
//! 2. a single-character symbol (`+ - * / ^ ! ( ) ,`),
//! 3. a function keyword, in registry order.
//!
//! The first alternative that matches wins. Whitespace is skipped but still
//! separates symbols, so `1 2` is two numbers and `si n` is not a keyword.
//! Keywords are matched case-insensitively and emitted in lower case.

use std::ops::Range;

use crate::error::LexError;
use crate::functions::Registry;
use crate::token;

/// Represents a single lexeme extracted from the input string.
///
/// A `Lexeme` stores a text slice and its span (start..end byte indices) within
/// the original input string.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    text: String,
    span: Range<usize>,
}

impl Lexeme {
    /// Create a new `Lexeme`.
    ///
    /// # Argument
    ///
    /// * `text` - The slice of text corresponding to the lexeme.
    /// * `span` - The range of the lexeme in the original input string.
    pub fn new(text: &str, span: Range<usize>) -> Self {
        Self {
            text: text.to_string(),
            span
        }
    }

    /// Returns the text slice of the lexeme.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the start index of the lexeme in the original input string.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Returns the end index of the lexeme in the original input string.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Returns the span index (start, end) of the lexeme in the original input string.
    pub fn span(&self) -> &Range<usize> {
        &self.span
    }

    /// Consumes the lexeme and returns its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Lexeme
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{name} [{start}, {end})", name=self.text, start=self.span.start, end=self.span.end)
    }
}

/// Type alias for a collection of lexemes.
pub type Lexemes = Vec<Lexeme>;

/// Counts the ASCII digits at the start of `bytes`.
fn count_digits(bytes: &[u8]) -> usize
{
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Matches a decimal literal at the start of `rest`.
///
/// Accepts `digits`, `digits.digits` and `.digits`. A dot that is not
/// followed by a digit is not part of the literal.
///
/// # Returns
///
/// The byte length of the literal, or `None` if `rest` does not start with one.
fn match_number(rest: &str) -> Option<usize>
{
    let bytes = rest.as_bytes();
    let integer = count_digits(bytes);

    if bytes.get(integer) == Some(&b'.') {
        let fraction = count_digits(&bytes[integer + 1..]);
        if fraction > 0 {
            return Some(integer + 1 + fraction);
        }
    }

    (integer > 0).then_some(integer)
}

/// Matches a single-character operator, parenthesis or comma.
fn match_symbol(rest: &str) -> Option<usize>
{
    let ch = rest.chars().next()?;
    let len = ch.len_utf8();
    token::is_symbol(&rest[..len]).then_some(len)
}

/// Matches the first registered keyword that `rest` starts with.
fn match_keyword(rest: &str, registry: &Registry) -> Option<usize>
{
    registry.keywords()
        .find(|keyword| rest.starts_with(keyword.name()))
        .map(|keyword| keyword.name().len())
}

/// Splits the input string into a sequence of `Lexeme`s.
///
/// # Arguments
///
/// * `input` - The input string to lex.
/// * `registry` - Supplies the function keywords to recognise.
///
/// # Returns
///
/// The lexemes in input order, with lower-cased text and spans pointing into
/// `input`.
///
/// # Errors
///
/// [`LexError::UnknownSymbol`] with the byte offset of the first character
/// that does not start any symbol.
pub fn from(input: &str, registry: &Registry) -> Result<Lexemes, LexError> {
    // ASCII lowering keeps byte offsets identical to `input`
    let lowered = input.to_ascii_lowercase();
    let mut lexemes = Lexemes::default();
    let mut pos = 0;

    while let Some(ch) = lowered[pos..].chars().next() {
        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        let rest = &lowered[pos..];
        let matched = match_number(rest)
            .or_else(|| match_symbol(rest))
            .or_else(|| match_keyword(rest, registry));

        let Some(len) = matched else {
            let symbol = input[pos..].chars().next().unwrap_or(ch);
            return Err(LexError::UnknownSymbol { offset: pos, symbol });
        };

        lexemes.push(Lexeme::new(&rest[..len], pos..pos + len));
        pos += len;
    }

    log::debug!("lexed {} symbol(s) from {:?}", lexemes.len(), input);
    Ok(lexemes)
}
