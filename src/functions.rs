//! Top-level functions module.
//!
//! This module groups function-related implementations used by the expression
//! engine. It provides:
//!
//! - `buildin`: the built-in keyword table and its concrete implementations.
//! - [`Registry`]: a cheap, copyable handle on that table which the lexer uses
//!   to recognise keywords and the evaluator uses to apply them.
//!
//! The table is built at compile time and never changes, so a `Registry` can
//! be shared between any number of threads without synchronisation.

pub(crate) mod buildin;

use phf::OrderedMap;

use crate::error::ParseError;

pub use buildin::{Func, Keyword};

/// Read-only view of the keyword table.
#[derive(Clone, Copy, Debug)]
pub struct Registry
{
    keywords: &'static OrderedMap<&'static str, Keyword>,
}

impl Registry
{
    /// Returns the registry holding every built-in function.
    pub fn standard() -> Self
    {
        Self { keywords: &buildin::KEYWORDS }
    }

    /// Looks up a keyword by its lower-case name.
    pub fn get(&self, name: &str) -> Option<&'static Keyword>
    {
        self.keywords.get(name)
    }

    /// Returns the number of arguments `name` takes.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnknownKeyword`] if `name` is not registered.
    pub fn arity(&self, name: &str) -> Result<usize, ParseError>
    {
        self.get(name)
            .map(Keyword::arity)
            .ok_or_else(|| ParseError::UnknownKeyword(name.to_string()))
    }

    /// Applies the function `name` to `args`.
    ///
    /// The caller guarantees `args.len() == arity(name)`. Arguments are in
    /// evaluation-stack order, i.e. `args[0]` is the last argument written.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnknownKeyword`] if `name` is not registered.
    pub fn evaluate(&self, name: &str, args: &[f64]) -> Result<f64, ParseError>
    {
        self.get(name)
            .map(|keyword| keyword.apply(args))
            .ok_or_else(|| ParseError::UnknownKeyword(name.to_string()))
    }

    /// Returns the keyword names in registration order.
    pub fn keyword_names(&self) -> Vec<&'static str>
    {
        self.keywords.keys().copied().collect()
    }

    /// Iterates over the keywords in registration order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static Keyword>
    {
        self.keywords.values()
    }
}

impl Default for Registry
{
    fn default() -> Self
    {
        Self::standard()
    }
}

/// Return the available built-in function names.
///
/// The order is the order in which the lexer tries them.
pub fn names() -> Vec<&'static str>
{
    Registry::standard().keyword_names()
}
