//! # buildin.rs
//!
//! Standard mathematical functions for expression evaluation.
//!
//! This module defines the built-in keyword table: trigonometric, hyperbolic,
//! angle conversion, rounding, exponential and logarithmic functions, plus a
//! few two-argument helpers. All angles are in radians.
//!
//! The table is ordered. The lexer tries keywords in this order and takes the
//! first one that matches, so a keyword must appear before any other keyword
//! that is a prefix of it (`sinh` before `sin`).

use phf::OrderedMap;
use phf_macros::phf_ordered_map;

use std::f64::consts::PI;

/// Function pointer type alias representing a built-in function.
///
/// The slice holds exactly `arity` values, in evaluation-stack order: index 0
/// is the last argument written in the expression.
pub type Func = fn(&[f64]) -> f64;

/// A function keyword with its expected argument count and implementation.
#[derive(Clone, Copy)]
pub struct Keyword {
    /// Function pointer implementing the keyword.
    function: Func,
    /// Number of arguments the function consumes.
    arity: usize,
    /// Lower-case name as it appears in an expression.
    name: &'static str,
}

impl Keyword {
    /// Executes the function with the given arguments.
    ///
    /// `args.len()` must equal [`Keyword::arity`].
    pub fn apply(&self, args: &[f64]) -> f64 {
        debug_assert_eq!(args.len(), self.arity);
        (self.function)(args)
    }

    /// Returns the number of arguments this keyword expects.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the keyword name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyword")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        // function pointer addresses are not guaranteed to be unique, so don't compare them
        (self.arity == other.arity) && (self.name == other.name)
    }
}

/// Macro to define unary functions easily from method names on f64.
///
/// For example, define_unary_func!(sin) expands to
/// `fn sin(args: &[f64]) -> f64 { args[0].sin() }`.
macro_rules! define_unary_func {
    ($name:ident) => {
        fn $name(args: &[f64]) -> f64 {
            args[0].$name()
        }
    };
    ($name:ident => $method:ident) => {
        fn $name(args: &[f64]) -> f64 {
            args[0].$method()
        }
    };
}

define_unary_func!(sin);
define_unary_func!(cos);
define_unary_func!(tan);
define_unary_func!(asin);
define_unary_func!(acos);
define_unary_func!(atan);
define_unary_func!(sinh);
define_unary_func!(cosh);
define_unary_func!(tanh);
define_unary_func!(sqrt);
define_unary_func!(floor);
define_unary_func!(ceiling => ceil);
define_unary_func!(exp);
define_unary_func!(ln);
define_unary_func!(log => log10);

fn degtorad(args: &[f64]) -> f64 {
    args[0] * (PI / 180.0)
}

fn radtodeg(args: &[f64]) -> f64 {
    args[0] * (180.0 / PI)
}

fn abs(args: &[f64]) -> f64 {
    if args[0] < 0.0 { -args[0] } else { args[0] }
}

fn max(args: &[f64]) -> f64 {
    args[0].max(args[1])
}

fn min(args: &[f64]) -> f64 {
    args[0].min(args[1])
}

/// `mod(x, y)` is the truncated remainder of `x / y`.
///
/// The arguments arrive reversed, so `x` is `args[1]` and `y` is `args[0]`.
fn modulo(args: &[f64]) -> f64 {
    args[1] % args[0]
}

/// Keyword table in lexing order.
pub(crate) static KEYWORDS: OrderedMap<&'static str, Keyword> = phf_ordered_map! {
    "sinh"      => Keyword{ function: sinh,     arity: 1,   name: "sinh" },
    "cosh"      => Keyword{ function: cosh,     arity: 1,   name: "cosh" },
    "tanh"      => Keyword{ function: tanh,     arity: 1,   name: "tanh" },
    "sin"       => Keyword{ function: sin,      arity: 1,   name: "sin" },
    "cos"       => Keyword{ function: cos,      arity: 1,   name: "cos" },
    "tan"       => Keyword{ function: tan,      arity: 1,   name: "tan" },
    "asin"      => Keyword{ function: asin,     arity: 1,   name: "asin" },
    "acos"      => Keyword{ function: acos,     arity: 1,   name: "acos" },
    "atan"      => Keyword{ function: atan,     arity: 1,   name: "atan" },
    "degtorad"  => Keyword{ function: degtorad, arity: 1,   name: "degtorad" },
    "radtodeg"  => Keyword{ function: radtodeg, arity: 1,   name: "radtodeg" },
    "abs"       => Keyword{ function: abs,      arity: 1,   name: "abs" },
    "sqrt"      => Keyword{ function: sqrt,     arity: 1,   name: "sqrt" },
    "max"       => Keyword{ function: max,      arity: 2,   name: "max" },
    "min"       => Keyword{ function: min,      arity: 2,   name: "min" },
    "floor"     => Keyword{ function: floor,    arity: 1,   name: "floor" },
    "ceiling"   => Keyword{ function: ceiling,  arity: 1,   name: "ceiling" },
    "exp"       => Keyword{ function: exp,      arity: 1,   name: "exp" },
    "ln"        => Keyword{ function: ln,       arity: 1,   name: "ln" },
    "log"       => Keyword{ function: log,      arity: 1,   name: "log" },
    "mod"       => Keyword{ function: modulo,   arity: 2,   name: "mod" },
};
