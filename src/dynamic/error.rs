//! Error types for arity-checked currying and composition.
//!
//! Every variant is a contract violation detected when a combinator is
//! constructed or applied. None of them is retried; the operation that
//! produced the error has no observable effect.

use std::fmt;

/// Which operand of a composition violated the unary-arity contract.
///
/// # Examples
///
/// ```rust
/// use fnkit::dynamic::ComposeSide;
///
/// assert_eq!(format!("{}", ComposeSide::Outer), "outer");
/// assert_eq!(format!("{}", ComposeSide::Inner), "inner");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposeSide {
    /// The function applied last (`f` in `f(g(x))`).
    Outer,
    /// The function applied first (`g` in `f(g(x))`).
    Inner,
}

impl fmt::Display for ComposeSide {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outer => formatter.write_str("outer"),
            Self::Inner => formatter.write_str("inner"),
        }
    }
}

/// Represents errors raised by the dynamic combinators.
///
/// # Examples
///
/// ```rust
/// use fnkit::dynamic::CombinatorError;
///
/// let error = CombinatorError::ArityExceeded { arity: 2, received: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "curry cannot receive more arguments than function arity (arity 2, received 3)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinatorError {
    /// More arguments were supplied than the function declares.
    #[error(
        "curry cannot receive more arguments than function arity (arity {arity}, received {received})"
    )]
    ArityExceeded {
        /// The declared arity of the function.
        arity: usize,
        /// The number of arguments supplied.
        received: usize,
    },

    /// A function taking no arguments cannot be applied incrementally.
    #[error("cannot curry 0-arity function")]
    ZeroArityCurry,

    /// An operand of `compose` does not take exactly one argument.
    #[error(
        "compose accepts only 1-arity functions as arguments ({side} function has arity {arity})"
    )]
    ArityMismatchCompose {
        /// The offending operand.
        side: ComposeSide,
        /// Its declared arity.
        arity: usize,
    },

    /// The function was declared variadic, so its arity is unknown.
    #[error("function arity cannot be introspected")]
    ArityNotIntrospectable,

    /// A direct invocation supplied fewer arguments than the function declares.
    #[error("function of arity {arity} invoked with {received} arguments")]
    ArityUnsaturated {
        /// The declared arity of the function.
        arity: usize,
        /// The number of arguments supplied.
        received: usize,
    },
}
