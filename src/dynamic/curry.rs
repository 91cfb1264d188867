//! Arity-checked currying.
//!
//! [`curry_with`] applies an argument list to a [`Function`]. When the list
//! saturates the function it is invoked; when it is shorter, a [`Curried`]
//! value holding the list as an immutable prefix is returned. Applying a
//! [`Curried`] appends one argument to a copy of that prefix, so the same
//! partial application can be reused with different continuations.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::dynamic::{Function, curry, curry_single, curry_with};
//!
//! let add = Function::binary(|first: i32, second: i32| first + second);
//!
//! assert_eq!(curry_with(&add, [1, 2]).unwrap().into_value(), Some(3));
//!
//! let add_one = curry_single(&add, 1).unwrap().into_curried().unwrap();
//! assert_eq!(add_one.apply(1).into_value(), Some(2));
//!
//! let curried = curry(&add).unwrap();
//! let add_three = curried.apply(3).into_curried().unwrap();
//! assert_eq!(add_three.apply(4).into_value(), Some(7));
//! ```

use smallvec::SmallVec;

use super::error::CombinatorError;
use super::function::Function;

/// Argument prefixes up to this length are stored without a heap allocation.
const INLINE_ARGUMENTS: usize = 4;

type Arguments<V> = SmallVec<[V; INLINE_ARGUMENTS]>;

/// A function waiting for more arguments.
///
/// Produced by [`curry`], [`curry_with`] and [`curry_single`]. Applying it
/// never mutates it.
#[derive(Clone, Debug)]
pub struct Curried<V> {
    state: CurriedState<V>,
}

#[derive(Clone, Debug)]
enum CurriedState<V> {
    /// A unary function returned as-is by [`curry`].
    Unchanged(Function<V>),
    /// `arguments.len() < arity` always holds.
    Partial {
        function: Function<V>,
        arity: usize,
        arguments: Arguments<V>,
    },
}

/// The outcome of supplying arguments to a curried function.
#[derive(Clone, Debug)]
pub enum Applied<V> {
    /// The function was saturated and invoked; this is its result.
    Value(V),
    /// The function still needs more arguments.
    Curried(Curried<V>),
}

impl<V> Applied<V> {
    /// Returns the result if the function was invoked.
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Value(value) => Some(value),
            Self::Curried(_) => None,
        }
    }

    /// Returns the partial application if more arguments are needed.
    pub fn into_curried(self) -> Option<Curried<V>> {
        match self {
            Self::Value(_) => None,
            Self::Curried(curried) => Some(curried),
        }
    }

    /// Returns `true` if the function was invoked.
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl<V> Curried<V> {
    /// Returns the wrapped function when [`curry`] handed back a unary
    /// function unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::dynamic::{Function, curry};
    ///
    /// let negate = Function::unary(|value: i32| -value);
    /// assert!(curry(&negate).unwrap().as_function().is_some());
    ///
    /// let add = Function::binary(|first: i32, second: i32| first + second);
    /// assert!(curry(&add).unwrap().as_function().is_none());
    /// ```
    pub const fn as_function(&self) -> Option<&Function<V>> {
        match &self.state {
            CurriedState::Unchanged(function) => Some(function),
            CurriedState::Partial { .. } => None,
        }
    }

    /// Returns how many more arguments are needed before invocation.
    pub fn remaining(&self) -> usize {
        match &self.state {
            CurriedState::Unchanged(_) => 1,
            CurriedState::Partial {
                arity, arguments, ..
            } => arity - arguments.len(),
        }
    }
}

impl<V: Clone> Curried<V> {
    /// Supplies the next argument.
    ///
    /// Equivalent to `curry_with(function, prefix ++ [argument])`. Since a
    /// [`Curried`] always needs at least one more argument, this cannot fail.
    pub fn apply(&self, argument: V) -> Applied<V> {
        match &self.state {
            CurriedState::Unchanged(function) => {
                Applied::Value(function.call(std::slice::from_ref(&argument)))
            }
            CurriedState::Partial {
                function,
                arity,
                arguments,
            } => {
                let mut extended = arguments.clone();
                extended.push(argument);
                saturate(function, *arity, extended)
            }
        }
    }

    /// Supplies several arguments at once.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatorError::ArityExceeded`] if the prefix plus
    /// `arguments` is longer than the function's arity.
    pub fn apply_all<I>(&self, arguments: I) -> Result<Applied<V>, CombinatorError>
    where
        I: IntoIterator<Item = V>,
    {
        match &self.state {
            CurriedState::Unchanged(function) => curry_with(function, arguments),
            CurriedState::Partial {
                function,
                arity,
                arguments: prefix,
            } => {
                let mut extended = prefix.clone();
                extended.extend(arguments);
                check_length(*arity, extended.len())?;
                Ok(saturate(function, *arity, extended))
            }
        }
    }
}

/// Curries `function` with no arguments applied yet.
///
/// A unary function is returned unchanged; see [`Curried::as_function`].
///
/// # Errors
///
/// - [`CombinatorError::ZeroArityCurry`] if `function` takes no arguments.
/// - [`CombinatorError::ArityNotIntrospectable`] if `function` is variadic.
///
/// # Examples
///
/// ```rust
/// use fnkit::dynamic::{CombinatorError, Function, curry};
///
/// let answer = Function::nullary(|| 42);
/// assert_eq!(curry(&answer).unwrap_err(), CombinatorError::ZeroArityCurry);
/// ```
pub fn curry<V>(function: &Function<V>) -> Result<Curried<V>, CombinatorError> {
    let arity = function.arity().introspect().inspect_err(reject)?;
    let state = match arity {
        0 => {
            let error = CombinatorError::ZeroArityCurry;
            reject(&error);
            return Err(error);
        }
        1 => CurriedState::Unchanged(function.clone()),
        _ => CurriedState::Partial {
            function: function.clone(),
            arity,
            arguments: SmallVec::new(),
        },
    };
    tracing::trace!(arity, "curried function created");
    Ok(Curried { state })
}

/// Applies `arguments`, in order, to `function`.
///
/// Invokes `function` if the arguments saturate it, otherwise returns the
/// partial application.
///
/// # Errors
///
/// - [`CombinatorError::ArityExceeded`] if more arguments than the arity
///   were supplied.
/// - [`CombinatorError::ArityNotIntrospectable`] if `function` is variadic.
pub fn curry_with<V, I>(function: &Function<V>, arguments: I) -> Result<Applied<V>, CombinatorError>
where
    I: IntoIterator<Item = V>,
{
    let arity = function.arity().introspect().inspect_err(reject)?;
    let arguments: Arguments<V> = arguments.into_iter().collect();
    check_length(arity, arguments.len())?;
    Ok(saturate(function, arity, arguments))
}

/// Applies a single argument to `function`.
///
/// Shorthand for `curry_with(function, [argument])`.
///
/// # Errors
///
/// Same as [`curry_with`]; in particular a 0-arity function yields
/// [`CombinatorError::ArityExceeded`].
pub fn curry_single<V>(function: &Function<V>, argument: V) -> Result<Applied<V>, CombinatorError> {
    curry_with(function, [argument])
}

impl<V> Function<V> {
    /// Method form of [`curry`].
    ///
    /// # Errors
    ///
    /// See [`curry`].
    pub fn curry(&self) -> Result<Curried<V>, CombinatorError> {
        curry(self)
    }

    /// Method form of [`curry_with`].
    ///
    /// # Errors
    ///
    /// See [`curry_with`].
    pub fn curry_with<I>(&self, arguments: I) -> Result<Applied<V>, CombinatorError>
    where
        I: IntoIterator<Item = V>,
    {
        curry_with(self, arguments)
    }

    /// Method form of [`curry_single`].
    ///
    /// # Errors
    ///
    /// See [`curry_single`].
    pub fn curry_single(&self, argument: V) -> Result<Applied<V>, CombinatorError> {
        curry_single(self, argument)
    }
}

fn check_length(arity: usize, received: usize) -> Result<(), CombinatorError> {
    if received > arity {
        let error = CombinatorError::ArityExceeded { arity, received };
        reject(&error);
        return Err(error);
    }
    Ok(())
}

/// Invokes `function` or wraps the arguments; `arguments.len() <= arity`.
fn saturate<V>(function: &Function<V>, arity: usize, arguments: Arguments<V>) -> Applied<V> {
    let received = arguments.len();
    if received == arity {
        tracing::trace!(arity, "curried function saturated");
        Applied::Value(function.call(&arguments))
    } else {
        tracing::trace!(arity, received, "curried function awaiting arguments");
        Applied::Curried(Curried {
            state: CurriedState::Partial {
                function: function.clone(),
                arity,
                arguments,
            },
        })
    }
}

fn reject(error: &CombinatorError) {
    tracing::debug!(%error, "curry rejected");
}
