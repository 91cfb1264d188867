//! Function values with a declared, introspectable arity.
//!
//! A [`Function`] stores its body behind an [`Arc`], so cloning a function
//! value only bumps a reference count and every clone shares the same body.
//! All arguments and results share one value type `V`; callers that need
//! heterogeneous arguments use an enum for `V`.

use std::fmt;
use std::sync::Arc;

use super::error::CombinatorError;

type Body<V> = dyn Fn(&[V]) -> V + Send + Sync;

/// The number of parameters a [`Function`] expects.
///
/// # Examples
///
/// ```rust
/// use fnkit::dynamic::Arity;
///
/// assert_eq!(Arity::Fixed(2).fixed(), Some(2));
/// assert_eq!(Arity::Variadic.fixed(), None);
/// assert_eq!(format!("{}", Arity::Fixed(3)), "3");
/// assert_eq!(format!("{}", Arity::Variadic), "variadic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many parameters.
    Fixed(usize),
    /// Any number of parameters. The arity of such a function cannot be
    /// introspected, so it can be invoked but neither curried nor composed.
    Variadic,
}

impl Arity {
    /// Returns the parameter count, or `None` for [`Arity::Variadic`].
    #[inline]
    pub const fn fixed(self) -> Option<usize> {
        match self {
            Self::Fixed(count) => Some(count),
            Self::Variadic => None,
        }
    }

    /// Returns the parameter count or [`CombinatorError::ArityNotIntrospectable`].
    pub(crate) const fn introspect(self) -> Result<usize, CombinatorError> {
        match self {
            Self::Fixed(count) => Ok(count),
            Self::Variadic => Err(CombinatorError::ArityNotIntrospectable),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(count) => write!(formatter, "{count}"),
            Self::Variadic => formatter.write_str("variadic"),
        }
    }
}

/// An immutable callable over values of type `V` with a declared [`Arity`].
///
/// # Examples
///
/// ```rust
/// use fnkit::dynamic::{Arity, Function};
///
/// let add = Function::binary(|first: i32, second: i32| first + second);
/// assert_eq!(add.arity(), Arity::Fixed(2));
/// assert_eq!(add.invoke(&[1, 2]), Ok(3));
/// ```
pub struct Function<V> {
    arity: Arity,
    body: Arc<Body<V>>,
}

impl<V> Function<V> {
    /// Creates a function of `arity` parameters.
    ///
    /// `body` receives the arguments as a slice whose length always equals
    /// `arity` when called through this crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::dynamic::Function;
    ///
    /// let sum_three = Function::new(3, |arguments: &[i64]| arguments.iter().sum());
    /// assert_eq!(sum_three.invoke(&[1, 2, 3]), Ok(6));
    /// ```
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        Self {
            arity: Arity::Fixed(arity),
            body: Arc::new(body),
        }
    }

    /// Creates a function that accepts any number of arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::dynamic::{Arity, Function};
    ///
    /// let count = Function::variadic(|arguments: &[usize]| arguments.len());
    /// assert_eq!(count.arity(), Arity::Variadic);
    /// assert_eq!(count.invoke(&[7, 7, 7]), Ok(3));
    /// ```
    pub fn variadic<F>(body: F) -> Self
    where
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        Self {
            arity: Arity::Variadic,
            body: Arc::new(body),
        }
    }

    /// Creates a function that takes no arguments.
    pub fn nullary<F>(function: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: 'static,
    {
        Self::new(0, move |_| function())
    }

    /// Returns the declared arity.
    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Calls the function after checking the argument count.
    ///
    /// # Errors
    ///
    /// - [`CombinatorError::ArityExceeded`] if more arguments than the arity
    ///   were supplied.
    /// - [`CombinatorError::ArityUnsaturated`] if fewer were supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::dynamic::{CombinatorError, Function};
    ///
    /// let negate = Function::unary(|value: i32| -value);
    /// assert_eq!(negate.invoke(&[4]), Ok(-4));
    /// assert_eq!(
    ///     negate.invoke(&[4, 5]),
    ///     Err(CombinatorError::ArityExceeded { arity: 1, received: 2 })
    /// );
    /// ```
    pub fn invoke(&self, arguments: &[V]) -> Result<V, CombinatorError> {
        let Arity::Fixed(arity) = self.arity else {
            return Ok(self.call(arguments));
        };
        let received = arguments.len();
        match received.cmp(&arity) {
            std::cmp::Ordering::Equal => Ok(self.call(arguments)),
            std::cmp::Ordering::Greater => Err(CombinatorError::ArityExceeded { arity, received }),
            std::cmp::Ordering::Less => Err(CombinatorError::ArityUnsaturated { arity, received }),
        }
    }

    /// Calls the body without checking the argument count.
    #[inline]
    pub(crate) fn call(&self, arguments: &[V]) -> V {
        (self.body)(arguments)
    }
}

impl<V: Clone + 'static> Function<V> {
    /// Adapts a one-argument closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::dynamic::Function;
    ///
    /// let shout = Function::unary(|text: String| text.to_uppercase());
    /// assert_eq!(shout.invoke(&["hi".to_string()]), Ok("HI".to_string()));
    /// ```
    pub fn unary<F>(function: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        Self::new(1, move |arguments| function(arguments[0].clone()))
    }

    /// Adapts a two-argument closure.
    pub fn binary<F>(function: F) -> Self
    where
        F: Fn(V, V) -> V + Send + Sync + 'static,
    {
        Self::new(2, move |arguments| {
            function(arguments[0].clone(), arguments[1].clone())
        })
    }

    /// Adapts a three-argument closure.
    pub fn ternary<F>(function: F) -> Self
    where
        F: Fn(V, V, V) -> V + Send + Sync + 'static,
    {
        Self::new(3, move |arguments| {
            function(
                arguments[0].clone(),
                arguments[1].clone(),
                arguments[2].clone(),
            )
        })
    }
}

impl<V> Clone for Function<V> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            body: Arc::clone(&self.body),
        }
    }
}

impl<V> fmt::Debug for Function<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullary_invoke() {
        let answer = Function::nullary(|| 42);
        assert_eq!(answer.arity(), Arity::Fixed(0));
        assert_eq!(answer.invoke(&[]), Ok(42));
    }

    #[test]
    fn test_invoke_unsaturated() {
        let add = Function::binary(|first: i32, second: i32| first + second);
        assert_eq!(
            add.invoke(&[1]),
            Err(CombinatorError::ArityUnsaturated {
                arity: 2,
                received: 1
            })
        );
    }

    #[test]
    fn test_ternary_argument_order() {
        let digits = Function::ternary(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c);
        assert_eq!(digits.invoke(&[1, 2, 3]), Ok(123));
    }

    #[test]
    fn test_clone_shares_body() {
        let double = Function::unary(|value: i32| value * 2);
        let cloned = double.clone();
        assert!(Arc::ptr_eq(&double.body, &cloned.body));
        assert_eq!(cloned.invoke(&[21]), Ok(42));
    }

    #[test]
    fn test_debug_hides_body() {
        let double = Function::unary(|value: i32| value * 2);
        let debug_string = format!("{double:?}");
        assert!(debug_string.contains("Function"));
        assert!(debug_string.contains("Fixed(1)"));
    }

    #[test]
    fn test_introspect_variadic() {
        assert_eq!(
            Arity::Variadic.introspect(),
            Err(CombinatorError::ArityNotIntrospectable)
        );
        assert_eq!(Arity::Fixed(0).introspect(), Ok(0));
    }
}
