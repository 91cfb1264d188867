//! Arity-checked composition of unary functions.
//!
//! Both operands are validated when the composition is built, so a
//! successfully composed [`Function`] never fails when called.
//!
//! The two orientations are also available as operators on references:
//!
//! - `&f << &g` is [`compose_left`]`(f, g)`: `g` runs first.
//! - `&g >> &f` is [`compose_right`]`(g, f)`: `g` runs first.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::dynamic::{Function, compose};
//!
//! let add_two = Function::unary(|value: i32| value + 2);
//! let triple = Function::unary(|value: i32| value * 3);
//!
//! assert_eq!(compose(&add_two, &triple).unwrap().invoke(&[2]), Ok(8));
//! assert_eq!((&add_two << &triple).unwrap().invoke(&[2]), Ok(8));
//! assert_eq!((&triple >> &add_two).unwrap().invoke(&[2]), Ok(8));
//! ```

use std::ops::{Shl, Shr};

use super::error::{CombinatorError, ComposeSide};
use super::function::{Arity, Function};

/// Composes `outer` after `inner`: the result maps `x` to `outer(inner(x))`.
///
/// Each call of the result invokes `inner` once and then `outer` once.
///
/// # Errors
///
/// - [`CombinatorError::ArityMismatchCompose`] if either operand does not
///   take exactly one argument. `outer` is checked first.
/// - [`CombinatorError::ArityNotIntrospectable`] if either operand is
///   variadic.
///
/// # Examples
///
/// ```rust
/// use fnkit::dynamic::{CombinatorError, ComposeSide, Function, compose};
///
/// let add = Function::binary(|first: i32, second: i32| first + second);
/// let double = Function::unary(|value: i32| value * 2);
///
/// assert_eq!(
///     compose(&double, &add).unwrap_err(),
///     CombinatorError::ArityMismatchCompose { side: ComposeSide::Inner, arity: 2 }
/// );
/// ```
pub fn compose<V: 'static>(
    outer: &Function<V>,
    inner: &Function<V>,
) -> Result<Function<V>, CombinatorError> {
    ensure_unary(outer, ComposeSide::Outer)?;
    ensure_unary(inner, ComposeSide::Inner)?;

    let outer = outer.clone();
    let inner = inner.clone();
    tracing::trace!("unary functions composed");
    Ok(Function::new(1, move |arguments| {
        let intermediate = inner.call(arguments);
        outer.call(std::slice::from_ref(&intermediate))
    }))
}

/// `f <~ g`: the left operand is applied last.
///
/// Identical to [`compose`]`(outer, inner)`.
///
/// # Errors
///
/// See [`compose`].
#[inline]
pub fn compose_left<V: 'static>(
    outer: &Function<V>,
    inner: &Function<V>,
) -> Result<Function<V>, CombinatorError> {
    compose(outer, inner)
}

/// `g ~> f`: the left operand is applied first.
///
/// `compose_right(first, second)` is [`compose`]`(second, first)`, so its
/// result maps `x` to `second(first(x))`.
///
/// # Errors
///
/// See [`compose`]. The reported [`ComposeSide`] refers to the roles in the
/// composition, so `second` is the outer side.
#[inline]
pub fn compose_right<V: 'static>(
    first: &Function<V>,
    second: &Function<V>,
) -> Result<Function<V>, CombinatorError> {
    compose(second, first)
}

fn ensure_unary<V>(function: &Function<V>, side: ComposeSide) -> Result<(), CombinatorError> {
    let error = match function.arity() {
        Arity::Fixed(1) => return Ok(()),
        Arity::Fixed(arity) => CombinatorError::ArityMismatchCompose { side, arity },
        Arity::Variadic => CombinatorError::ArityNotIntrospectable,
    };
    tracing::debug!(%error, "compose rejected");
    Err(error)
}

impl<V: 'static> Shl<&Function<V>> for &Function<V> {
    type Output = Result<Function<V>, CombinatorError>;

    fn shl(self, inner: &Function<V>) -> Self::Output {
        compose_left(self, inner)
    }
}

impl<V: 'static> Shr<&Function<V>> for &Function<V> {
    type Output = Result<Function<V>, CombinatorError>;

    fn shr(self, second: &Function<V>) -> Self::Output {
        compose_right(self, second)
    }
}
