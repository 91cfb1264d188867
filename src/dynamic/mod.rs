//! Currying and composition over function values with runtime arity.
//!
//! Rust closures have no introspectable arity at runtime, so this module
//! works with [`Function`], a shared callable over a uniform value type that
//! records how many arguments it expects. Every contract violation is
//! reported as a [`CombinatorError`] when the combinator is built.
//!
//! # Overview
//!
//! - [`curry`]: curry a function with no arguments applied
//! - [`curry_with`]: apply an ordered argument list
//! - [`curry_single`]: apply one argument
//! - [`compose`](fn@compose): `compose(f, g)(x) == f(g(x))`
//! - [`compose_left`] (`f <~ g`, also `&f << &g`): same as `compose(f, g)`
//! - [`compose_right`] (`g ~> f`, also `&g >> &f`): same as `compose(f, g)`
//!
//! # Examples
//!
//! ```rust
//! use fnkit::dynamic::{Function, compose_right, curry};
//!
//! let add = Function::binary(|first: i32, second: i32| first + second);
//! let add_ten = curry(&add).unwrap().apply(10).into_curried().unwrap();
//! assert_eq!(add_ten.apply(5).into_value(), Some(15));
//!
//! let double = Function::unary(|value: i32| value * 2);
//! let negate = Function::unary(|value: i32| -value);
//! let double_then_negate = compose_right(&double, &negate).unwrap();
//! assert_eq!(double_then_negate.invoke(&[4]), Ok(-8));
//! ```
//!
//! # Thread Safety
//!
//! [`Function`] is always `Send + Sync`. [`Curried`] and [`Applied`] are
//! `Send + Sync` when the value type is.

mod compose;
mod curry;
mod error;
mod function;

pub use compose::{compose, compose_left, compose_right};
pub use curry::{Applied, Curried, curry, curry_single, curry_with};
pub use error::{CombinatorError, ComposeSide};
pub use function::{Arity, Function};

static_assertions::assert_impl_all!(Function<std::rc::Rc<i32>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Curried<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Applied<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Curried<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_impl_all!(CombinatorError: Send, Sync, std::error::Error);
