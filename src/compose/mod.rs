//! Function composition and currying over ordinary closures.
//!
//! Everything here is checked by the type system: the arity of a closure is
//! part of its type, so a non-unary operand to [`compose`](fn@compose) or an extra
//! argument to a curried closure is a compile error. For function values
//! whose arity is only known at runtime, see [`crate::dynamic`].
//!
//! # Overview
//!
//! - [`compose`](fn@compose): `compose(f, g)(x) == f(g(x))`
//! - [`compose_backward`]: `f <~ g`, identical to [`compose`](fn@compose)
//! - [`compose_forward`]: `g ~> f`, the left operand runs first
//! - [`identity`]: the unit of composition
//! - [`compose!`]: right-to-left composition of any number of functions
//! - [`curry!`]: curry a closure literal
//!
//! # Examples
//!
//! ```
//! use fnkit::compose::{compose, compose_backward, compose_forward};
//!
//! let f = |x: i32| x + 2;
//! let g = |x: i32| x * 3;
//!
//! assert_eq!(compose(f, g)(2), 8);
//! assert_eq!(compose_backward(f, g)(2), 8);
//! assert_eq!(compose_forward(g, f)(2), 8);
//! ```
//!
//! ```
//! use fnkit::curry;
//!
//! let add = curry!(|x: i32, y: i32| x + y);
//! let b = add;
//! let c = b(1);
//! assert_eq!(c(3), 4);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Orientation**: `compose_backward(f, g) == compose_forward(g, f)`

mod compose_macro;
mod curry_macro;
mod utils;

pub use utils::{compose, compose_backward, compose_forward, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry;
