//! # fnkit
//!
//! Currying and function composition for Rust.
//!
//! ## Overview
//!
//! The library exposes two families of combinators, each in two forms:
//!
//! - **Typed** ([`compose`](mod@crate::compose) module): generic functions and macros over
//!   ordinary closures. Arity is part of the type, so contract violations
//!   are compile errors.
//! - **Dynamic** ([`dynamic`] module): [`dynamic::Function`] values that carry
//!   their arity at runtime. Contract violations are reported as
//!   [`dynamic::CombinatorError`] when a combinator is built.
//!
//! | Operation | Typed | Dynamic |
//! |---|---|---|
//! | curry with no arguments | `curry!(\|a, b\| ..)` | [`dynamic::curry`] |
//! | apply an argument list | — | [`dynamic::curry_with`] |
//! | apply one argument | `curried(a)` | [`dynamic::curry_single`] |
//! | `f(g(x))` | `compose(f, g)` | [`dynamic::compose`] |
//! | `f <~ g` | `compose_backward(f, g)` | [`dynamic::compose_left`], `&f << &g` |
//! | `g ~> f` | `compose_forward(g, f)` | [`dynamic::compose_right`], `&g >> &f` |
//!
//! ## Feature Flags
//!
//! - `compose`: Typed composition and currying
//! - `dynamic`: Arity-checked function values
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let add = Function::binary(|x: i32, y: i32| x + y);
//! assert_eq!(add.curry_with([1, 2]).unwrap().into_value(), Some(3));
//!
//! let f = |x: i32| x + 2;
//! let g = |x: i32| x * 3;
//! assert_eq!(compose(f, g)(2), 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the typed combinators and the dynamic function types. The
/// dynamic free functions share names with the typed ones and stay under
/// [`dynamic`](crate::dynamic).
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::{Applied, Arity, CombinatorError, ComposeSide, Curried, Function};
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "dynamic")]
pub mod dynamic;
