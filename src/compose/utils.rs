//! Composition functions over ordinary closures.
//!
//! Arity is part of the closure's type here, so passing a function that does
//! not take exactly one argument is a compile error rather than a runtime
//! one.
//!
//! - [`identity`]: the unit of composition (I combinator)
//! - [`compose`]: `compose(f, g)(x) == f(g(x))`
//! - [`compose_backward`]: `f <~ g`, same operand order as [`compose`]
//! - [`compose_forward`]: `g ~> f`, the left operand runs first

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use fnkit::compose::{compose, identity};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(compose(identity, double)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two unary functions right to left.
///
/// The returned closure evaluates `inner` first and feeds its output to
/// `outer`. Neither function is called until the closure is, and both are
/// called once per call.
///
/// # Type Parameters
///
/// * `A` - Input type of `inner` and of the composition
/// * `B` - Output type of `inner`, input type of `outer`
/// * `C` - Output type of `outer` and of the composition
///
/// # Examples
///
/// ```
/// use fnkit::compose::compose;
///
/// let add_two = |x: i32| x + 2;
/// let triple = |x: i32| x * 3;
///
/// assert_eq!(compose(add_two, triple)(2), 8);
/// ```
///
/// Types flow through the composition:
///
/// ```
/// use fnkit::compose::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// assert_eq!(compose(length, to_string)(12345), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// `f <~ g`: composes with the left operand applied last.
///
/// Identical to [`compose`].
///
/// # Examples
///
/// ```
/// use fnkit::compose::compose_backward;
///
/// let add_two = |x: i32| x + 2;
/// let triple = |x: i32| x * 3;
///
/// assert_eq!(compose_backward(add_two, triple)(2), 8);
/// ```
#[inline]
pub fn compose_backward<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    compose(outer, inner)
}

/// `g ~> f`: composes with the left operand applied first.
///
/// `compose_forward(first, second)(x) == second(first(x))`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::compose_forward;
///
/// let add_two = |x: i32| x + 2;
/// let triple = |x: i32| x * 3;
///
/// // triple runs first: (2 * 3) + 2
/// assert_eq!(compose_forward(triple, add_two)(2), 8);
/// ```
#[inline]
pub fn compose_forward<A, B, C, G, F>(first: G, second: F) -> impl Fn(A) -> C
where
    G: Fn(A) -> B,
    F: Fn(B) -> C,
{
    compose(second, first)
}
