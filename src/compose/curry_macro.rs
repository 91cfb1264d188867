//! The `curry!` macro for currying closure literals.
//!
//! The arity of the curried function is read from the closure's parameter
//! list at compile time, so the checks the dynamic layer performs at runtime
//! become compile errors here:
//!
//! - a closure with no parameters is rejected
//! - a closure with one parameter is returned unchanged
//! - supplying more arguments than parameters does not type-check
//!
//! The closure is stored once behind an [`Arc`](std::sync::Arc) and shared by
//! every partial application. Each intermediate closure clones the arguments
//! it captured before building the next one, so all of them implement
//! [`Fn`] and can be called any number of times.

/// Converts a closure literal into curried form.
///
/// `curry!(|a, b, c| body)` returns `move |a| move |b| move |c| body`, where
/// every returned closure can be reused with different later arguments.
///
/// # Type Requirements
///
/// - Every argument except the last must implement [`Clone`]
/// - Parameters must be plain identifiers, optionally with a type annotation
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use fnkit::curry;
///
/// let add = curry!(|first: i32, second: i32| first + second);
/// assert_eq!(add(5)(3), 8);
///
/// let add_five = add(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Step-by-step application
///
/// ```
/// use fnkit::curry;
///
/// let volume = curry!(|width: f64, height: f64, depth: f64| width * height * depth);
/// let with_width = volume(2.0);
/// let with_width_height = with_width(3.0);
///
/// assert!((with_width_height(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
///
/// ## Non-`Copy` arguments
///
/// ```
/// use fnkit::curry;
///
/// let greet = curry!(|greeting: String, name: String| format!("{greeting}, {name}!"));
/// let hello = greet("Hello".to_string());
///
/// assert_eq!(hello("Ferris".to_string()), "Hello, Ferris!");
/// assert_eq!(hello("World".to_string()), "Hello, World!");
/// ```
///
/// ## Zero parameters
///
/// ```compile_fail
/// use fnkit::curry;
///
/// let nothing = curry!(|| 42);
/// ```
#[macro_export]
macro_rules! curry {
    (|| $body:expr) => {
        ::std::compile_error!("curry! cannot curry a 0-arity closure")
    };

    (move || $body:expr) => {
        ::std::compile_error!("curry! cannot curry a 0-arity closure")
    };

    (|$parameter:ident $(: $parameter_type:ty)? $(,)?| $body:expr) => {
        |$parameter $(: $parameter_type)?| $body
    };

    (move |$parameter:ident $(: $parameter_type:ty)? $(,)?| $body:expr) => {
        move |$parameter $(: $parameter_type)?| $body
    };

    (|$($parameter:ident $(: $parameter_type:ty)?),+ $(,)?| $body:expr) => {{
        let function = ::std::sync::Arc::new(|$($parameter $(: $parameter_type)?),+| $body);
        $crate::curry!(@nest function [] [$($parameter),+])
    }};

    (move |$($parameter:ident $(: $parameter_type:ty)?),+ $(,)?| $body:expr) => {{
        let function = ::std::sync::Arc::new(move |$($parameter $(: $parameter_type)?),+| $body);
        $crate::curry!(@nest function [] [$($parameter),+])
    }};

    // Last parameter: call the shared closure with every captured argument.
    (@nest $function:ident [$($bound:ident),*] [$last:ident]) => {
        move |$last| {
            $(let $bound = ::std::clone::Clone::clone(&$bound);)*
            $function($($bound,)* $last)
        }
    };

    (@nest $function:ident [$($bound:ident),*] [$next:ident, $($rest:ident),+]) => {
        move |$next| {
            let $function = ::std::sync::Arc::clone(&$function);
            $(let $bound = ::std::clone::Clone::clone(&$bound);)*
            $crate::curry!(@nest $function [$($bound,)* $next] [$($rest),+])
        }
    };
}
