#![cfg(feature = "compose")]
//! Integration tests for the typed compose module.
//!
//! These tests verify that the composition utilities work together with
//! curried closures in realistic scenarios.

use fnkit::compose::{compose, compose_backward, compose_forward, identity};
use fnkit::curry;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Concrete scenarios
// =============================================================================

#[rstest]
#[case(2, 8)]
#[case(0, 2)]
#[case(-1, -1)]
#[case(10, 32)]
fn test_add_two_after_triple(#[case] input: i32, #[case] expected: i32) {
    let add_two = |x: i32| x + 2;
    let triple = |x: i32| x * 3;

    assert_eq!(compose(add_two, triple)(input), expected);
    assert_eq!(compose_backward(add_two, triple)(input), expected);
    assert_eq!(compose_forward(triple, add_two)(input), expected);
}

#[test]
fn test_curry_add_scenario() {
    let add = curry!(|x: i32, y: i32| x + y);
    assert_eq!(add(1)(1), 2);

    let b = add;
    let c = b(1);
    assert_eq!(c(3), 4);
}

// =============================================================================
// Evaluation order and call counts
// =============================================================================

#[test]
fn test_inner_runs_before_outer() {
    let log = std::cell::RefCell::new(Vec::new());
    let inner = |x: i32| {
        log.borrow_mut().push("inner");
        x
    };
    let outer = |x: i32| {
        log.borrow_mut().push("outer");
        x
    };

    compose(outer, inner)(0);
    assert_eq!(*log.borrow(), vec!["inner", "outer"]);
}

#[test]
fn test_each_function_runs_once_per_call() {
    let inner_calls = Cell::new(0);
    let outer_calls = Cell::new(0);
    let composed = compose(
        |x: i32| {
            outer_calls.set(outer_calls.get() + 1);
            x + 1
        },
        |x: i32| {
            inner_calls.set(inner_calls.get() + 1);
            x * 2
        },
    );

    assert_eq!(inner_calls.get(), 0);
    assert_eq!(composed(1), 3);
    assert_eq!(composed(1), 3);
    assert_eq!(composed(5), 11);
    assert_eq!(inner_calls.get(), 3);
    assert_eq!(outer_calls.get(), 3);
}

// =============================================================================
// Laws
// =============================================================================

#[rstest]
#[case(-7)]
#[case(0)]
#[case(42)]
fn test_identity_laws(#[case] input: i32) {
    let double = |x: i32| x * 2;

    assert_eq!(compose(identity, double)(input), double(input));
    assert_eq!(compose(double, identity)(input), double(input));
}

#[rstest]
#[case(-3)]
#[case(0)]
#[case(10)]
fn test_associativity(#[case] input: i32) {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;
    let h = |x: i32| x - 3;

    let left = compose(f, compose(g, h));
    let right = compose(compose(f, g), h);

    assert_eq!(left(input), right(input));
    assert_eq!(compose!(f, g, h)(input), left(input));
}

// =============================================================================
// Curried closures inside compositions
// =============================================================================

#[test]
fn test_partial_applications_compose() {
    let add = curry!(|first: i32, second: i32| first + second);
    let multiply = curry!(|first: i32, second: i32| first * second);

    let add_ten_then_triple = compose_forward(add(10), multiply(3));
    assert_eq!(add_ten_then_triple(5), 45);

    let triple_then_add_ten = compose_backward(add(10), multiply(3));
    assert_eq!(triple_then_add_ten(5), 25);
}

#[test]
fn test_pipeline_over_strings() {
    let trim = |text: String| text.trim().to_string();
    let wrap = curry!(|left: char, right: char, text: String| format!("{left}{text}{right}"));
    let bracket = wrap('[')(']');
    let shout = |text: String| text.to_uppercase();

    let format_label = compose!(bracket, shout, trim);
    assert_eq!(format_label("  ok ".to_string()), "[OK]");
}

#[test]
fn test_composition_in_iterator_map() {
    let increment = |x: i32| x + 1;
    let square = |x: i32| x * x;

    let results: Vec<i32> = (1..=4).map(compose_forward(increment, square)).collect();
    assert_eq!(results, vec![4, 9, 16, 25]);
}

#[test]
fn test_composition_changes_types() {
    let parse = |text: &str| text.parse::<i32>().unwrap_or_default();
    let is_positive = |value: i32| value > 0;

    let check = compose(is_positive, parse);
    assert!(check("12"));
    assert!(!check("-4"));
    assert!(!check("nope"));
}
