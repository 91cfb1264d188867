//! Integration tests for arity-checked composition.

#![cfg(feature = "dynamic")]

use fnkit::dynamic::{
    Arity, CombinatorError, ComposeSide, Function, compose, compose_left, compose_right, curry,
};
use rstest::{fixture, rstest};

#[fixture]
fn add_two() -> Function<i32> {
    Function::unary(|x: i32| x + 2)
}

#[fixture]
fn triple() -> Function<i32> {
    Function::unary(|x: i32| x * 3)
}

fn nullary() -> Function<i32> {
    Function::nullary(|| 1)
}

fn binary() -> Function<i32> {
    Function::binary(|x: i32, y: i32| x - y)
}

fn ternary() -> Function<i32> {
    Function::ternary(|x: i32, y: i32, z: i32| x * y * z)
}

// =============================================================================
// Concrete scenario: f = x + 2, g = x * 3
// =============================================================================

#[rstest]
fn test_compose_scenario(add_two: Function<i32>, triple: Function<i32>) {
    assert_eq!(compose(&add_two, &triple).unwrap().invoke(&[2]), Ok(8));
}

#[rstest]
fn test_compose_left_scenario(add_two: Function<i32>, triple: Function<i32>) {
    assert_eq!(compose_left(&add_two, &triple).unwrap().invoke(&[2]), Ok(8));
    assert_eq!((&add_two << &triple).unwrap().invoke(&[2]), Ok(8));
}

#[rstest]
fn test_compose_right_scenario(add_two: Function<i32>, triple: Function<i32>) {
    assert_eq!(compose_right(&triple, &add_two).unwrap().invoke(&[2]), Ok(8));
    assert_eq!((&triple >> &add_two).unwrap().invoke(&[2]), Ok(8));
}

#[rstest]
fn test_orientations_differ_when_operands_swap(add_two: Function<i32>, triple: Function<i32>) {
    // (2 + 2) * 3
    assert_eq!((&triple << &add_two).unwrap().invoke(&[2]), Ok(12));
    assert_eq!((&add_two >> &triple).unwrap().invoke(&[2]), Ok(12));
}

#[rstest]
#[case(-3)]
#[case(0)]
#[case(7)]
fn test_left_and_right_agree(add_two: Function<i32>, triple: Function<i32>, #[case] input: i32) {
    let left = compose_left(&add_two, &triple).unwrap();
    let right = compose_right(&triple, &add_two).unwrap();
    assert_eq!(left.invoke(&[input]), right.invoke(&[input]));
}

// =============================================================================
// Arity violations
// =============================================================================

#[rstest]
#[case(nullary(), 0)]
#[case(binary(), 2)]
#[case(ternary(), 3)]
fn test_non_unary_outer(triple: Function<i32>, #[case] outer: Function<i32>, #[case] arity: usize) {
    assert_eq!(
        compose(&outer, &triple).unwrap_err(),
        CombinatorError::ArityMismatchCompose {
            side: ComposeSide::Outer,
            arity
        }
    );
}

#[rstest]
#[case(nullary(), 0)]
#[case(binary(), 2)]
#[case(ternary(), 3)]
fn test_non_unary_inner(add_two: Function<i32>, #[case] inner: Function<i32>, #[case] arity: usize) {
    assert_eq!(
        compose(&add_two, &inner).unwrap_err(),
        CombinatorError::ArityMismatchCompose {
            side: ComposeSide::Inner,
            arity
        }
    );
    assert!((&add_two << &inner).is_err());
    assert!((&inner >> &add_two).is_err());
}

#[rstest]
fn test_variadic_operand(add_two: Function<i32>) {
    let count = Function::variadic(|arguments: &[i32]| i32::try_from(arguments.len()).unwrap_or(i32::MAX));
    assert_eq!(
        compose(&count, &add_two).unwrap_err(),
        CombinatorError::ArityNotIntrospectable
    );
}

#[rstest]
fn test_error_message(add_two: Function<i32>) {
    let error = compose(&add_two, &binary()).unwrap_err();
    assert!(
        error
            .to_string()
            .starts_with("compose accepts only 1-arity functions as arguments")
    );
}

// =============================================================================
// Composition with currying
// =============================================================================

#[rstest]
fn test_compose_with_partial_application(triple: Function<i32>) {
    let subtract = binary();
    let ten_minus = curry(&subtract).unwrap().apply(10).into_curried().unwrap();
    let ten_minus = Function::unary(move |x: i32| ten_minus.apply(x).into_value().unwrap_or_default());

    let composed = compose(&ten_minus, &triple).unwrap();
    assert_eq!(composed.arity(), Arity::Fixed(1));
    assert_eq!(composed.invoke(&[2]), Ok(4));
}

#[rstest]
fn test_composed_function_curries_as_unary(add_two: Function<i32>, triple: Function<i32>) {
    let composed = compose(&add_two, &triple).unwrap();
    let curried = curry(&composed).unwrap();
    assert!(curried.as_function().is_some());
    assert_eq!(curried.apply(2).into_value(), Some(8));
}

#[rstest]
fn test_chained_operators(add_two: Function<i32>, triple: Function<i32>) {
    let negate = Function::unary(|x: i32| -x);
    let pipeline = (&triple >> &add_two).and_then(|first| &first >> &negate).unwrap();
    assert_eq!(pipeline.invoke(&[2]), Ok(-8));
}
