//! Integration tests for `Either<E, A>`.
//!
//! `Either` is the synchronous success-or-failure value:
//! - `Left(E)`: a modeled failure
//! - `Right(A)`: a success

#![cfg(feature = "control")]

use kindred::control::{EITHER, Either};
use kindred::typeclass::{Applicative2, Bifunctor, Functor2, Monad2, sequence_t3};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Empty,
    NotANumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RangeError(i64);

#[derive(Debug, PartialEq, Eq)]
enum InputError {
    Parse(ParseError),
    Range(RangeError),
}

impl From<ParseError> for InputError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RangeError> for InputError {
    fn from(error: RangeError) -> Self {
        Self::Range(error)
    }
}

fn parse(text: &str) -> Either<ParseError, i64> {
    if text.is_empty() {
        return Either::left(ParseError::Empty);
    }
    text.parse::<i64>()
        .map_err(|_| ParseError::NotANumber(text.to_string()))
        .into()
}

fn percentage(value: i64) -> Either<RangeError, u8> {
    u8::try_from(value)
        .ok()
        .filter(|percent| *percent <= 100)
        .map_or(Either::left(RangeError(value)), Either::right)
}

// =============================================================================
// Construction and Inspection
// =============================================================================

#[rstest]
fn constructors_pick_the_side() {
    let failed: Either<&str, i32> = Either::left("e");
    let succeeded: Either<&str, i32> = Either::of(1);

    assert!(failed.is_left());
    assert!(succeeded.is_right());
    assert_eq!(failed.left_ref(), Some(&"e"));
    assert_eq!(succeeded.right_ref(), Some(&1));
}

#[rstest]
fn debug_format_names_the_side() {
    assert_eq!(format!("{:?}", Either::<i32, &str>::left(3)), "Left(3)");
    assert_eq!(format!("{:?}", Either::<i32, &str>::right("ok")), "Right(\"ok\")");
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
#[case(Either::right(4), Either::right(8))]
#[case(Either::left("e"), Either::left("e"))]
fn map_touches_only_successes(#[case] input: Either<&str, i32>, #[case] expected: Either<&str, i32>) {
    assert_eq!(input.map(|n| n * 2), expected);
}

#[rstest]
#[case(Either::left("abc"), Either::left(3))]
#[case(Either::right(7), Either::right(7))]
fn map_left_touches_only_failures(#[case] input: Either<&str, i32>, #[case] expected: Either<usize, i32>) {
    assert_eq!(input.map_left(str::len), expected);
}

#[rstest]
fn bimap_selects_by_side() {
    let failed: Either<i32, i32> = Either::left(1);
    let succeeded: Either<i32, i32> = Either::right(1);

    assert_eq!(failed.bimap(|e| e - 1, |a| a + 1), Either::left(0));
    assert_eq!(succeeded.bimap(|e| e - 1, |a| a + 1), Either::right(2));
}

#[rstest]
fn swap_exchanges_the_sides() {
    assert_eq!(Either::<i32, &str>::left(1).swap(), Either::<&str, i32>::right(1));
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
#[case("42", Either::right(42))]
#[case("", Either::left(ParseError::Empty))]
#[case("x", Either::left(ParseError::NotANumber("x".to_string())))]
fn chain_short_circuits(#[case] text: &str, #[case] expected: Either<ParseError, i64>) {
    let result = Either::<ParseError, &str>::right(text).chain(parse);
    assert_eq!(result, expected);
}

#[rstest]
#[case("50", Either::right(50))]
#[case("", Either::left(InputError::Parse(ParseError::Empty)))]
#[case("250", Either::left(InputError::Range(RangeError(250))))]
fn or_chain_widens_both_errors(#[case] text: &str, #[case] expected: Either<InputError, u8>) {
    let result: Either<InputError, u8> = parse(text).or_chain(percentage);
    assert_eq!(result, expected);
}

#[rstest]
fn chain_left_recovers() {
    let recovered = parse("").chain_left(|_| Either::<(), i64>::right(0));
    assert_eq!(recovered, Either::right(0));
}

#[rstest]
fn join_propagates_either_level() {
    let inner_failure: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
    let outer_failure: Either<&str, Either<&str, i32>> = Either::left("outer");
    let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(1));

    assert_eq!(inner_failure.join(), Either::left("inner"));
    assert_eq!(outer_failure.join(), Either::left("outer"));
    assert_eq!(nested.join(), Either::right(1));
}

#[rstest]
fn apply_checks_function_side_first() {
    let function: Either<&str, fn(i32) -> i32> = Either::left("function");
    let value: Either<&str, i32> = Either::left("value");
    assert_eq!(value.apply(function), Either::left("function"));

    let function: Either<&str, fn(i32) -> i32> = Either::right(|n| n + 1);
    assert_eq!(Either::<&str, i32>::right(1).apply(function), Either::right(2));
    assert_eq!(Either::<&str, i32>::left("value").apply(function), Either::left("value"));
}

#[rstest]
fn taps_observe_without_changing() {
    let mut seen = Vec::new();
    let value = Either::<&str, i32>::right(5).tap(|n| seen.push(*n));
    assert_eq!(value, Either::right(5));
    assert_eq!(seen, vec![5]);

    let mut errors = Vec::new();
    let failure = Either::<&str, i32>::left("e").tap_left(|e| errors.push(e.to_string()));
    assert_eq!(failure, Either::left("e"));
    assert_eq!(errors, vec!["e".to_string()]);
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
fn fold_and_fallbacks() {
    let failed: Either<String, usize> = Either::left("four".to_string());
    let succeeded: Either<String, usize> = Either::right(9);

    assert_eq!(failed.clone().fold(|e| e.len(), |a| a), 4);
    assert_eq!(succeeded.clone().get_or_else(|e| e.len()), 9);
    assert_eq!(succeeded.clone().get_left_or_else("none".to_string()), "none");
    assert_eq!(failed.clone().to_option(), None);
    assert_eq!(succeeded.to_option(), Some(9));
    assert_eq!(failed.left_option(), Some("four".to_string()));
}

#[rstest]
fn into_inner_collapses_same_types() {
    assert_eq!(Either::<i32, i32>::left(1).into_inner(), 1);
    assert_eq!(Either::<i32, i32>::right(2).into_inner(), 2);
}

#[rstest]
fn result_conversions_round_trip_sides() {
    let from_ok: Either<String, i32> = Ok(1).into();
    let from_err: Either<String, i32> = Err("e".to_string()).into();
    assert_eq!(from_ok, Either::right(1));
    assert_eq!(Result::from(from_err), Err::<i32, String>("e".to_string()));
}

// =============================================================================
// Sequences and Instance Object
// =============================================================================

#[rstest]
fn sequence_array_collects_in_order() {
    let collected = Either::sequence_array(vec![Either::<&str, i32>::right(1), Either::right(2)]);
    assert_eq!(collected, Either::right(vec![1, 2]));
}

#[rstest]
fn sequence_array_reports_first_failure() {
    let collected = Either::sequence_array(vec![
        Either::right(1),
        Either::left("e"),
        Either::right(2),
        Either::left("later"),
    ]);
    assert_eq!(collected, Either::left("e"));
}

#[rstest]
fn instance_object_drives_generic_code() {
    let mapped = EITHER.map(Either::<&str, i32>::right(2), |n| n * 3);
    let chained = EITHER.chain(mapped, |n| {
        if n > 5 { Either::right(n) } else { Either::left("small") }
    });
    let lifted: Either<&str, i32> = EITHER.of(1);

    assert_eq!(chained, Either::right(6));
    assert_eq!(lifted, Either::right(1));
    assert_eq!(EITHER.map_left(Either::<i32, ()>::left(1), |e| e + 1), Either::left(2));
}

#[rstest]
fn sequence_t3_combines_heterogeneous_values() {
    let triple = sequence_t3(
        EITHER,
        Either::<&str, i32>::right(1),
        Either::right("two"),
        Either::right(3.0),
    );
    assert_eq!(triple, Either::right((1, "two", 3.0)));
}
