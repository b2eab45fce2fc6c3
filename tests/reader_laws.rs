#![cfg(feature = "effect")]
//! Property-based tests for the `Reader` Functor, Monad and environment laws.
//!
//! ## Functor Laws
//! - Identity: `reader.map(|x| x) == reader`
//! - Composition: `reader.map(f).map(g) == reader.map(|x| g(f(x)))`
//!
//! ## Monad Laws
//! - Left Identity: `of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! ## Environment Laws
//! - Ask Retrieval: `ask().run(r) == r`
//! - Local Identity: `m.local(|r| r.clone()) == m`
//! - Local Composition: `m.local(g).local(f) == m.local(|r| g(&f(r)))`

use kindred::effect::Reader;
use proptest::prelude::*;

fn scaled(factor: i32) -> Reader<i32, i32> {
    Reader::asks(move |environment: &i32| environment.wrapping_mul(factor))
}

proptest! {
    #[test]
    fn prop_reader_functor_identity(environment in -1000i32..1000i32, factor in -10i32..10i32) {
        prop_assert_eq!(scaled(factor).map(|x| x).run(&environment), scaled(factor).run(&environment));
    }

    #[test]
    fn prop_reader_functor_composition(environment in -1000i32..1000i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let left = scaled(3).map(function1).map(function2);
        let right = scaled(3).map(move |x| function2(function1(x)));

        prop_assert_eq!(left.run(&environment), right.run(&environment));
    }

    #[test]
    fn prop_reader_monad_left_identity(environment in -1000i32..1000i32, value in -1000i32..1000i32) {
        let function = |n: i32| Reader::asks(move |environment: &i32| n.wrapping_add(*environment));

        prop_assert_eq!(
            Reader::of(value).chain(function).run(&environment),
            function(value).run(&environment)
        );
    }

    #[test]
    fn prop_reader_monad_right_identity(environment in -1000i32..1000i32, factor in -10i32..10i32) {
        prop_assert_eq!(
            scaled(factor).chain(Reader::of).run(&environment),
            scaled(factor).run(&environment)
        );
    }

    #[test]
    fn prop_reader_monad_associativity(environment in -1000i32..1000i32) {
        let function1 = |n: i32| Reader::asks(move |environment: &i32| n.wrapping_add(*environment));
        let function2 = |n: i32| Reader::asks(move |environment: &i32| n.wrapping_mul(*environment));

        let left = scaled(2).chain(function1).chain(function2);
        let right = scaled(2).chain(move |x| function1(x).chain(function2));

        prop_assert_eq!(left.run(&environment), right.run(&environment));
    }

    #[test]
    fn prop_reader_ask_retrieval(environment: i64) {
        prop_assert_eq!(Reader::<i64, i64>::ask().run(&environment), environment);
    }

    #[test]
    fn prop_reader_local_identity(environment in -1000i32..1000i32) {
        prop_assert_eq!(
            scaled(5).local(|r: &i32| *r).run(&environment),
            scaled(5).run(&environment)
        );
    }

    #[test]
    fn prop_reader_local_composition(environment in -1000i32..1000i32) {
        let outer = |r: &i32| r.wrapping_add(7);
        let inner = |r: &i32| r.wrapping_mul(3);

        let left = scaled(1).local(inner).local(outer);
        let right = scaled(1).local(move |r: &i32| inner(&outer(r)));

        prop_assert_eq!(left.run(&environment), right.run(&environment));
    }
}
