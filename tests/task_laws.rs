#![cfg(feature = "async")]
//! Property-based tests for the `Task` Functor and Monad laws.
//!
//! - Functor Identity: `task.map(|x| x) == task`
//! - Functor Composition: `task.map(f).map(g) == task.map(|x| g(f(x)))`
//! - Left Identity: `Task::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(Task::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! Each side is run on a fresh runtime and the settled values are compared.

use kindred::effect::Task;
use proptest::prelude::*;

fn settle<A: Send + 'static>(task: &Task<A>) -> A {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(task.run())
}

fn deferred(value: i32) -> Task<i32> {
    Task::new(move || async move {
        tokio::task::yield_now().await;
        value
    })
}

fn double(n: i32) -> Task<i32> {
    Task::of(n.wrapping_mul(2))
}

fn negate(n: i32) -> Task<i32> {
    deferred(n.wrapping_neg())
}

proptest! {
    #[test]
    fn prop_task_functor_identity(value: i32) {
        prop_assert_eq!(settle(&deferred(value).map(|x| x)), settle(&deferred(value)));
    }

    #[test]
    fn prop_task_functor_composition(value: i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(3);

        let left = deferred(value).map(function1).map(function2);
        let right = deferred(value).map(move |x| function2(function1(x)));

        prop_assert_eq!(settle(&left), settle(&right));
    }

    #[test]
    fn prop_task_monad_left_identity(value: i32) {
        prop_assert_eq!(settle(&Task::of(value).chain(negate)), settle(&negate(value)));
    }

    #[test]
    fn prop_task_monad_right_identity(value: i32) {
        prop_assert_eq!(settle(&deferred(value).chain(Task::of)), settle(&deferred(value)));
    }

    #[test]
    fn prop_task_monad_associativity(value: i32) {
        let left = deferred(value).chain(double).chain(negate);
        let right = deferred(value).chain(|x| double(x).chain(negate));

        prop_assert_eq!(settle(&left), settle(&right));
    }
}
