//! Integration tests for `Reader<R, A>` and environment projection.

#![cfg(feature = "effect")]

use kindred::effect::{Has, READER, Reader};
use kindred::typeclass::{Applicative2, Functor2, Monad2, Profunctor};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Database {
    url: String,
    pool_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Logger {
    prefix: String,
}

#[derive(Debug, Clone)]
struct AppEnv {
    database: Database,
    logger: Logger,
}

impl Has<Database> for AppEnv {
    fn get(&self) -> &Database {
        &self.database
    }
}

impl Has<Logger> for AppEnv {
    fn get(&self) -> &Logger {
        &self.logger
    }
}

impl From<(Database, Logger)> for AppEnv {
    fn from((database, logger): (Database, Logger)) -> Self {
        Self { database, logger }
    }
}

fn environment() -> AppEnv {
    AppEnv {
        database: Database {
            url: "postgres://localhost".to_string(),
            pool_size: 8,
        },
        logger: Logger {
            prefix: "[app]".to_string(),
        },
    }
}

// =============================================================================
// Construction and Running
// =============================================================================

#[rstest]
fn of_ignores_the_environment() {
    let constant: Reader<AppEnv, i32> = Reader::of(42);
    assert_eq!(constant.run(&environment()), 42);
    assert_eq!(Reader::<i32, &str>::pure("x").call(&0), "x");
}

#[rstest]
fn ask_returns_the_environment() {
    let asked = Reader::<Database, Database>::ask();
    let database = environment().database;
    assert_eq!(asked.run(&database), database);
}

#[rstest]
fn from_and_asks_project() {
    let size = Reader::from(|database: &Database| database.pool_size);
    let url = Reader::asks(|database: &Database| database.url.clone());
    let database = environment().database;

    assert_eq!(size.run(&database), 8);
    assert_eq!(url.run(&database), "postgres://localhost");
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn lmap_and_dimap_adapt_the_environment() {
    let pool = Reader::asks(|database: &Database| database.pool_size);
    let from_app = pool.clone().lmap(|app: &AppEnv| app.database.clone());
    assert_eq!(from_app.run(&environment()), 8);

    let described = pool.dimap(|app: &AppEnv| app.database.clone(), |size| format!("{size} connections"));
    assert_eq!(described.run(&environment()), "8 connections");
}

#[rstest]
fn local_modifies_the_environment_for_one_reader() {
    let prefix = Reader::asks(|logger: &Logger| logger.prefix.clone());
    let shouted = prefix.clone().local(|logger: &Logger| Logger {
        prefix: logger.prefix.to_uppercase(),
    });
    let logger = environment().logger;

    assert_eq!(shouted.run(&logger), "[APP]");
    assert_eq!(prefix.run(&logger), "[app]");
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
fn chain_threads_one_environment() {
    let url = Reader::asks(|database: &Database| database.url.clone());
    let sized = url.chain(|url| Reader::asks(move |database: &Database| format!("{url}?pool={}", database.pool_size)));
    assert_eq!(sized.run(&environment().database), "postgres://localhost?pool=8");
}

#[rstest]
fn chainw_runs_against_the_intersection() {
    let url = Reader::asks(|database: &Database| database.url.clone());
    let logged = url.chainw(|url| Reader::asks(move |logger: &Logger| format!("{} {url}", logger.prefix)));

    let combined: Reader<AppEnv, String> = logged;
    assert_eq!(combined.run(&environment()), "[app] postgres://localhost");
}

#[rstest]
fn provide_supplies_part_of_the_environment() {
    let describe = Reader::asks(|app: &AppEnv| format!("{} {}", app.logger.prefix, app.database.pool_size));
    let needs_logger: Reader<Logger, String> = describe.provide(environment().database);
    assert_eq!(needs_logger.run(&environment().logger), "[app] 8");
}

#[rstest]
fn join_apply_and_map2_share_the_environment() {
    let nested = Reader::asks(|n: &i32| {
        let n = *n;
        Reader::asks(move |m: &i32| n * 100 + m)
    });
    assert_eq!(nested.join().run(&3), 303);

    let function = Reader::asks(|n: &i32| {
        let n = *n;
        move |value: i32| value + n
    });
    assert_eq!(Reader::asks(|n: &i32| n * 2).apply(function).run(&5), 15);

    let summed = Reader::asks(|n: &i32| *n).map2(Reader::asks(|n: &i32| n * 10), |a, b| a + b);
    assert_eq!(summed.run(&2), 22);
}

#[rstest]
fn then_discards_the_first_result() {
    let second = Reader::asks(|n: &i32| n + 1);
    assert_eq!(Reader::asks(|n: &i32| n * 1000).then(second).run(&1), 2);
}

// =============================================================================
// Instance Object
// =============================================================================

#[rstest]
fn instance_object_provides_the_type_classes() {
    let lifted: Reader<i32, i32> = READER.of(1);
    let mapped = READER.map(lifted, |n| n + 1);
    let chained = READER.chain(mapped, |n| Reader::asks(move |environment: &i32| n * environment));
    let adapted = READER.lmap(chained, |text: &String| i32::try_from(text.len()).unwrap_or_default());

    assert_eq!(adapted.run(&"abcd".to_string()), 8);
}

#[rstest]
fn display_is_opaque() {
    assert_eq!(Reader::<(), ()>::of(()).to_string(), "<Reader>");
}
