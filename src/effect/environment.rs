//! Environment projection for readers with different requirements.
//!
//! A `Reader<R1, _>` and a `Reader<R2, _>` can be combined into a reader over
//! any environment that contains both an `R1` and an `R2`. [`Has`] expresses
//! "contains": an application environment implements `Has<Part>` for every
//! part it carries, and every type trivially contains itself.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Has, Reader};
//!
//! struct Database { url: String }
//! struct Clock { now: u64 }
//!
//! struct AppEnv { database: Database, clock: Clock }
//!
//! impl Has<Database> for AppEnv {
//!     fn get(&self) -> &Database { &self.database }
//! }
//!
//! impl Has<Clock> for AppEnv {
//!     fn get(&self) -> &Clock { &self.clock }
//! }
//!
//! let url = Reader::asks(|database: &Database| database.url.clone());
//! let stamped = url.chainw(|url| Reader::asks(move |clock: &Clock| format!("{url}@{}", clock.now)));
//!
//! let environment = AppEnv {
//!     database: Database { url: "db://main".to_string() },
//!     clock: Clock { now: 17 },
//! };
//! let combined: Reader<AppEnv, String> = stamped;
//! assert_eq!(combined.run(&environment), "db://main@17");
//! ```

/// Read access to a part `T` of a larger environment.
pub trait Has<T: ?Sized> {
    /// Borrows the part.
    fn get(&self) -> &T;
}

impl<T: ?Sized> Has<T> for T {
    #[inline]
    fn get(&self) -> &T {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Port(u16);

    struct Settings {
        port: Port,
    }

    impl Has<Port> for Settings {
        fn get(&self) -> &Port {
            &self.port
        }
    }

    fn read_port<E: Has<Port>>(environment: &E) -> u16 {
        <E as Has<Port>>::get(environment).0
    }

    #[rstest]
    fn projects_a_part() {
        let settings = Settings { port: Port(8080) };
        assert_eq!(read_port(&settings), 8080);
    }

    #[rstest]
    fn every_type_contains_itself() {
        assert_eq!(read_port(&Port(443)), 443);
    }
}
