//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native higher-kinded polymorphism: a trait cannot abstract
//! over `Option<_>` or `TaskEither<_, _>` as type constructors. This module
//! works around that with a tag-indexed registry. Every container registers a
//! zero-sized tag type and implements one of the `Kind*` traits for it, mapping
//! the tag plus its type arguments to the concrete container:
//!
//! | Trait | Applied form | Example |
//! |---|---|---|
//! | [`Kind`] | `F::Of<A>` | `OptionKind` + `A` = `Option<A>` |
//! | [`Kind2`] | `F::Of<E, A>` | `EitherKind` + `E` + `A` = `Either<E, A>` |
//! | [`Kind3`] | `F::Of<R, E, A>` | `ReaderTaskEitherKind` + `R` + `E` + `A` |
//!
//! The registry is open: any module may add an entry by implementing the trait
//! for a fresh tag. Nothing exists at runtime besides the tags themselves,
//! which double as the instance objects handed to generic combinators.
//!
//! # Example
//!
//! ```rust
//! use kindred::typeclass::{Kind, OptionKind};
//!
//! fn lift<F: Kind>(_tag: F, value: F::Of<i32>) -> F::Of<i32> {
//!     value
//! }
//!
//! let value: Option<i32> = lift(OptionKind, Some(42));
//! assert_eq!(value, Some(42));
//! ```

/// A tag for a type constructor of one argument.
///
/// The implementing type is the tag; `Of<A>` is the container it denotes.
///
/// # Laws
///
/// Tags carry no data. Two values of the same tag are interchangeable, which
/// is why every tag is `Copy`.
pub trait Kind: Copy + Send + Sync + 'static {
    /// The container applied to `A`.
    ///
    /// For `OptionKind`, `Of<i32>` is `Option<i32>`.
    type Of<A>;
}

/// A tag for a type constructor of two arguments.
///
/// By convention the first argument is the failure (or environment) slot
/// and the second one is the value slot that `map` transforms.
pub trait Kind2: Copy + Send + Sync + 'static {
    /// The container applied to `E` and `A`.
    type Of<E, A>;
}

/// A tag for a type constructor of three arguments: environment, failure, value.
pub trait Kind3: Copy + Send + Sync + 'static {
    /// The container applied to `R`, `E` and `A`.
    type Of<R, E, A>;
}

/// Registry tag for [`Option`], the crate's stand-in for a Maybe type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKind;

/// The `Option` instance object.
pub const OPTION: OptionKind = OptionKind;

impl Kind for OptionKind {
    type Of<A> = Option<A>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct VecKind;

    impl Kind for VecKind {
        type Of<A> = Vec<A>;
    }

    #[derive(Clone, Copy)]
    struct ResultKind;

    impl Kind2 for ResultKind {
        type Of<E, A> = Result<A, E>;
    }

    #[test]
    fn option_kind_resolves_to_option() {
        fn resolve<F: Kind>(value: F::Of<String>) -> F::Of<String> {
            value
        }

        let resolved: Option<String> = resolve::<OptionKind>(Some("kind".to_string()));
        assert_eq!(resolved, Some("kind".to_string()));
    }

    #[test]
    fn registry_is_open_to_new_tags() {
        fn first<F: Kind<Of<i32> = Vec<i32>>>(value: &F::Of<i32>) -> Option<i32> {
            value.first().copied()
        }

        assert_eq!(first::<VecKind>(&vec![3, 4]), Some(3));
    }

    #[test]
    fn arity_two_kind_keeps_both_arguments() {
        fn assert_applied<F, E, A>()
        where
            F: Kind2<Of<E, A> = Result<A, E>>,
        {
        }

        assert_applied::<ResultKind, String, i32>();
        assert_applied::<ResultKind, (), Vec<u8>>();
    }

    static_assertions::assert_impl_all!(OptionKind: Copy, Send, Sync);
}
