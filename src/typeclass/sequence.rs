//! Generic sequencing combinators.
//!
//! These functions are written once against the type-class traits and work
//! for every registered kind. The instance object is passed first:
//!
//! ```rust
//! use kindred::typeclass::{OPTION, sequence_array};
//!
//! assert_eq!(sequence_array(OPTION, vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! assert_eq!(sequence_array(OPTION, vec![Some(1), None]), None);
//! ```
//!
//! - `sequence_array*` fold with `chain`: elements are evaluated one after
//!   another and the first failure in order stops the fold.
//! - `sequence_object*` and `sequence_t*` fold with `map2`: for asynchronous
//!   instances the elements run concurrently. The accumulator sits on the
//!   function side, so the first failure in iteration order is reported.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::applicative::{Applicative, Applicative2};
use super::monad::{Monad, Monad2};

/// Persistent stack accumulating the `sequence_array*` folds.
///
/// A push shares the collected prefix instead of copying it.
struct Collected<A> {
    head: Option<Arc<Node<A>>>,
    len: usize,
}

struct Node<A> {
    value: A,
    rest: Option<Arc<Node<A>>>,
}

impl<A: Clone> Collected<A> {
    const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    fn push(&self, value: A) -> Self {
        Self {
            head: Some(Arc::new(Node {
                value,
                rest: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    fn into_vec(self) -> Vec<A> {
        let mut values = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            values.push(node.value.clone());
            cursor = node.rest.as_deref();
        }
        values.reverse();
        values
    }
}

impl<A> Clone for Collected<A> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<A> Drop for Collected<A> {
    // Unlinks node by node so long stacks drop in constant stack space.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.rest.take(),
                Err(_) => break,
            }
        }
    }
}

fn insert<K: Ord, A>(mut entries: BTreeMap<K, A>, key: K, value: A) -> BTreeMap<K, A> {
    entries.insert(key, value);
    entries
}

/// Turns an ordered collection of containers into a container of the collected values.
pub fn sequence_array<F, A>(tag: F, items: Vec<F::Of<A>>) -> F::Of<Vec<A>>
where
    F: Monad,
    A: Clone + Send + Sync + 'static,
    F::Of<A>: Clone + Send + Sync + 'static,
{
    let collected = items.into_iter().fold(tag.of(Collected::new()), |accumulator, item| {
        tag.chain(accumulator, move |collected: Collected<A>| {
            tag.map(item.clone(), move |value| collected.push(value))
        })
    });
    tag.map(collected, Collected::into_vec)
}

/// Arity-2 version of [`sequence_array`]; the first `Left` in order wins.
///
/// # Examples
///
/// ```rust
/// use kindred::control::{EITHER, Either};
/// use kindred::typeclass::sequence_array2;
///
/// let all: Either<String, Vec<i32>> =
///     sequence_array2(EITHER, vec![Either::right(1), Either::right(2)]);
/// assert_eq!(all, Either::right(vec![1, 2]));
///
/// let failed: Either<&str, Vec<i32>> =
///     sequence_array2(EITHER, vec![Either::right(1), Either::left("e"), Either::right(2)]);
/// assert_eq!(failed, Either::left("e"));
/// ```
pub fn sequence_array2<F, E, A>(tag: F, items: Vec<F::Of<E, A>>) -> F::Of<E, Vec<A>>
where
    F: Monad2,
    E: Send + 'static,
    A: Clone + Send + Sync + 'static,
    F::Of<E, A>: Clone + Send + Sync + 'static,
{
    let collected = items.into_iter().fold(tag.of(Collected::new()), |accumulator, item| {
        tag.chain(accumulator, move |collected: Collected<A>| {
            tag.map(item.clone(), move |value| collected.push(value))
        })
    });
    tag.map(collected, Collected::into_vec)
}

/// Turns keyed containers into a container of a key-ordered map.
pub fn sequence_object<F, K, A, I>(tag: F, items: I) -> F::Of<BTreeMap<K, A>>
where
    F: Applicative,
    K: Ord + Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = (K, F::Of<A>)>,
{
    items
        .into_iter()
        .fold(tag.of(BTreeMap::new()), |accumulator, (key, item)| {
            tag.map2(accumulator, item, move |entries, value| {
                insert(entries, key.clone(), value)
            })
        })
}

/// Arity-2 version of [`sequence_object`].
pub fn sequence_object2<F, K, E, A, I>(tag: F, items: I) -> F::Of<E, BTreeMap<K, A>>
where
    F: Applicative2,
    K: Ord + Clone + Send + Sync + 'static,
    E: Send + 'static,
    A: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = (K, F::Of<E, A>)>,
{
    items
        .into_iter()
        .fold(tag.of(BTreeMap::new()), |accumulator, (key, item)| {
            tag.map2(accumulator, item, move |entries, value| {
                insert(entries, key.clone(), value)
            })
        })
}

/// Combines two containers of different value types into a container of a pair.
pub fn sequence_t2<F, E, A, B>(tag: F, first: F::Of<E, A>, second: F::Of<E, B>) -> F::Of<E, (A, B)>
where
    F: Applicative2,
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
{
    tag.map2(first, second, |a, b| (a, b))
}

/// Combines three containers into a container of a triple.
pub fn sequence_t3<F, E, A, B, C>(
    tag: F,
    first: F::Of<E, A>,
    second: F::Of<E, B>,
    third: F::Of<E, C>,
) -> F::Of<E, (A, B, C)>
where
    F: Applicative2,
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    tag.map2(sequence_t2(tag, first, second), third, |(a, b), c| (a, b, c))
}

/// Combines four containers into a container of a 4-tuple.
pub fn sequence_t4<F, E, A, B, C, D>(
    tag: F,
    first: F::Of<E, A>,
    second: F::Of<E, B>,
    third: F::Of<E, C>,
    fourth: F::Of<E, D>,
) -> F::Of<E, (A, B, C, D)>
where
    F: Applicative2,
    E: Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: Send + 'static,
{
    tag.map2(
        sequence_t3(tag, first, second, third),
        fourth,
        |(a, b, c), d| (a, b, c, d),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::OPTION;
    use rstest::rstest;

    #[rstest]
    fn option_sequence_array_collects_in_order() {
        assert_eq!(
            sequence_array(OPTION, vec![Some(3), Some(1), Some(2)]),
            Some(vec![3, 1, 2])
        );
    }

    #[rstest]
    fn option_sequence_array_of_nothing_is_empty() {
        assert_eq!(sequence_array::<_, i32>(OPTION, Vec::new()), Some(Vec::new()));
    }

    #[rstest]
    fn option_sequence_array_handles_long_inputs() {
        let items: Vec<Option<u32>> = (0..100_000).map(Some).collect();
        let collected = sequence_array(OPTION, items).unwrap_or_default();
        assert_eq!(collected.len(), 100_000);
        assert_eq!(collected.last(), Some(&99_999));
    }

    #[rstest]
    fn collected_branches_share_their_prefix() {
        let prefix = Collected::new().push(1).push(2);
        let left = prefix.push(3);
        let right = prefix.push(4);

        assert_eq!(left.into_vec(), vec![1, 2, 3]);
        assert_eq!(right.into_vec(), vec![1, 2, 4]);
        assert_eq!(prefix.into_vec(), vec![1, 2]);
    }

    #[rstest]
    fn option_sequence_object_orders_by_key() {
        let sequenced = sequence_object(OPTION, [("b", Some(2)), ("a", Some(1))]);
        let expected: BTreeMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(sequenced, Some(expected));
    }

    #[rstest]
    fn option_sequence_object_fails_on_any_missing_entry() {
        assert_eq!(sequence_object(OPTION, [("a", Some(1)), ("b", None)]), None);
    }
}
