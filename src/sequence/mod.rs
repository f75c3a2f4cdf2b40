//! Serial and concurrent combinators over sequences of futures.
//!
//! A *sequence* is a future which resolves to something iterable, whose
//! elements are themselves futures. Every future involved is fallible and
//! shares a single error type `E`: the sequence, each element, and each
//! future a transform returns. The first error encountered is returned
//! unchanged.
//!
//! | Name           | Resolves with         | Transforms run...          |
//! | ---            | ---                   | ---                        |
//! | [`map`]        | `Vec` of the outputs  | one at a time, in order    |
//! | [`map_async`]  | `Vec` of the outputs  | concurrently               |
//! | [`each`]       | the elements          | one at a time, in order    |
//! | [`each_async`] | the elements          | concurrently               |
//!
//! Plain values lift into this shape with [`from_values`], or with
//! [`resolve`] for a single value.
//!
//! [`resolve`]: crate::future::resolve
//!
//! # Examples
//!
//! ```
//! use futures_lite::future::block_on;
//! use futures_sequence::future::resolve;
//! use futures_sequence::sequence::{each, from_values, map, map_async};
//!
//! block_on(async {
//!     let doubled: Result<_, ()> = map(from_values(vec![1, 2, 3]), |x| resolve(x * 2)).await;
//!     assert_eq!(doubled, Ok(vec![2, 4, 6]));
//!
//!     // A future of a sequence works just like a resolved one.
//!     let sequence = async { Ok::<_, ()>(vec![resolve(3), resolve(1)]) };
//!     let out = map_async(sequence, |x| async move { Ok(x + 1) }).await;
//!     assert_eq!(out, Ok(vec![4, 2]));
//!
//!     // `each` hands the elements back once every transform succeeded.
//!     let out: Result<_, ()> = each(from_values(["a", "b"]), |s: &&str| resolve(s.len())).await;
//!     assert_eq!(out, Ok(vec!["a", "b"]));
//! })
//! ```

use core::future::{ready, IntoFuture, Ready};

pub use each::{Each, EachAsync};
pub use map::Map;
pub use map_async::MapAsync;
pub use transform::{Identity, Inspect, Passthrough, Transform};

mod each;
mod map;
mod map_async;
mod transform;

/// Transform every element of a sequence, one element at a time.
///
/// Resolves `sequence`, then for each element in index order resolves the
/// element, invokes `transform` on it and waits for the future it returns
/// before moving on. No two transforms are ever in flight at once.
///
/// Resolves with the outputs in index order. The first error, from the
/// sequence, an element or a transform, is returned as-is; elements after
/// it are never polled and `transform` is never invoked for them.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_sequence::sequence::{from_values, map};
///
/// block_on(async {
///     let out = map(from_values(vec![1, 0, 2]), |x: u32| async move {
///         match x {
///             0 => Err("division by zero"),
///             x => Ok(10 / x),
///         }
///     })
///     .await;
///     assert_eq!(out, Err("division by zero"));
/// })
/// ```
pub fn map<S, I, T, E, F, R, U>(sequence: S, transform: F) -> Map<S::IntoFuture, I, F, T, E>
where
    S: IntoFuture<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: FnMut(T) -> R,
    R: IntoFuture<Output = Result<U, E>>,
{
    Map::new(sequence.into_future(), transform)
}

/// Transform every element of a sequence concurrently.
///
/// Resolves `sequence`, then drives every element at once: as soon as an
/// element resolves, `transform` is invoked on it and the returned future is
/// polled alongside the others. Each output is written at its element's
/// index, so the result is index-aligned regardless of completion order.
///
/// The first error to occur, by completion time rather than by index, is
/// returned as-is once the poll it occurred in has visited every other
/// woken element, so no ready element misses its transform. The elements
/// and transforms still in flight after that are abandoned: they are
/// dropped without being polled again.
///
/// # Examples
///
/// ```
/// use futures_lite::future::{block_on, yield_now};
/// use futures_sequence::sequence::{from_values, map_async};
///
/// block_on(async {
///     let out = map_async(from_values(vec![3, 1, 2]), |x| async move {
///         for _ in 0..x {
///             yield_now().await;
///         }
///         Ok::<_, ()>(x * 10)
///     })
///     .await;
///     assert_eq!(out, Ok(vec![30, 10, 20]));
/// })
/// ```
pub fn map_async<S, I, T, E, F, R, U>(
    sequence: S,
    transform: F,
) -> MapAsync<S::IntoFuture, I, F, T, E>
where
    S: IntoFuture<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: FnMut(T) -> R,
    R: IntoFuture<Output = Result<U, E>>,
{
    MapAsync::new(sequence.into_future(), transform)
}

/// Run `transform` over every element of a sequence, one element at a time,
/// then resolve with the elements themselves.
///
/// Behaves like [`map`], except that `transform` receives a reference to
/// each element and its outputs are discarded. The resolved elements are
/// moved through unchanged, in index order.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_sequence::future::resolve;
/// use futures_sequence::sequence::{each, from_values};
///
/// block_on(async {
///     let mut total = 0;
///     let out: Result<_, ()> = each(from_values(vec![1, 2, 3]), |x: &u32| {
///         total += *x;
///         resolve(())
///     })
///     .await;
///     assert_eq!(out, Ok(vec![1, 2, 3]));
///     assert_eq!(total, 6);
/// })
/// ```
pub fn each<S, I, T, E, F, R, U>(sequence: S, transform: F) -> Each<S::IntoFuture, I, F, T, E>
where
    S: IntoFuture<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: FnMut(&T) -> R,
    R: IntoFuture<Output = Result<U, E>>,
{
    Each::new(sequence.into_future(), transform)
}

/// Run `transform` over every element of a sequence concurrently, then
/// resolve with the elements themselves.
///
/// Behaves like [`map_async`], except that `transform` receives a reference
/// to each element and its outputs are discarded. The resolved elements are
/// moved through unchanged, in index order.
///
/// # Examples
///
/// ```
/// use futures_lite::future::{block_on, yield_now};
/// use futures_sequence::sequence::{each_async, from_values};
/// use std::cell::RefCell;
///
/// block_on(async {
///     let finished = RefCell::new(vec![]);
///     let out = each_async(from_values(vec![2, 0, 1]), |x: &u32| {
///         let (x, finished) = (*x, &finished);
///         async move {
///             for _ in 0..x {
///                 yield_now().await;
///             }
///             finished.borrow_mut().push(x);
///             Ok::<_, ()>(())
///         }
///     })
///     .await;
///     assert_eq!(out, Ok(vec![2, 0, 1]));
///     assert_eq!(finished.into_inner(), vec![0, 1, 2]);
/// })
/// ```
pub fn each_async<S, I, T, E, F, R, U>(
    sequence: S,
    transform: F,
) -> EachAsync<S::IntoFuture, I, F, T, E>
where
    S: IntoFuture<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: FnMut(&T) -> R,
    R: IntoFuture<Output = Result<U, E>>,
{
    EachAsync::new(sequence.into_future(), transform)
}

/// A resolved sequence of resolved elements.
pub type Values<T, E> = Ready<Result<Vec<Ready<Result<T, E>>>, E>>;

/// Lift plain values into a sequence which has already resolved, and whose
/// elements have already resolved.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_sequence::sequence::from_values;
///
/// block_on(async {
///     let elements = from_values::<_, _, ()>(vec![1, 2]).await.unwrap();
///     assert_eq!(elements.len(), 2);
/// })
/// ```
pub fn from_values<V, T, E>(values: V) -> Values<T, E>
where
    V: IntoIterator<Item = T>,
{
    ready(Ok(values.into_iter().map(|value| ready(Ok(value))).collect()))
}
