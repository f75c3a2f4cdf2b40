//! The promise namespace: resolved and rejected futures, waiting on a
//! collection of futures, and the sequence combinators.
//!
//! Every future in this crate is fallible: it resolves to `Ok` when it is
//! fulfilled and to `Err` when it is rejected. Chaining is ordinary
//! `async`/`.await`, or the [`FutureExt`] methods re-exported here.
//!
//! | Name           | Return signature      | When does it return?                      |
//! | ---            | ---                   | ---                                       |
//! | [`resolve`]    | `Result<T, E>`        | Immediately, with `Ok`                    |
//! | [`reject`]     | `Result<T, E>`        | Immediately, with `Err`                   |
//! | [`all`]        | `Result<Vec<T>, E>`   | Return on first `Err`, wait for all to complete
//! | [`map`]        | `Result<Vec<U>, E>`   | Return on first `Err`, one element at a time
//! | [`map_async`]  | `Result<Vec<U>, E>`   | Return on first `Err`, wait for all to complete
//! | [`each`]       | `Result<Vec<T>, E>`   | Return on first `Err`, one element at a time
//! | [`each_async`] | `Result<Vec<T>, E>`   | Return on first `Err`, wait for all to complete
//!
//! # Examples
//!
//! ```
//! use futures_sequence::future::{all, block_on, reject, resolve};
//!
//! block_on(async {
//!     let out: Result<_, &str> = all(vec![resolve(1), resolve(2)]).await;
//!     assert_eq!(out, Ok(vec![1, 2]));
//!
//!     let out = all(vec![resolve(1), reject("oh no")]).await;
//!     assert_eq!(out, Err("oh no"));
//! })
//! ```

use core::future::IntoFuture;

pub use all::All;
pub use core::future::{ready, Ready};
pub use crate::sequence::{each, each_async, map, map_async};
pub use futures_lite::future::{
    block_on, pending, poll_fn, yield_now, Future, FutureExt, Pending, PollFn, YieldNow,
};

mod all;

/// A future which has already been fulfilled or rejected.
pub type Resolved<T, E> = Ready<Result<T, E>>;

/// Create a future which is already fulfilled with `value`.
///
/// # Examples
///
/// ```
/// use futures_sequence::future::{block_on, resolve};
///
/// assert_eq!(block_on(resolve::<_, ()>(12)), Ok(12));
/// ```
#[inline]
pub fn resolve<T, E>(value: T) -> Resolved<T, E> {
    ready(Ok(value))
}

/// Create a future which is already rejected with `error`.
///
/// # Examples
///
/// ```
/// use futures_sequence::future::{block_on, reject};
///
/// assert_eq!(block_on(reject::<(), _>("oh no")), Err("oh no"));
/// ```
#[inline]
pub fn reject<T, E>(error: E) -> Resolved<T, E> {
    ready(Err(error))
}

/// Wait for every future in a collection to be fulfilled, or for the first
/// one to be rejected.
///
/// All futures are polled concurrently. Outputs are returned in the order of
/// the collection, regardless of the order in which they complete. The
/// first rejection, by completion time, is returned as-is and the remaining
/// futures are dropped.
pub fn all<I, T, E>(futures: I) -> All<I, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    All::new(futures)
}
