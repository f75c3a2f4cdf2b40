//! Serial and concurrent `map` and `each` combinators over sequences of
//! futures.
//!
//! A sequence is a future resolving to something iterable, whose elements
//! are futures themselves. The combinators in this crate resolve the
//! sequence, resolve every element, run a transform over each one and
//! collect the results, keeping every output at the index of the element it
//! came from.
//!
//! # Operations
//!
//! - [`sequence::map`]: transform elements one at a time, in order.
//! - [`sequence::map_async`]: transform all elements concurrently.
//! - [`sequence::each`]: run a transform over elements one at a time, then
//!   resolve with the elements themselves.
//! - [`sequence::each_async`]: run a transform over all elements
//!   concurrently, then resolve with the elements themselves.
//!
//! The [`future`] module holds the promise-style building blocks these are
//! made of: [`future::resolve`], [`future::reject`] and [`future::all`],
//! along with the four combinators.
//!
//! # Examples
//!
//! ```rust
//! use futures_lite::future::block_on;
//! use futures_sequence::future::{self, resolve};
//!
//! block_on(async {
//!     let sequence = async { Ok::<_, ()>(vec![resolve(1), resolve(2), resolve(3)]) };
//!     let doubled = future::map(sequence, |x| resolve(x * 2)).await;
//!     assert_eq!(doubled, Ok(vec![2, 4, 6]));
//! })
//! ```
//!
//! # Errors
//!
//! The sequence, its elements and the futures a transform returns all share
//! one error type. The first error is returned unchanged; there are no
//! partial results.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The futures sequence prelude.
pub mod prelude {
    pub use super::future::FutureExt as _;
    pub use super::sequence::Transform;
}

pub mod future;
pub mod sequence;
