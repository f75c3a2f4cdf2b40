use super::{Inspect, Map, MapAsync, Transform};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

/// A future which runs a transform over every element in order, then
/// resolves with the elements themselves.
///
/// This `struct` is created by the [`each`] function. See its
/// documentation for more.
///
/// [`each`]: crate::sequence::each
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Each<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    Inspect<F>: Transform<T, E, Output = T>,
{
    #[pin]
    inner: Map<S, I, Inspect<F>, T, E>,
}

/// A future which runs a transform over every element concurrently, then
/// resolves with the elements themselves.
///
/// This `struct` is created by the [`each_async`] function. See its
/// documentation for more.
///
/// [`each_async`]: crate::sequence::each_async
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct EachAsync<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    Inspect<F>: Transform<T, E, Output = T>,
{
    #[pin]
    inner: MapAsync<S, I, Inspect<F>, T, E>,
}

macro_rules! impl_each {
    ($name:ident, $inner:ident) => {
        impl<S, I, F, T, E> $name<S, I, F, T, E>
        where
            S: Future<Output = Result<I, E>>,
            I: IntoIterator,
            I::Item: IntoFuture<Output = Result<T, E>>,
            Inspect<F>: Transform<T, E, Output = T>,
        {
            pub(crate) fn new(sequence: S, transform: F) -> Self {
                Self {
                    inner: $inner::new(sequence, Inspect::new(transform)),
                }
            }
        }

        impl<S, I, F, T, E> fmt::Debug for $name<S, I, F, T, E>
        where
            S: Future<Output = Result<I, E>>,
            I: IntoIterator,
            I::Item: IntoFuture<Output = Result<T, E>>,
            Inspect<F>: Transform<T, E, Output = T>,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.inner).finish()
            }
        }

        impl<S, I, F, T, E> Future for $name<S, I, F, T, E>
        where
            S: Future<Output = Result<I, E>>,
            I: IntoIterator,
            I::Item: IntoFuture<Output = Result<T, E>>,
            Inspect<F>: Transform<T, E, Output = T>,
        {
            type Output = Result<Vec<T>, E>;

            #[inline]
            fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
                self.project().inner.poll(cx)
            }
        }

        impl<S, I, F, T, E> FusedFuture for $name<S, I, F, T, E>
        where
            S: Future<Output = Result<I, E>>,
            I: IntoIterator,
            I::Item: IntoFuture<Output = Result<T, E>>,
            Inspect<F>: Transform<T, E, Output = T>,
        {
            fn is_terminated(&self) -> bool {
                self.inner.is_terminated()
            }
        }
    };
}

impl_each!(Each, Map);
impl_each!(EachAsync, MapAsync);
