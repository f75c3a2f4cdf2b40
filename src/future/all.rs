use crate::sequence::{Identity, MapAsync};

use core::fmt;
use core::future::{ready, Future, IntoFuture, Ready};
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

/// A future which waits for all futures to complete successfully, or aborts
/// early on error.
///
/// This `struct` is created by the [`all`] function. See its documentation
/// for more.
///
/// [`all`]: crate::future::all
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct All<I, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    #[pin]
    inner: MapAsync<Ready<Result<I, E>>, I, Identity, T, E>,
}

impl<I, T, E> All<I, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    pub(crate) fn new(futures: I) -> Self {
        Self {
            inner: MapAsync::new(ready(Ok(futures)), Identity),
        }
    }
}

impl<I, T, E> fmt::Debug for All<I, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("All").field(&self.inner).finish()
    }
}

impl<I, T, E> Future for All<I, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx)
    }
}

impl<I, T, E> FusedFuture for All<I, T, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}
