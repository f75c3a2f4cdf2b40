use core::fmt;
use core::future::{ready, Future, IntoFuture, Ready};
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use pin_project::pin_project;

/// A per-element callback which produces a fallible future.
///
/// Every closure of the shape `FnMut(T) -> R` where `R` converts into a
/// future of `Result<U, E>` is a `Transform`. The [`Inspect`] and
/// [`Identity`] adapters cover the `each` family and [`all`].
///
/// [`all`]: crate::future::all
pub trait Transform<T, E> {
    /// The success value of the produced future.
    type Output;

    /// The future produced for each element.
    type Future: Future<Output = Result<Self::Output, E>>;

    /// Invoke the transform on a single resolved element.
    fn call(&mut self, item: T) -> Self::Future;
}

impl<T, E, F, R, U> Transform<T, E> for F
where
    F: FnMut(T) -> R,
    R: IntoFuture<Output = Result<U, E>>,
{
    type Output = U;
    type Future = R::IntoFuture;

    #[inline]
    fn call(&mut self, item: T) -> Self::Future {
        (self)(item).into_future()
    }
}

/// Runs a closure on a borrow of each element, then hands the element
/// itself back once the closure's future succeeds.
///
/// This is the transform behind [`each`] and [`each_async`].
///
/// [`each`]: crate::sequence::each
/// [`each_async`]: crate::sequence::each_async
#[derive(Clone)]
pub struct Inspect<F> {
    f: F,
}

impl<F> Inspect<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for Inspect<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect").finish_non_exhaustive()
    }
}

impl<T, E, F, R, U> Transform<T, E> for Inspect<F>
where
    F: FnMut(&T) -> R,
    R: IntoFuture<Output = Result<U, E>>,
{
    type Output = T;
    type Future = Passthrough<R::IntoFuture, T>;

    fn call(&mut self, item: T) -> Self::Future {
        let future = (self.f)(&item).into_future();
        Passthrough::new(future, item)
    }
}

/// The transform which resolves every element to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T, E> Transform<T, E> for Identity {
    type Output = T;
    type Future = Ready<Result<T, E>>;

    #[inline]
    fn call(&mut self, item: T) -> Self::Future {
        ready(Ok(item))
    }
}

/// Waits for a future to succeed, then resolves with a held value instead
/// of the future's own output.
///
/// This `struct` is created by the [`Inspect`] transform.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Passthrough<Fut, T> {
    #[pin]
    future: Fut,
    item: Option<T>,
}

impl<Fut, T> Passthrough<Fut, T> {
    fn new(future: Fut, item: T) -> Self {
        Self {
            future,
            item: Some(item),
        }
    }
}

impl<Fut, T> fmt::Debug for Passthrough<Fut, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passthrough")
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}

impl<Fut, T, U, E> Future for Passthrough<Fut, T>
where
    Fut: Future<Output = Result<U, E>>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        ready!(this.future.poll(cx))?;
        match this.item.take() {
            Some(item) => Poll::Ready(Ok(item)),
            None => panic!("Futures must not be polled after completing"),
        }
    }
}
