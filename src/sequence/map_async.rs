use super::Transform;
use crate::utils::{get_pin_mut, OutputVec, SlotWakers};

use core::fmt;
use core::future::{Future, IntoFuture};
use core::marker::PhantomData;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

/// A future which resolves a sequence, then transforms all of its elements
/// concurrently.
///
/// This `struct` is created by the [`map_async`] function. See its
/// documentation for more.
///
/// [`map_async`]: crate::sequence::map_async
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct MapAsync<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    #[pin]
    state: State<S, <I::Item as IntoFuture>::IntoFuture, F::Future>,
    /// The output data, written at each slot's index as it completes.
    items: OutputVec<F::Output>,
    transform: F,
    _phantom: PhantomData<fn() -> (T, E)>,
}

#[pin_project(project = StateProj)]
enum State<S, Fut, R> {
    Sequence(#[pin] S),
    Running {
        /// The number of slots which are still in-flight.
        pending: usize,
        /// The waker passed to the future, and the per-slot wakers passed
        /// to the contained futures.
        wakers: SlotWakers,
        slots: Pin<Box<[Slot<Fut, R>]>>,
    },
    Done,
}

impl<S, Fut, R> fmt::Debug for State<S, Fut, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Sequence(_) => f.write_str("Sequence"),
            State::Running { slots, .. } => f.debug_list().entries(slots.iter()).finish(),
            State::Done => f.write_str("Done"),
        }
    }
}

/// The pipeline of a single index: resolve the element, then resolve the
/// transform's future.
#[pin_project(project = SlotProj)]
enum Slot<Fut, R> {
    Element(#[pin] Fut),
    Transform(#[pin] R),
    Done,
}

impl<Fut, R> Slot<Fut, R> {
    fn is_done(&self) -> bool {
        matches!(self, Slot::Done)
    }

    fn poll_slot<T, E, F>(
        mut self: Pin<&mut Self>,
        transform: &mut F,
        cx: &mut Context<'_>,
    ) -> Poll<Result<F::Output, E>>
    where
        Fut: Future<Output = Result<T, E>>,
        F: Transform<T, E, Future = R>,
        R: Future<Output = Result<F::Output, E>>,
    {
        loop {
            match self.as_mut().project() {
                SlotProj::Element(element) => match ready!(element.poll(cx)) {
                    // The transform runs as soon as its own element is ready.
                    Ok(item) => self.set(Slot::Transform(transform.call(item))),
                    Err(err) => {
                        self.set(Slot::Done);
                        return Poll::Ready(Err(err));
                    }
                },
                SlotProj::Transform(future) => {
                    let output = ready!(future.poll(cx));
                    self.set(Slot::Done);
                    return Poll::Ready(output);
                }
                SlotProj::Done => panic!("slot polled after completing"),
            }
        }
    }
}

impl<Fut, R> fmt::Debug for Slot<Fut, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Element(_) => "Element",
            Slot::Transform(_) => "Transform",
            Slot::Done => "Done",
        };
        f.write_str(name)
    }
}

impl<S, I, F, T, E> MapAsync<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    pub(crate) fn new(sequence: S, transform: F) -> Self {
        Self {
            state: State::Sequence(sequence),
            items: OutputVec::default(),
            transform,
            _phantom: PhantomData,
        }
    }
}

impl<S, I, F, T, E> fmt::Debug for MapAsync<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapAsync")
            .field("state", &self.state)
            .finish()
    }
}

impl<S, I, F, T, E> Future for MapAsync<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    type Output = Result<Vec<F::Output>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let StateProj::Sequence(sequence) = this.state.as_mut().project() {
            match ready!(sequence.poll(cx)) {
                Ok(sequence) => {
                    let slots: Vec<_> = sequence
                        .into_iter()
                        .map(|element| Slot::Element(element.into_future()))
                        .collect();
                    let len = slots.len();
                    *this.items = OutputVec::uninit(len);
                    this.state.set(State::Running {
                        pending: len,
                        wakers: SlotWakers::new(len),
                        slots: Box::into_pin(slots.into_boxed_slice()),
                    });
                }
                Err(err) => {
                    this.state.set(State::Done);
                    return Poll::Ready(Err(err));
                }
            }
        }

        let output = match this.state.as_mut().project() {
            StateProj::Sequence(_) => unreachable!("the sequence has resolved"),
            StateProj::Done => panic!("Futures must not be polled after completing"),
            StateProj::Running {
                pending,
                wakers,
                slots,
            } => poll_slots(slots.as_mut(), pending, wakers, this.items, this.transform, cx),
        };

        if output.is_ready() {
            // Drop the remaining slots, abandoning any still in flight.
            this.state.set(State::Done);
        }
        output
    }
}

/// Poll every slot whose waker fired since the last poll, writing outputs
/// at their own index.
fn poll_slots<Fut, T, E, F>(
    mut slots: Pin<&mut [Slot<Fut, F::Future>]>,
    pending: &mut usize,
    wakers: &SlotWakers,
    items: &mut OutputVec<F::Output>,
    transform: &mut F,
    cx: &mut Context<'_>,
) -> Poll<Result<Vec<F::Output>, E>>
where
    Fut: Future<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    if *pending == 0 {
        return Poll::Ready(Ok(items.take()));
    }

    let mut readiness = wakers.readiness().lock().unwrap();
    readiness.set_waker(cx.waker());
    if !readiness.any_ready() {
        // Nothing is ready yet
        return Poll::Pending;
    }

    // The first error is held until the pass ends, so every ready slot
    // still gets to run its transform in this poll.
    let mut failed = None;
    for i in 0..slots.len() {
        if !readiness.clear_ready(i) || slots[i].is_done() {
            continue;
        }

        // unlock readiness so we don't deadlock when polling
        drop(readiness);

        let mut cx = Context::from_waker(wakers.get(i).expect("one waker per slot"));
        match get_pin_mut(slots.as_mut(), i).poll_slot(transform, &mut cx) {
            Poll::Ready(Ok(value)) => {
                items.write(i, value);
                *pending -= 1;
            }
            Poll::Ready(Err(err)) => {
                *pending -= 1;
                failed.get_or_insert(err);
            }
            Poll::Pending => {}
        }

        readiness = wakers.readiness().lock().unwrap();
    }

    // Short-circuit on the first error to complete.
    if let Some(err) = failed {
        return Poll::Ready(Err(err));
    }

    if *pending == 0 {
        debug_assert!(items.is_filled(), "every slot should have written its output");
        Poll::Ready(Ok(items.take()))
    } else {
        Poll::Pending
    }
}

impl<S, I, F, T, E> FusedFuture for MapAsync<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Done)
    }
}
