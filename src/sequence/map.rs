use super::Transform;

use core::fmt;
use core::future::{Future, IntoFuture};
use core::marker::PhantomData;
use core::mem;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

/// A future which resolves a sequence, then transforms its elements one at
/// a time, in order.
///
/// This `struct` is created by the [`map`] function. See its
/// documentation for more.
///
/// [`map`]: crate::sequence::map
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Map<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    #[pin]
    state: State<S, <I::Item as IntoFuture>::IntoFuture, F::Future>,
    /// Remaining elements, available once the sequence has resolved.
    iter: Option<I::IntoIter>,
    items: Vec<F::Output>,
    /// The number of elements transformed so far.
    completed: usize,
    transform: F,
    _phantom: PhantomData<fn() -> (T, E)>,
}

/// At most one future is alive at any time.
#[pin_project(project = StateProj)]
enum State<S, Fut, R> {
    Sequence(#[pin] S),
    Advance,
    Element(#[pin] Fut),
    Transform(#[pin] R),
    Done,
}

impl<S, Fut, R> fmt::Debug for State<S, Fut, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Sequence(_) => "Sequence",
            State::Advance => "Advance",
            State::Element(_) => "Element",
            State::Transform(_) => "Transform",
            State::Done => "Done",
        };
        f.write_str(name)
    }
}

impl<S, I, F, T, E> Map<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    pub(crate) fn new(sequence: S, transform: F) -> Self {
        Self {
            state: State::Sequence(sequence),
            iter: None,
            items: Vec::new(),
            completed: 0,
            transform,
            _phantom: PhantomData,
        }
    }
}

impl<S, I, F, T, E> fmt::Debug for Map<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("state", &self.state)
            .field("completed", &self.completed)
            .finish()
    }
}

impl<S, I, F, T, E> Future for Map<S, I, F, T, E>
where
    S: Future<Output = Result<I, E>>,
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
    F: Transform<T, E>,
{
    type Output = Result<Vec<F::Output>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                StateProj::Sequence(sequence) => match ready!(sequence.poll(cx)) {
                    Ok(sequence) => {
                        let iter = sequence.into_iter();
                        *this.items = Vec::with_capacity(iter.size_hint().0);
                        *this.iter = Some(iter);
                        this.state.set(State::Advance);
                    }
                    Err(err) => {
                        this.state.set(State::Done);
                        return Poll::Ready(Err(err));
                    }
                },
                StateProj::Advance => match this.iter.as_mut().and_then(Iterator::next) {
                    Some(element) => this.state.set(State::Element(element.into_future())),
                    None => {
                        *this.iter = None;
                        this.state.set(State::Done);
                        return Poll::Ready(Ok(mem::take(this.items)));
                    }
                },
                StateProj::Element(element) => match ready!(element.poll(cx)) {
                    Ok(item) => {
                        let future = this.transform.call(item);
                        this.state.set(State::Transform(future));
                    }
                    Err(err) => {
                        this.state.set(State::Done);
                        return Poll::Ready(Err(err));
                    }
                },
                StateProj::Transform(future) => match ready!(future.poll(cx)) {
                    Ok(value) => {
                        this.items.push(value);
                        *this.completed += 1;
                        this.state.set(State::Advance);
                    }
                    Err(err) => {
                        this.state.set(State::Done);
                        return Poll::Ready(Err(err));
                    }
                },
                StateProj::Done => panic!("Futures must not be polled after completing"),
            }
        }
    }
}

impl<S, I, F, T, E> FusedFuture for Map<S, I, F, T, E>
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

#[cfg(test)]
mod test {
    use crate::future::{reject, resolve};
    use crate::sequence::{from_values, map};

    use futures_core::FusedFuture;
    use futures_lite::future::{self, block_on};
    use std::cell::{Cell, RefCell};
    use std::future::{Future, Ready};
    use std::io::{self, Error, ErrorKind};
    use std::pin::{pin, Pin};
    use std::rc::Rc;
    use std::task::{Context, Poll};

    type LocalFuture<'a> = Pin<Box<dyn Future<Output = io::Result<u8>> + 'a>>;

    #[test]
    fn smoke() {
        block_on(async {
            let out: io::Result<_> = map(from_values(vec![1, 2, 3]), |x| resolve(x * 2)).await;
            assert_eq!(out.unwrap(), vec![2, 4, 6]);
        });
    }

    #[test]
    fn empty() {
        block_on(async {
            let calls = Cell::new(0);
            let out: io::Result<Vec<u8>> = map(from_values(Vec::<u8>::new()), |x| {
                calls.set(calls.get() + 1);
                resolve(x)
            })
            .await;
            assert!(out.unwrap().is_empty());
            assert_eq!(calls.get(), 0);
        });
    }

    #[test]
    fn invokes_in_index_order_without_overlap() {
        block_on(async {
            let log = Rc::new(RefCell::new(vec![]));
            let in_flight = Rc::new(Cell::new(0));
            let out: io::Result<_> = map(from_values(vec![3, 1, 2]), |x: u32| {
                let log = log.clone();
                let in_flight = in_flight.clone();
                async move {
                    in_flight.set(in_flight.get() + 1);
                    assert_eq!(in_flight.get(), 1, "two transforms were in flight");
                    log.borrow_mut().push(format!("start {x}"));
                    for _ in 0..x {
                        future::yield_now().await;
                    }
                    log.borrow_mut().push(format!("end {x}"));
                    in_flight.set(in_flight.get() - 1);
                    Ok(x * 10)
                }
            })
            .await;
            assert_eq!(out.unwrap(), vec![30, 10, 20]);
            assert_eq!(
                *log.borrow(),
                ["start 3", "end 3", "start 1", "end 1", "start 2", "end 2"]
            );
        });
    }

    #[test]
    fn short_circuits_on_transform_error() {
        block_on(async {
            let seen = RefCell::new(vec![]);
            let out = map(from_values(vec![0, 1, 2, 3]), |x: u8| {
                seen.borrow_mut().push(x);
                async move {
                    match x {
                        1 => Err(Error::new(ErrorKind::Other, "index 1")),
                        2 => Err(Error::new(ErrorKind::Other, "index 2")),
                        _ => Ok(x),
                    }
                }
            })
            .await;
            assert_eq!(out.unwrap_err().to_string(), "index 1");
            assert_eq!(*seen.borrow(), vec![0, 1]);
        });
    }

    #[test]
    fn short_circuits_on_element_error() {
        block_on(async {
            let polled = Cell::new(false);
            let calls = Cell::new(0);
            let elements: Vec<LocalFuture<'_>> = vec![
                Box::pin(resolve(1u8)),
                Box::pin(reject(Error::new(ErrorKind::Other, "bad element"))),
                Box::pin(async {
                    polled.set(true);
                    Ok::<_, io::Error>(3)
                }),
            ];
            let out = map(resolve(elements), |x| {
                calls.set(calls.get() + 1);
                resolve(x)
            })
            .await;
            assert_eq!(out.unwrap_err().to_string(), "bad element");
            assert_eq!(calls.get(), 1);
            assert!(!polled.get());
        });
    }

    #[test]
    fn rejected_sequence() {
        block_on(async {
            let calls = Cell::new(0);
            let sequence = reject::<Vec<Ready<io::Result<u8>>>, _>(Error::new(
                ErrorKind::Other,
                "no sequence",
            ));
            let out = map(sequence, |x| {
                calls.set(calls.get() + 1);
                resolve(x)
            })
            .await;
            assert_eq!(out.unwrap_err().to_string(), "no sequence");
            assert_eq!(calls.get(), 0);
        });
    }

    #[test]
    fn debug_and_fused() {
        let mut fut = pin!(map(from_values(vec![1, 2]), |x: u8| resolve::<_, ()>(x)));
        assert_eq!(format!("{:?}", fut), "Map { state: Sequence, completed: 0 }");
        assert!(!fut.is_terminated());

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(Ok(vec![1, 2])));
        assert_eq!(format!("{:?}", fut), "Map { state: Done, completed: 2 }");
        assert!(fut.is_terminated());
    }

    #[test]
    #[should_panic(expected = "Futures must not be polled after completing")]
    fn poll_after_completion() {
        let mut fut = pin!(map(from_values(Vec::<u8>::new()), resolve::<_, ()>));
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        let _ = fut.as_mut().poll(&mut cx);
        let _ = fut.as_mut().poll(&mut cx);
    }
}
