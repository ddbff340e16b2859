//! Suspend-until-ready values.
//!
//! A page receives its query parameters as a [`Deferred`]: a value the host
//! may not have produced yet. There is one way to wait for it and two ways to
//! call that wait:
//!
//! - **`.await`** — the render task yields and other requests keep running.
//! - **[`Deferred::wait`]** — the calling code blocks until the value lands.
//!   On a multi-threaded tokio runtime the worker is handed off with
//!   `block_in_place` first, so concurrent renders are not starved.
//!
//! Both paths poll the same future, so identical input yields identical
//! output. If the producer goes away without resolving, both fail with
//! [`Error::Unresolved`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::error::Error;

/// A value that is either already available or will be sent through a
/// [`Resolver`].
#[derive(Debug)]
pub struct Deferred<T> {
    state: State<T>,
}

#[derive(Debug)]
enum State<T> {
    Ready(Option<T>),
    Pending(oneshot::Receiver<T>),
}

/// The producing half of [`Deferred::channel`].
#[derive(Debug)]
pub struct Resolver<T> {
    tx: oneshot::Sender<T>,
}

impl<T> Deferred<T> {
    /// A deferred value that is already resolved.
    pub fn ready(value: T) -> Self {
        Self { state: State::Ready(Some(value)) }
    }

    /// A deferred value resolved later through the returned [`Resolver`].
    pub fn channel() -> (Resolver<T>, Self) {
        let (tx, rx) = oneshot::channel();
        (Resolver { tx }, Self { state: State::Pending(rx) })
    }

    /// Blocks the caller until the value resolves.
    ///
    /// Already-resolved values return immediately. Otherwise, inside a tokio
    /// runtime the wait runs under `block_in_place`; outside one the thread
    /// simply parks on the channel.
    ///
    /// # Panics
    ///
    /// Panics if called on a current-thread tokio runtime while the value is
    /// still pending, since that runtime cannot hand the worker off.
    pub fn wait(self) -> Result<T, Error> {
        let rx = match self.state {
            State::Ready(value) => return value.ok_or(Error::Unresolved),
            State::Pending(rx) => rx,
        };

        match Handle::try_current() {
            Ok(handle) => tokio::task::block_in_place(|| {
                handle.block_on(Self { state: State::Pending(rx) })
            }),
            Err(_) => rx.blocking_recv().map_err(|_| Error::Unresolved),
        }
    }
}

// The value is only ever moved out, never pinned in place.
impl<T> Unpin for Deferred<T> {}

impl<T> Future for Deferred<T> {
    type Output = Result<T, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            State::Ready(value) => Poll::Ready(value.take().ok_or(Error::Unresolved)),
            State::Pending(rx) => Pin::new(rx).poll(cx).map_err(|_| Error::Unresolved),
        }
    }
}

impl<T> Resolver<T> {
    /// Delivers `value`. A waiter that has already been dropped is ignored:
    /// an abandoned render needs no cleanup.
    pub fn resolve(self, value: T) {
        let _ = self.tx.send(value);
    }
}
