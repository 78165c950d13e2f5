//! Wall-clock timing of function calls.
//!
//! Timestamps are taken inside the wrapper around the call, so the reported duration
//! includes the (negligible) cost of the wrapper itself.

use std::{future::Future, time::Instant};

use crate::timed::Timed;

/// Calls `f` once and times it on the monotonic clock.
pub fn measure<R>(f: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let value = f();
    let end = Instant::now();
    Timed::new(value, end - start)
}

/// Wraps `f` so that every call also reports how long it took.
///
/// Callables taking several arguments are wrapped by taking them as a tuple.
/// Panics raised by `f` unwind through the wrapper untouched.
pub fn get_time<A, R>(f: impl Fn(A) -> R) -> impl Fn(A) -> Timed<R> {
    move |args| measure(|| f(args))
}

/// Like [`get_time`], for callables that can fail. An error is passed back exactly as
/// `f` returned it, and the timing of that call is discarded.
pub fn try_get_time<A, T, E>(
    f: impl Fn(A) -> Result<T, E>,
) -> impl Fn(A) -> Result<Timed<T>, E> {
    move |args| measure(|| f(args)).transpose()
}

/// Times `future` from its first poll until it completes.
pub async fn measure_async<F: Future>(future: F) -> Timed<F::Output> {
    let start = tokio::time::Instant::now();
    let value = future.await;
    Timed::new(value, start.elapsed())
}
