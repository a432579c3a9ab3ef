//! The panic-trapping boundaries.
//!
//! [`run`] and [`run_async`] are the only places in the crate where an
//! unwinding panic is converted into a value. Each invokes the supplied
//! computation exactly once, never retries, and adds no concurrency of
//! its own. Outside these two functions, nothing is ever caught.
//!
//! Note that with `panic = "abort"` there is no unwinding, and therefore
//! nothing to trap.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::future::FutureExt as _;

use crate::{Error, Outcome};

/// Invokes `computation` once inside a trap boundary.
///
/// A normal return becomes a `Success`; an unwinding panic is caught and
/// becomes a `Failure` carrying the panic message as an [`Error`].
///
/// ```
/// use outcome::{run, Outcome};
///
/// assert_eq!(run(|| 2 + 2), Outcome::Success(4));
///
/// let failed = run(|| -> u32 { panic!("no answer") });
/// assert_eq!(failed.unwrap_error().message(), "no answer");
/// ```
///
/// The closure is wrapped in [`AssertUnwindSafe`]: it is called exactly
/// once and nothing of it remains reachable after a trap, so state it
/// closed over cannot be observed half-updated through this function.
pub fn run<T>(computation: impl FnOnce() -> T) -> Outcome<T, Error> {
    match panic::catch_unwind(AssertUnwindSafe(computation)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => trapped(payload),
    }
}

/// Invokes the asynchronous `computation` once and awaits it inside a
/// trap boundary.
///
/// Resolves to a `Success` wrapping the future's output, or to a
/// `Failure` if the computation panics, whether while constructing the
/// future or at any point while it is being polled. Suspension happens
/// only at the computation's own await points; there is no timeout or
/// cancellation, and no synchronous fallback.
///
/// ```
/// use outcome::{run_async, Outcome};
///
/// let outcome = futures::executor::block_on(run_async(|| async { 2 + 2 }));
/// assert_eq!(outcome, Outcome::Success(4));
/// ```
pub async fn run_async<F, Fut, T>(computation: F) -> Outcome<T, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    // An async fn panicking before its first await unwinds out of the
    // constructing call, not out of `poll`.
    let future = match panic::catch_unwind(AssertUnwindSafe(computation)) {
        Ok(future) => future,
        Err(payload) => return trapped(payload),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => trapped(payload),
    }
}

fn trapped<T>(payload: Box<dyn Any + Send>) -> Outcome<T, Error> {
    let error = Error::from_panic(payload);
    #[cfg(feature = "tracing")]
    tracing::debug!(panic = %error, "trapped a panic at the run boundary");
    Outcome::Failure(error)
}
