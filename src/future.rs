//! A small blocking future/promise pair, used as the result type every
//! scheduler hands back from `schedule()`.
//!
//! Grounded on `original_source/sinkline/src/Scheduler.h`'s use of
//! `std::promise`/`std::future` (`runPromisedAction`). Rather than pull in
//! an async runtime the rest of this crate has no other use for, this is a
//! direct `Mutex`/`Condvar` port of the same promise/future shape — exactly
//! the primitives `std::promise` itself is built from.

use std::sync::{Arc, Condvar, Mutex};

use crate::error::SchedulerError;

struct Shared<T> {
    result: Option<Result<T, SchedulerError>>,
}

/// The receiving half of a scheduled action's result. Produced by every
/// [`crate::schedulers::Scheduler::schedule`] call.
pub struct SinkFuture<T> {
    shared: Arc<Mutex<Shared<T>>>,
    condvar: Arc<Condvar>,
}

/// The sending half, used internally by scheduler implementations to
/// resolve a [`SinkFuture`] once its action has run (or failed).
pub struct SinkPromise<T> {
    shared: Arc<Mutex<Shared<T>>>,
    condvar: Arc<Condvar>,
}

/// Creates a matched promise/future pair with an empty result slot.
pub fn sink_promise<T>() -> (SinkPromise<T>, SinkFuture<T>) {
    let shared = Arc::new(Mutex::new(Shared { result: None }));
    let condvar = Arc::new(Condvar::new());

    (
        SinkPromise { shared: shared.clone(), condvar: condvar.clone() },
        SinkFuture { shared, condvar },
    )
}

impl<T> SinkPromise<T> {
    /// Resolves the paired future with a successful value.
    pub fn fulfill(self, value: T) {
        self.resolve(Ok(value));
    }

    /// Resolves the paired future with a failure.
    pub fn fail(self, error: SchedulerError) {
        self.resolve(Err(error));
    }

    fn resolve(self, result: Result<T, SchedulerError>) {
        let mut guard = self.shared.lock().expect("sink promise mutex poisoned");
        guard.result = Some(result);
        drop(guard);
        self.condvar.notify_all();
    }
}

impl<T> SinkFuture<T> {
    /// Blocks until the scheduled action has run (or the scheduler failed
    /// it), then returns its result.
    pub fn get(self) -> Result<T, SchedulerError> {
        let mut guard = self.shared.lock().expect("sink future mutex poisoned");
        while guard.result.is_none() {
            guard = self.condvar.wait(guard).expect("sink future mutex poisoned");
        }
        guard.result.take().expect("result checked present above")
    }
}

/// Runs `action` with `args`, reporting the result through `promise`.
///
/// The original's `runPromisedAction` also catches any thrown exception and
/// forwards it through the promise; a Rust panic is not an error value to
/// be routed through `Result` the same way; letting it unwind the calling
/// thread (which, for [`crate::schedulers::background`], is the worker
/// thread — the standard library already turns that into a clean thread
/// death) is the idiomatic equivalent.
pub fn run_promised_action<Args, C>(promise: SinkPromise<C::Output>, action: &C, args: Args)
where
    C: crate::consumer::Consumer<Args>,
{
    let value = action.call(args);
    promise.fulfill(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fulfilled_future_returns_the_value() {
        let (promise, future) = sink_promise::<i32>();
        promise.fulfill(42);
        assert_eq!(future.get(), Ok(42));
    }

    #[test]
    fn failed_future_returns_the_error() {
        use crate::error::SchedulerErrorKind;

        let (promise, future) = sink_promise::<i32>();
        promise.fail(SchedulerError::new(SchedulerErrorKind::ShutDown));
        assert_eq!(future.get(), Err(SchedulerError::new(SchedulerErrorKind::ShutDown)));
    }

    #[test]
    fn get_blocks_until_another_thread_fulfills() {
        let (promise, future) = sink_promise::<i32>();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            promise.fulfill(7);
        });

        assert_eq!(future.get(), Ok(7));
        handle.join().unwrap();
    }
}
