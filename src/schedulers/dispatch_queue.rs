//! GCD-backed scheduler, only compiled on macOS behind the `dispatch-queue`
//! feature.
//!
//! Grounded on `original_source/sinkline/src/Scheduler.h`'s `GCDScheduler`,
//! conditionally compiled there behind `#if DISPATCH_API_VERSION`. The
//! `dispatch` crate provides the real Grand Central Dispatch FFI bindings
//! this needs; no pack example already depends on it, so it's pulled in
//! fresh for this one scheduler backend (see `DESIGN.md`). `scheduleAfter`
//! there is a template over `Clock` that branches on `Clock::is_steady`;
//! that branch shows up here as two entry points, [`DispatchQueueScheduler::schedule_after`]
//! (wall-clock, `SystemTime`) and [`DispatchQueueScheduler::schedule_after_steady`]
//! (monotonic, `Instant`), both funneling into the same relative-delay call
//! to the underlying queue.

use std::time::{Duration, Instant, SystemTime};

use dispatch::{Queue, QueueAttribute};

use crate::consumer::Consumer;
use crate::future::{sink_promise, SinkFuture};

use super::Scheduler;

/// Runs scheduled actions on a GCD serial queue.
pub struct DispatchQueueScheduler {
    queue: Queue,
}

impl DispatchQueueScheduler {
    /// Creates a new private serial queue with the given label.
    pub fn new(label: &str) -> Self {
        DispatchQueueScheduler { queue: Queue::create(label, QueueAttribute::Serial) }
    }

    /// A scheduler backed by the main dispatch queue, for work that must
    /// run on the main thread. Mirrors `GCDScheduler::mainQueueScheduler`.
    pub fn main_queue() -> Self {
        DispatchQueueScheduler { queue: Queue::main() }
    }

    /// Like [`Scheduler::schedule`], but the action doesn't run until
    /// `when`, a wall-clock instant. Mirrors the non-steady branch of
    /// `GCDScheduler::scheduleAfter`, which builds an absolute `timespec`
    /// and calls `dispatch_walltime`; here the absolute time is instead
    /// turned into a relative delay up front, since `dispatch::Queue` only
    /// exposes `exec_after(Duration)`.
    pub fn schedule_after<Args, C>(
        &self,
        when: SystemTime,
        action: C,
        args: Args,
    ) -> SinkFuture<C::Output>
    where
        C: Consumer<Args> + Send + 'static,
        Args: Send + 'static,
        C::Output: Send + 'static,
    {
        let delay = when.duration_since(SystemTime::now()).unwrap_or(Duration::ZERO);
        self.run_after(delay, action, args)
    }

    /// Like [`schedule_after`](Self::schedule_after), but `when` is a
    /// monotonic [`Instant`] rather than a wall-clock time. Mirrors the
    /// steady branch of `GCDScheduler::scheduleAfter`, which computes a
    /// relative nanosecond delta from `Clock::now()` and calls
    /// `dispatch_time(DISPATCH_TIME_NOW, nsDelta.count())` — unaffected by
    /// system clock adjustments, unlike [`schedule_after`](Self::schedule_after).
    pub fn schedule_after_steady<Args, C>(
        &self,
        when: Instant,
        action: C,
        args: Args,
    ) -> SinkFuture<C::Output>
    where
        C: Consumer<Args> + Send + 'static,
        Args: Send + 'static,
        C::Output: Send + 'static,
    {
        let delay = when.saturating_duration_since(Instant::now());
        self.run_after(delay, action, args)
    }

    fn run_after<Args, C>(&self, delay: Duration, action: C, args: Args) -> SinkFuture<C::Output>
    where
        C: Consumer<Args> + Send + 'static,
        Args: Send + 'static,
        C::Output: Send + 'static,
    {
        let (promise, future) = sink_promise::<C::Output>();

        self.queue.exec_after(delay, move || {
            let value = action.call(args);
            promise.fulfill(value);
        });

        future
    }

    /// Suspends the underlying dispatch queue.
    pub fn suspend(&self) {
        self.queue.suspend();
    }

    /// Resumes the underlying dispatch queue.
    pub fn resume(&self) {
        self.queue.resume();
    }
}

impl Scheduler for DispatchQueueScheduler {
    fn schedule<Args, C>(&self, action: C, args: Args) -> SinkFuture<C::Output>
    where
        C: Consumer<Args> + Send + 'static,
        Args: Send + 'static,
        C::Output: Send + 'static,
    {
        let (promise, future) = sink_promise::<C::Output>();

        self.queue.exec_async(move || {
            let value = action.call(args);
            promise.fulfill(value);
        });

        future
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_after_wall_clock_runs_and_forwards_the_result() {
        let scheduler = DispatchQueueScheduler::new("sinkline.test.wall");
        let when = SystemTime::now() + Duration::from_millis(5);
        let future = scheduler.schedule_after(when, |x: i32| x * 2, (21,));
        assert_eq!(future.get(), Ok(42));
    }

    #[test]
    fn schedule_after_steady_runs_and_forwards_the_result() {
        let scheduler = DispatchQueueScheduler::new("sinkline.test.steady");
        let when = Instant::now() + Duration::from_millis(5);
        let future = scheduler.schedule_after_steady(when, |x: i32| x * 2, (21,));
        assert_eq!(future.get(), Ok(42));
    }

    #[test]
    fn schedule_after_steady_with_a_past_instant_runs_immediately() {
        let scheduler = DispatchQueueScheduler::new("sinkline.test.steady.past");
        let when = Instant::now();
        let future = scheduler.schedule_after_steady(when, |x: i32| x + 1, (1,));
        assert_eq!(future.get(), Ok(2));
    }
}
