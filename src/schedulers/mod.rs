//! Scheduler backends: things that accept an action and a matching argument
//! list, run the action (on whatever timeline the scheduler owns), and hand
//! back a [`crate::future::SinkFuture`] for the result.
//!
//! Grounded on `original_source/sinkline/src/Scheduler.h`.

mod background;
mod immediate;

#[cfg(all(target_os = "macos", feature = "dispatch-queue"))]
mod dispatch_queue;

pub use background::BackgroundScheduler;
pub use immediate::ImmediateScheduler;

#[cfg(all(target_os = "macos", feature = "dispatch-queue"))]
pub use dispatch_queue::DispatchQueueScheduler;

use crate::consumer::Consumer;
use crate::future::SinkFuture;

/// Something that can run a [`Consumer`] with a given argument list and
/// report the result through a future.
pub trait Scheduler {
    /// Schedules `action` to run with `args`, returning a future for its
    /// result. Whether the action has already run, is queued, or is
    /// running concurrently with this call is up to the implementation.
    fn schedule<Args, C>(&self, action: C, args: Args) -> SinkFuture<C::Output>
    where
        C: Consumer<Args> + Send + 'static,
        Args: Send + 'static,
        C::Output: Send + 'static;
}

/// Wraps `fn_once` so that calling it schedules `fn_once` onto `scheduler`
/// and discards the result, instead of running it directly.
///
/// Grounded on `original_source/sinkline/src/Scheduler.h`'s `reschedule()` /
/// `RescheduleHelper`. The original dispatches on the concrete callable
/// shape (free function, lambda, Objective-C block) purely to preserve its
/// argument list in the returned wrapper; in Rust, a generic `Args` plays
/// that role directly, so there is only one implementation instead of the
/// original's three.
pub fn reschedule<S, F, Args>(scheduler: std::sync::Arc<S>, action: F) -> impl Fn(Args)
where
    S: Scheduler + Send + Sync + 'static,
    F: Consumer<Args, Output = ()> + Clone + Send + Sync + 'static,
    Args: Send + 'static,
{
    move |args: Args| {
        let _future = scheduler.schedule(action.clone(), args);
    }
}
