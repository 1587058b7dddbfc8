use crate::consumer::Consumer;
use crate::future::{sink_promise, SinkFuture};

use super::Scheduler;

/// Runs every scheduled action synchronously, on the calling thread.
///
/// Grounded on `original_source/sinkline/src/Scheduler.h`'s
/// `ImmediateScheduler`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule<Args, C>(&self, action: C, args: Args) -> SinkFuture<C::Output>
    where
        C: Consumer<Args> + Send + 'static,
        Args: Send + 'static,
        C::Output: Send + 'static,
    {
        let (promise, future) = sink_promise();
        promise.fulfill(action.call(args));
        future
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_scheduler_runs_synchronously() {
        let scheduler = ImmediateScheduler;
        let future = scheduler.schedule(|x: i32| x * 2, (21,));
        assert_eq!(future.get(), Ok(42));
    }
}
