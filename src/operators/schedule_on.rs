use std::sync::Arc;

use crate::consumer::{Consumer, from_fn};
use crate::future::SinkFuture;
use crate::schedulers::Scheduler;

/// Implements `scheduleOn()`: forwards each input on the given scheduler
/// instead of running the next stage directly, returning a future for its
/// result.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `SchedulingOperator`. The original passes `newNext` into
/// `scheduler->schedule` by value on every call, which requires it to be
/// copyable; the same requirement shows up here as `Next: Clone`.
pub struct ScheduleOn<S> {
    scheduler: Arc<S>,
}

impl<S> ScheduleOn<S> {
    pub fn new(scheduler: Arc<S>) -> Self {
        ScheduleOn { scheduler }
    }

    /// Wires this operator in front of `next`.
    pub fn compose<Next, Args>(
        self,
        next: Next,
    ) -> impl Consumer<Args, Output = SinkFuture<Next::Output>>
    where
        S: Scheduler,
        Next: Consumer<Args> + Clone + Send + 'static,
        Args: Send + 'static,
        Next::Output: Send + 'static,
    {
        let scheduler = self.scheduler;
        from_fn(move |args: Args| scheduler.schedule(next.clone(), args))
    }
}

/// Forwards each input while running on the given scheduler.
pub fn schedule_on<S>(scheduler: Arc<S>) -> ScheduleOn<S> {
    ScheduleOn::new(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedulers::ImmediateScheduler;

    #[test]
    fn schedule_on_runs_next_via_the_scheduler() {
        let node = schedule_on(Arc::new(ImmediateScheduler)).compose(|x: i32| x * 2);
        assert_eq!(node.call((21,)).get(), Ok(42));
    }
}
