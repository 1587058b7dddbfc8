use crate::consumer::{Consumer, from_fn};
use crate::tuple::{ExtractFirst, ExtractFirstAtSecond};

/// Implements `onError()`: extracts an error out of the argument pack and
/// either handles it or forwards the rest.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `ErrorOperator`. The original finds the error argument by type and
/// truthiness (`if (error)`); here the error channel is represented as
/// `Option<Err>` (idiomatic Rust's "this may not be present", playing the
/// same role as the original's default-constructed-then-overwritten,
/// pointer-like error value) and location is fixed at the type level via
/// [`ExtractFirst`]/[`ExtractFirstAtSecond`] rather than scanned for at
/// runtime.
pub struct OnError<H> {
    handler: H,
}

impl<H> OnError<H> {
    pub fn new(handler: H) -> Self {
        OnError { handler }
    }

    /// Wires this operator in front of `next`, where the error channel is
    /// the first element of the argument tuple.
    pub fn compose<Next, Args, Err, Rest>(
        self,
        next: Next,
    ) -> impl Consumer<Args, Output = Next::Output>
    where
        Args: ExtractFirst<Option<Err>, Rest = Rest>,
        H: Consumer<(Err,), Output = Next::Output>,
        Next: Consumer<Rest>,
    {
        let handler = self.handler;
        from_fn(move |args: Args| {
            let (error, rest) = args.extract_first();
            match error {
                Some(err) => handler.call((err,)),
                None => next.call(rest),
            }
        })
    }

    /// Wires this operator in front of `next`, where the error channel is
    /// the second element of a binary argument tuple.
    pub fn compose_trailing<Next, Args, Err, V>(
        self,
        next: Next,
    ) -> impl Consumer<Args, Output = Next::Output>
    where
        Args: ExtractFirstAtSecond<Option<Err>, Leading = V>,
        H: Consumer<(Err,), Output = Next::Output>,
        Next: Consumer<(V,)>,
    {
        let handler = self.handler;
        from_fn(move |args: Args| {
            let (error, rest) = args.extract_first_at_second();
            match error {
                Some(err) => handler.call((err,)),
                None => next.call(rest),
            }
        })
    }
}

/// Matches upon an error type, invoking the given handler if an error is
/// found, or forwarding the remaining arguments if not.
pub fn on_error<H>(handler: H) -> OnError<H> {
    OnError::new(handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_error_invokes_handler_when_present() {
        let terminal = |rest: i32| rest.to_string();
        let node = on_error(|err: &'static str| format!("handled: {err}")).compose(terminal);

        assert_eq!(node.call((Some("boom"), 5)), "handled: boom");
        assert_eq!(node.call((None, 5)), "5");
    }
}
