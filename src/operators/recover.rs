use crate::consumer::{Consumer, from_fn};
use crate::tuple::{ExtractFirst, ExtractFirstAtSecond};

/// Implements `recover()`: like [`super::OnError`], but the handler produces
/// a replacement "success" value instead of short-circuiting.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `RecoverOperator`. Since the non-error branch always has exactly one
/// value left to forward (the replacement and the success value must be the
/// same type `V` for `next` to accept either), this only supports binary
/// argument packs: `(Option<Err>, V)` or `(V, Option<Err>)`.
pub struct Recover<H> {
    handler: H,
}

impl<H> Recover<H> {
    pub fn new(handler: H) -> Self {
        Recover { handler }
    }

    /// Wires this operator in front of `next`, where the error channel is
    /// the first element of the argument tuple.
    pub fn compose<Next, Args, Err, V>(self, next: Next) -> impl Consumer<Args, Output = Next::Output>
    where
        Args: ExtractFirst<Option<Err>, Rest = (V,)>,
        H: Consumer<(Err,), Output = V>,
        Next: Consumer<(V,)>,
    {
        let handler = self.handler;
        from_fn(move |args: Args| {
            let (error, (value,)) = args.extract_first();
            let value = match error {
                Some(err) => handler.call((err,)),
                None => value,
            };
            next.call((value,))
        })
    }

    /// Wires this operator in front of `next`, where the error channel is
    /// the second element of the argument tuple.
    pub fn compose_trailing<Next, Args, Err, V>(
        self,
        next: Next,
    ) -> impl Consumer<Args, Output = Next::Output>
    where
        Args: ExtractFirstAtSecond<Option<Err>, Leading = V>,
        H: Consumer<(Err,), Output = V>,
        Next: Consumer<(V,)>,
    {
        let handler = self.handler;
        from_fn(move |args: Args| {
            let (error, (value,)) = args.extract_first_at_second();
            let value = match error {
                Some(err) => handler.call((err,)),
                None => value,
            };
            next.call((value,))
        })
    }
}

/// Matches upon an error type, invoking a handler responsible for producing
/// a replacement value to forward in its place.
pub fn recover<H>(handler: H) -> Recover<H> {
    Recover::new(handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recover_replaces_only_on_error() {
        let terminal = |v: i32| v * 10;
        let node = recover(|_err: &'static str| -1).compose(terminal);

        assert_eq!(node.call((Some("boom"), 5)), -10);
        assert_eq!(node.call((None, 5)), 50);
    }
}
