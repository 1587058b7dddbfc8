use crate::consumer::{Consumer, from_fn};

/// Implements `reduce()`: splits a single tuple argument into an argument
/// list for the next stage.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `ReduceOperator`, which unpacks its one tuple argument with
/// `callWithTuple`. Here that unpacking is just handing the inner tuple to
/// `next` as its own `Args` — `Consumer::call` already takes a tuple, so
/// there is nothing left to "unpack" beyond removing one layer of nesting.
pub struct Reduce;

impl Reduce {
    /// Wires this operator in front of `next`. `next` receives `Tuple`
    /// directly instead of a single `(Tuple,)` argument.
    pub fn compose<Next, Tuple>(self, next: Next) -> impl Consumer<(Tuple,), Output = Next::Output>
    where
        Next: Consumer<Tuple>,
    {
        from_fn(move |(tuple,): (Tuple,)| next.call(tuple))
    }
}

/// Splits a tuple input into an argument list for the next stage.
pub fn reduce() -> Reduce {
    Reduce
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_splats_the_tuple_into_separate_arguments() {
        let terminal = |a: i32, b: &str, c: bool| format!("{a}-{b}-{c}");
        let node = reduce().compose(terminal);
        assert_eq!(node.call(((3, "x", true),)), "3-x-true");
    }
}
